//! Subject and enrollment records.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Named topic area that quizzes may belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Subject creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSubject {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl NewSubject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A student's registration in a subject.
///
/// A user may be enrolled in a given subject at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub subject_id: i32,
}

/// Enrollment creation data transfer object
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewEnrollment {
    pub user_id: i32,
    pub subject_id: i32,
}

impl NewEnrollment {
    pub fn new(user_id: i32, subject_id: i32) -> Self {
        Self { user_id, subject_id }
    }
}
