//! Quiz, question and choice records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    DEFAULT_POSITION, DEFAULT_QUESTION_MARKS, QUESTION_TYPE_MCQ_MULTIPLE,
    QUESTION_TYPE_MCQ_SINGLE, QUESTION_TYPE_SHORT,
};
use crate::error::DomainError;

/// Quiz authored by a single creator.
///
/// The creator is expected to be an instructor, but that is not checked.
/// `start_time`, `end_time` and `allowed_duration_seconds` are stored as
/// given; nothing orders or enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub subject_id: Option<i32>,
    pub creator_user_id: i32,
    pub total_marks: Option<i32>,
    pub is_published: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub allowed_duration_seconds: Option<i32>,
}

/// Quiz creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuiz {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub subject_id: Option<i32>,
    pub creator_user_id: i32,
    pub total_marks: Option<i32>,
    #[serde(default)]
    pub is_published: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub allowed_duration_seconds: Option<i32>,
}

impl NewQuiz {
    /// Unpublished quiz with no subject, marks or schedule.
    pub fn new(creator_user_id: i32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            subject_id: None,
            creator_user_id,
            total_marks: None,
            is_published: false,
            start_time: None,
            end_time: None,
            allowed_duration_seconds: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn in_subject(mut self, subject_id: i32) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    pub fn with_total_marks(mut self, total_marks: i32) -> Self {
        self.total_marks = Some(total_marks);
        self
    }

    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }

    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_duration_seconds(mut self, seconds: i32) -> Self {
        self.allowed_duration_seconds = Some(seconds);
        self
    }
}

/// Kind of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    McqSingle,
    McqMultiple,
    Short,
}

impl QuestionType {
    /// Stored name of the question type
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::McqSingle => QUESTION_TYPE_MCQ_SINGLE,
            QuestionType::McqMultiple => QUESTION_TYPE_MCQ_MULTIPLE,
            QuestionType::Short => QUESTION_TYPE_SHORT,
        }
    }

    /// Whether answers select from the question's choices
    pub fn has_choices(&self) -> bool {
        !matches!(self, QuestionType::Short)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            QUESTION_TYPE_MCQ_SINGLE => Ok(QuestionType::McqSingle),
            QUESTION_TYPE_MCQ_MULTIPLE => Ok(QuestionType::McqMultiple),
            QUESTION_TYPE_SHORT => Ok(QuestionType::Short),
            other => Err(DomainError::validation(format!(
                "unknown question type '{other}'"
            ))),
        }
    }
}

/// Question belonging to exactly one quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub quiz_id: i32,
    pub text: String,
    pub question_type: QuestionType,
    pub marks: i32,
    pub position: i32,
}

/// Question creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    pub quiz_id: i32,
    #[validate(length(min = 1))]
    pub text: String,
    #[serde(default)]
    pub question_type: QuestionType,
    #[serde(default = "default_marks")]
    pub marks: i32,
    #[serde(default)]
    pub position: i32,
}

fn default_marks() -> i32 {
    DEFAULT_QUESTION_MARKS
}

impl NewQuestion {
    /// Single-answer multiple choice question worth the default marks.
    pub fn new(quiz_id: i32, text: impl Into<String>) -> Self {
        Self {
            quiz_id,
            text: text.into(),
            question_type: QuestionType::default(),
            marks: DEFAULT_QUESTION_MARKS,
            position: DEFAULT_POSITION,
        }
    }

    pub fn of_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }

    pub fn with_marks(mut self, marks: i32) -> Self {
        self.marks = marks;
        self
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Choice belonging to exactly one question.
///
/// `is_correct` must not reach students; use [`ChoiceView`] for anything
/// shown to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
    #[serde(skip_serializing, default)]
    pub is_correct: bool,
    pub position: i32,
}

/// Choice creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewChoice {
    pub question_id: i32,
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub position: i32,
}

impl NewChoice {
    /// Incorrect choice at the default position.
    pub fn new(question_id: i32, text: impl Into<String>) -> Self {
        Self {
            question_id,
            text: text.into(),
            is_correct: false,
            position: DEFAULT_POSITION,
        }
    }

    pub fn correct(mut self) -> Self {
        self.is_correct = true;
        self
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Choice as shown to a student (correctness withheld)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
    pub position: i32,
}

impl From<&Choice> for ChoiceView {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id,
            question_id: choice.question_id,
            text: choice.text.clone(),
            position: choice.position,
        }
    }
}

impl From<Choice> for ChoiceView {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id,
            question_id: choice.question_id,
            text: choice.text,
            position: choice.position,
        }
    }
}
