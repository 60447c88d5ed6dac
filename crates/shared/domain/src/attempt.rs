//! Attempt and answer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One student's attempt at one quiz.
///
/// Scoring and timing are recorded as given; no grading happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i32,
    pub quiz_id: i32,
    pub user_id: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
    pub is_graded: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Attempt creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAttempt {
    pub quiz_id: i32,
    pub user_id: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
    #[serde(default)]
    pub is_graded: bool,
    #[validate(length(max = 45))]
    pub ip_address: Option<String>,
    #[validate(length(max = 300))]
    pub user_agent: Option<String>,
}

impl NewAttempt {
    pub fn new(quiz_id: i32, user_id: i32) -> Self {
        Self {
            quiz_id,
            user_id,
            started_at: None,
            submitted_at: None,
            score: None,
            is_graded: false,
            ip_address: None,
            user_agent: None,
        }
    }

    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.started_at = Some(at);
        self
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(at);
        self
    }

    pub fn graded(mut self, score: f64) -> Self {
        self.score = Some(score);
        self.is_graded = true;
        self
    }

    /// Record the client the attempt was made from
    pub fn with_client(
        mut self,
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        self.ip_address = Some(ip_address.into());
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// One response within an attempt.
///
/// `selected_choice_ids` keeps the order the choices were given in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i32,
    pub attempt_id: i32,
    pub question_id: Option<i32>,
    pub selected_choice_ids: Option<Vec<i32>>,
    pub text_response: Option<String>,
    pub marks_awarded: Option<f64>,
}

/// Answer creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct NewAnswer {
    pub attempt_id: i32,
    pub question_id: Option<i32>,
    pub selected_choice_ids: Option<Vec<i32>>,
    pub text_response: Option<String>,
    pub marks_awarded: Option<f64>,
}

impl NewAnswer {
    pub fn new(attempt_id: i32) -> Self {
        Self {
            attempt_id,
            question_id: None,
            selected_choice_ids: None,
            text_response: None,
            marks_awarded: None,
        }
    }

    pub fn for_question(mut self, question_id: i32) -> Self {
        self.question_id = Some(question_id);
        self
    }

    pub fn selecting(mut self, choice_ids: impl Into<Vec<i32>>) -> Self {
        self.selected_choice_ids = Some(choice_ids.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_response = Some(text.into());
        self
    }

    pub fn with_marks(mut self, marks: f64) -> Self {
        self.marks_awarded = Some(marks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_metadata_lengths_are_validated() {
        let ok = NewAttempt::new(1, 2).with_client("2001:db8::1", "Mozilla/5.0");
        assert!(ok.validate().is_ok());

        let long_ip = NewAttempt::new(1, 2).with_client("9".repeat(46), "agent");
        assert!(long_ip.validate().is_err());

        let long_agent = NewAttempt::new(1, 2).with_client("127.0.0.1", "a".repeat(301));
        assert!(long_agent.validate().is_err());
    }

    #[test]
    fn graded_sets_score_and_flag() {
        let attempt = NewAttempt::new(1, 2).graded(8.5);
        assert!(attempt.is_graded);
        assert_eq!(attempt.score, Some(8.5));
    }

    #[test]
    fn selected_choices_keep_their_order() {
        let answer = NewAnswer::new(1).for_question(4).selecting(vec![5, 2]);
        assert_eq!(answer.selected_choice_ids, Some(vec![5, 2]));
    }
}
