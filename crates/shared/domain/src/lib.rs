//! Domain layer - Quiz records and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Persisted records carry their surrogate key; `New*` types are the
//! validated inputs used to insert them.

pub mod attempt;
pub mod constants;
pub mod error;
pub mod quiz;
pub mod subject;
pub mod user;

pub use attempt::{Answer, Attempt, NewAnswer, NewAttempt};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use quiz::{Choice, ChoiceView, NewChoice, NewQuestion, NewQuiz, Question, QuestionType, Quiz};
pub use subject::{Enrollment, NewEnrollment, NewSubject, Subject};
pub use user::{NewRole, NewUser, Role, User, UserResponse, UserRole};
