//! Repository layer for data access.
//!
//! Every store borrows a connection, so the same store type works on the
//! pool and inside a transaction. Stores only insert and read; the schema
//! defines no update or delete lifecycle.

mod attempt_repository;
pub mod entities;
mod quiz_repository;
mod subject_repository;
mod unit_of_work;
mod user_repository;

pub use attempt_repository::{AttemptRepository, AttemptStore};
pub use quiz_repository::{QuizRepository, QuizStore};
pub use subject_repository::{SubjectRepository, SubjectStore};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use attempt_repository::MockAttemptRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use quiz_repository::MockQuizRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use subject_repository::MockSubjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
