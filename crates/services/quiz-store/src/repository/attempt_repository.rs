//! Attempt and answer repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use super::entities::answer::{self, ChoiceIds, Entity as AnswerEntity};
use super::entities::attempt::{self, Entity as AttemptEntity};
use common::AppResult;
use domain::{Answer, Attempt, NewAnswer, NewAttempt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Attempt repository trait for dependency injection.
///
/// Scores and marks are stored as given; nothing here grades.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Record a new attempt
    async fn create_attempt(&self, new_attempt: NewAttempt) -> AppResult<Attempt>;

    /// Find attempt by ID
    async fn find_attempt(&self, id: i32) -> AppResult<Option<Attempt>>;

    /// Attempts made at a quiz
    async fn attempts_for_quiz(&self, quiz_id: i32) -> AppResult<Vec<Attempt>>;

    /// Attempts made by a user
    async fn attempts_for_user(&self, user_id: i32) -> AppResult<Vec<Attempt>>;

    /// Record an answer within an attempt
    async fn record_answer(&self, new_answer: NewAnswer) -> AppResult<Answer>;

    /// Find answer by ID
    async fn find_answer(&self, id: i32) -> AppResult<Option<Answer>>;

    /// Answers of an attempt in the order they were recorded
    async fn answers_for_attempt(&self, attempt_id: i32) -> AppResult<Vec<Answer>>;
}

/// Concrete implementation of AttemptRepository over any connection
pub struct AttemptStore<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> AttemptStore<'c, C> {
    /// Create new repository instance
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'c, C> AttemptRepository for AttemptStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_attempt(&self, new_attempt: NewAttempt) -> AppResult<Attempt> {
        new_attempt.validate()?;

        let active_model = attempt::ActiveModel {
            quiz_id: Set(new_attempt.quiz_id),
            user_id: Set(new_attempt.user_id),
            started_at: Set(new_attempt.started_at),
            submitted_at: Set(new_attempt.submitted_at),
            score: Set(new_attempt.score),
            is_graded: Set(new_attempt.is_graded),
            ip_address: Set(new_attempt.ip_address),
            user_agent: Set(new_attempt.user_agent),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            attempt_id = model.attempt_id,
            quiz_id = model.quiz_id,
            user_id = model.user_id,
            "attempt recorded"
        );
        Ok(Attempt::from(model))
    }

    async fn find_attempt(&self, id: i32) -> AppResult<Option<Attempt>> {
        let result = AttemptEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Attempt::from))
    }

    async fn attempts_for_quiz(&self, quiz_id: i32) -> AppResult<Vec<Attempt>> {
        let models = AttemptEntity::find()
            .filter(attempt::Column::QuizId.eq(quiz_id))
            .order_by_asc(attempt::Column::AttemptId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Attempt::from).collect())
    }

    async fn attempts_for_user(&self, user_id: i32) -> AppResult<Vec<Attempt>> {
        let models = AttemptEntity::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .order_by_asc(attempt::Column::AttemptId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Attempt::from).collect())
    }

    async fn record_answer(&self, new_answer: NewAnswer) -> AppResult<Answer> {
        let active_model = answer::ActiveModel {
            attempt_id: Set(new_answer.attempt_id),
            question_id: Set(new_answer.question_id),
            selected_choice_ids: Set(new_answer.selected_choice_ids.map(ChoiceIds)),
            text_response: Set(new_answer.text_response),
            marks_awarded: Set(new_answer.marks_awarded),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            answer_id = model.answer_id,
            attempt_id = model.attempt_id,
            "answer recorded"
        );
        Ok(Answer::from(model))
    }

    async fn find_answer(&self, id: i32) -> AppResult<Option<Answer>> {
        let result = AnswerEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Answer::from))
    }

    async fn answers_for_attempt(&self, attempt_id: i32) -> AppResult<Vec<Answer>> {
        let models = AnswerEntity::find()
            .filter(answer::Column::AttemptId.eq(attempt_id))
            .order_by_asc(answer::Column::AnswerId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Answer::from).collect())
    }
}
