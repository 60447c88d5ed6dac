//! Quiz, question and choice repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use super::entities::choice::{self, Entity as ChoiceEntity};
use super::entities::question::{self, Entity as QuestionEntity, QuestionKind};
use super::entities::quiz::{self, Entity as QuizEntity};
use common::AppResult;
use domain::{Choice, NewChoice, NewQuestion, NewQuiz, Question, Quiz};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Quiz repository trait for dependency injection.
///
/// Questions and choices come back in their `position` order, ties broken
/// by insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Create a new quiz
    async fn create_quiz(&self, new_quiz: NewQuiz) -> AppResult<Quiz>;

    /// Find quiz by ID
    async fn find_quiz(&self, id: i32) -> AppResult<Option<Quiz>>;

    /// Quizzes authored by a user
    async fn quizzes_by_creator(&self, creator_user_id: i32) -> AppResult<Vec<Quiz>>;

    /// Quizzes filed under a subject
    async fn quizzes_for_subject(&self, subject_id: i32) -> AppResult<Vec<Quiz>>;

    /// Quizzes whose publication flag is set
    async fn list_published(&self) -> AppResult<Vec<Quiz>>;

    /// Create a question in a quiz
    async fn create_question(&self, new_question: NewQuestion) -> AppResult<Question>;

    /// Find question by ID
    async fn find_question(&self, id: i32) -> AppResult<Option<Question>>;

    /// Questions of a quiz in order
    async fn questions_for_quiz(&self, quiz_id: i32) -> AppResult<Vec<Question>>;

    /// Create a choice for a question
    async fn create_choice(&self, new_choice: NewChoice) -> AppResult<Choice>;

    /// Find choice by ID
    async fn find_choice(&self, id: i32) -> AppResult<Option<Choice>>;

    /// Choices of a question in order
    async fn choices_for_question(&self, question_id: i32) -> AppResult<Vec<Choice>>;
}

/// Concrete implementation of QuizRepository over any connection
pub struct QuizStore<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> QuizStore<'c, C> {
    /// Create new repository instance
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'c, C> QuizRepository for QuizStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_quiz(&self, new_quiz: NewQuiz) -> AppResult<Quiz> {
        new_quiz.validate()?;

        let active_model = quiz::ActiveModel {
            title: Set(new_quiz.title),
            description: Set(new_quiz.description),
            subject_id: Set(new_quiz.subject_id),
            creator_user_id: Set(new_quiz.creator_user_id),
            total_marks: Set(new_quiz.total_marks),
            is_published: Set(new_quiz.is_published),
            start_time: Set(new_quiz.start_time),
            end_time: Set(new_quiz.end_time),
            allowed_duration_seconds: Set(new_quiz.allowed_duration_seconds),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            quiz_id = model.quiz_id,
            creator_user_id = model.creator_user_id,
            "quiz created"
        );
        Ok(Quiz::from(model))
    }

    async fn find_quiz(&self, id: i32) -> AppResult<Option<Quiz>> {
        let result = QuizEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Quiz::from))
    }

    async fn quizzes_by_creator(&self, creator_user_id: i32) -> AppResult<Vec<Quiz>> {
        let models = QuizEntity::find()
            .filter(quiz::Column::CreatorUserId.eq(creator_user_id))
            .order_by_asc(quiz::Column::QuizId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Quiz::from).collect())
    }

    async fn quizzes_for_subject(&self, subject_id: i32) -> AppResult<Vec<Quiz>> {
        let models = QuizEntity::find()
            .filter(quiz::Column::SubjectId.eq(subject_id))
            .order_by_asc(quiz::Column::QuizId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Quiz::from).collect())
    }

    async fn list_published(&self) -> AppResult<Vec<Quiz>> {
        let models = QuizEntity::find()
            .filter(quiz::Column::IsPublished.eq(true))
            .order_by_asc(quiz::Column::QuizId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Quiz::from).collect())
    }

    async fn create_question(&self, new_question: NewQuestion) -> AppResult<Question> {
        new_question.validate()?;

        let active_model = question::ActiveModel {
            quiz_id: Set(new_question.quiz_id),
            text: Set(new_question.text),
            question_type: Set(QuestionKind::from(new_question.question_type)),
            marks: Set(new_question.marks),
            position: Set(new_question.position),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            question_id = model.question_id,
            quiz_id = model.quiz_id,
            "question created"
        );
        Ok(Question::from(model))
    }

    async fn find_question(&self, id: i32) -> AppResult<Option<Question>> {
        let result = QuestionEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Question::from))
    }

    async fn questions_for_quiz(&self, quiz_id: i32) -> AppResult<Vec<Question>> {
        let models = QuestionEntity::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .order_by_asc(question::Column::Position)
            .order_by_asc(question::Column::QuestionId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn create_choice(&self, new_choice: NewChoice) -> AppResult<Choice> {
        new_choice.validate()?;

        let active_model = choice::ActiveModel {
            question_id: Set(new_choice.question_id),
            text: Set(new_choice.text),
            is_correct: Set(new_choice.is_correct),
            position: Set(new_choice.position),
            ..Default::default()
        };

        let model = active_model.insert(self.db).await?;
        tracing::debug!(
            choice_id = model.choice_id,
            question_id = model.question_id,
            "choice created"
        );
        Ok(Choice::from(model))
    }

    async fn find_choice(&self, id: i32) -> AppResult<Option<Choice>> {
        let result = ChoiceEntity::find_by_id(id).one(self.db).await?;
        Ok(result.map(Choice::from))
    }

    async fn choices_for_question(&self, question_id: i32) -> AppResult<Vec<Choice>> {
        let models = ChoiceEntity::find()
            .filter(choice::Column::QuestionId.eq(question_id))
            .order_by_asc(choice::Column::Position)
            .order_by_asc(choice::Column::ChoiceId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Choice::from).collect())
    }
}
