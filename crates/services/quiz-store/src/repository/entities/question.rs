//! Question database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Question, QuestionType};

/// Stored form of [`QuestionType`]; unknown strings fail to decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
pub enum QuestionKind {
    #[sea_orm(string_value = "mcq_single")]
    McqSingle,
    #[sea_orm(string_value = "mcq_multiple")]
    McqMultiple,
    #[sea_orm(string_value = "short")]
    Short,
}

impl From<QuestionType> for QuestionKind {
    fn from(kind: QuestionType) -> Self {
        match kind {
            QuestionType::McqSingle => QuestionKind::McqSingle,
            QuestionType::McqMultiple => QuestionKind::McqMultiple,
            QuestionType::Short => QuestionKind::Short,
        }
    }
}

impl From<QuestionKind> for QuestionType {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::McqSingle => QuestionType::McqSingle,
            QuestionKind::McqMultiple => QuestionType::McqMultiple,
            QuestionKind::Short => QuestionType::Short,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub question_id: i32,
    pub quiz_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub question_type: QuestionKind,
    pub marks: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::QuizId"
    )]
    Quiz,
    #[sea_orm(has_many = "super::choice::Entity")]
    Choice,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choice.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Question {
    fn from(model: Model) -> Self {
        Question {
            id: model.question_id,
            quiz_id: model.quiz_id,
            text: model.text,
            question_type: model.question_type.into(),
            marks: model.marks,
            position: model.position,
        }
    }
}
