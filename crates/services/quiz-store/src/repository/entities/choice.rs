//! Choice database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Choice;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub choice_id: i32,
    pub question_id: i32,
    pub text: String,
    /// Server-side only
    pub is_correct: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::QuestionId"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Choice {
    fn from(model: Model) -> Self {
        Choice {
            id: model.choice_id,
            question_id: model.question_id,
            text: model.text,
            is_correct: model.is_correct,
            position: model.position,
        }
    }
}
