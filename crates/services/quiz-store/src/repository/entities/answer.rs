//! Answer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use domain::Answer;

/// Selected choice ids, stored as a JSON array in selection order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ChoiceIds(pub Vec<i32>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub answer_id: i32,
    pub attempt_id: i32,
    pub question_id: Option<i32>,
    #[sea_orm(column_type = "Json", nullable)]
    pub selected_choice_ids: Option<ChoiceIds>,
    #[sea_orm(column_type = "Text", nullable)]
    pub text_response: Option<String>,
    pub marks_awarded: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attempt::Entity",
        from = "Column::AttemptId",
        to = "super::attempt::Column::AttemptId"
    )]
    Attempt,
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::QuestionId"
    )]
    Question,
}

impl Related<super::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Answer {
    fn from(model: Model) -> Self {
        Answer {
            id: model.answer_id,
            attempt_id: model.attempt_id,
            question_id: model.question_id,
            selected_choice_ids: model.selected_choice_ids.map(|ids| ids.0),
            text_response: model.text_response,
            marks_awarded: model.marks_awarded,
        }
    }
}
