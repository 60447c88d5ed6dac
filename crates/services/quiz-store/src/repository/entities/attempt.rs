//! Attempt database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Attempt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub attempt_id: i32,
    pub quiz_id: i32,
    pub user_id: i32,
    pub started_at: Option<DateTimeUtc>,
    pub submitted_at: Option<DateTimeUtc>,
    pub score: Option<f64>,
    pub is_graded: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::QuizId"
    )]
    Quiz,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Attempt {
    fn from(model: Model) -> Self {
        Attempt {
            id: model.attempt_id,
            quiz_id: model.quiz_id,
            user_id: model.user_id,
            started_at: model.started_at,
            submitted_at: model.submitted_at,
            score: model.score,
            is_graded: model.is_graded,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
        }
    }
}
