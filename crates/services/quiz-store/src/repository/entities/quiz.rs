//! Quiz database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Quiz;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub quiz_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub subject_id: Option<i32>,
    pub creator_user_id: i32,
    pub total_marks: Option<i32>,
    pub is_published: bool,
    pub start_time: Option<DateTimeUtc>,
    pub end_time: Option<DateTimeUtc>,
    pub allowed_duration_seconds: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::SubjectId"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorUserId",
        to = "super::user::Column::UserId"
    )]
    Creator,
    #[sea_orm(has_many = "super::question::Entity")]
    Question,
    #[sea_orm(has_many = "super::attempt::Entity")]
    Attempt,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Quiz {
    fn from(model: Model) -> Self {
        Quiz {
            id: model.quiz_id,
            title: model.title,
            description: model.description,
            subject_id: model.subject_id,
            creator_user_id: model.creator_user_id,
            total_marks: model.total_marks,
            is_published: model.is_published,
            start_time: model.start_time,
            end_time: model.end_time,
            allowed_duration_seconds: model.allowed_duration_seconds,
        }
    }
}
