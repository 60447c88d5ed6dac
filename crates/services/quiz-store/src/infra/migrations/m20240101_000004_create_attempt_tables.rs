//! Migration: Create attempts and answers tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_identity_tables::Users;
use super::m20240101_000003_create_quiz_tables::{Questions, Quizzes};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attempts::AttemptId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attempts::QuizId).integer().not_null())
                    .col(ColumnDef::new(Attempts::UserId).integer().not_null())
                    .col(ColumnDef::new(Attempts::StartedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Attempts::SubmittedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Attempts::Score).double().null())
                    .col(
                        ColumnDef::new(Attempts::IsGraded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Attempts::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(Attempts::UserAgent).string_len(300).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempts_quiz_id")
                            .from(Attempts::Table, Attempts::QuizId)
                            .to(Quizzes::Table, Quizzes::QuizId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempts_user_id")
                            .from(Attempts::Table, Attempts::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Answers::AnswerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Answers::AttemptId).integer().not_null())
                    .col(ColumnDef::new(Answers::QuestionId).integer().null())
                    // JSON array of choice ids, in selection order
                    .col(ColumnDef::new(Answers::SelectedChoiceIds).json().null())
                    .col(ColumnDef::new(Answers::TextResponse).text().null())
                    .col(ColumnDef::new(Answers::MarksAwarded).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_attempt_id")
                            .from(Answers::Table, Answers::AttemptId)
                            .to(Attempts::Table, Attempts::AttemptId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_question_id")
                            .from(Answers::Table, Answers::QuestionId)
                            .to(Questions::Table, Questions::QuestionId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attempts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Attempts {
    Table,
    AttemptId,
    QuizId,
    UserId,
    StartedAt,
    SubmittedAt,
    Score,
    IsGraded,
    IpAddress,
    UserAgent,
}

#[derive(Iden)]
enum Answers {
    Table,
    AnswerId,
    AttemptId,
    QuestionId,
    SelectedChoiceIds,
    TextResponse,
    MarksAwarded,
}
