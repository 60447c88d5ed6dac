//! Migration: Create quizzes, questions and choices tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_identity_tables::Users;
use super::m20240101_000002_create_subject_tables::Subjects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quizzes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quizzes::QuizId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quizzes::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Quizzes::Description).text().null())
                    .col(ColumnDef::new(Quizzes::SubjectId).integer().null())
                    .col(ColumnDef::new(Quizzes::CreatorUserId).integer().not_null())
                    .col(ColumnDef::new(Quizzes::TotalMarks).integer().null())
                    .col(
                        ColumnDef::new(Quizzes::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Quizzes::StartTime).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Quizzes::EndTime).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Quizzes::AllowedDurationSeconds).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quizzes_subject_id")
                            .from(Quizzes::Table, Quizzes::SubjectId)
                            .to(Subjects::Table, Subjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quizzes_creator_user_id")
                            .from(Quizzes::Table, Quizzes::CreatorUserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::QuestionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::QuizId).integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(
                        ColumnDef::new(Questions::QuestionType)
                            .string_len(30)
                            .not_null()
                            .default("mcq_single"),
                    )
                    .col(ColumnDef::new(Questions::Marks).integer().not_null().default(1))
                    .col(ColumnDef::new(Questions::Position).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_quiz_id")
                            .from(Questions::Table, Questions::QuizId)
                            .to(Quizzes::Table, Quizzes::QuizId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Choices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Choices::ChoiceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Choices::QuestionId).integer().not_null())
                    .col(ColumnDef::new(Choices::Text).string_len(1000).not_null())
                    .col(
                        ColumnDef::new(Choices::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Choices::Position).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choices_question_id")
                            .from(Choices::Table, Choices::QuestionId)
                            .to(Questions::Table, Questions::QuestionId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Choices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Quizzes {
    Table,
    QuizId,
    Title,
    Description,
    SubjectId,
    CreatorUserId,
    TotalMarks,
    IsPublished,
    StartTime,
    EndTime,
    AllowedDurationSeconds,
}

#[derive(Iden)]
pub(super) enum Questions {
    Table,
    QuestionId,
    QuizId,
    Text,
    QuestionType,
    Marks,
    Position,
}

#[derive(Iden)]
enum Choices {
    Table,
    ChoiceId,
    QuestionId,
    Text,
    IsCorrect,
    Position,
}
