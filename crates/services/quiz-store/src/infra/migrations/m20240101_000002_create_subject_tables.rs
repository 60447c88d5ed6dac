//! Migration: Create subjects and enrollments tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_identity_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::SubjectId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(Subjects::Description).string_len(500).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::EnrollmentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::UserId).integer().not_null())
                    .col(ColumnDef::new(Enrollments::SubjectId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_user_id")
                            .from(Enrollments::Table, Enrollments::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_subject_id")
                            .from(Enrollments::Table, Enrollments::SubjectId)
                            .to(Subjects::Table, Subjects::SubjectId),
                    )
                    .to_owned(),
            )
            .await?;

        // A student may enroll in a given subject at most once
        manager
            .create_index(
                Index::create()
                    .name("uq_user_subject")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .col(Enrollments::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops uq_user_subject with it
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Subjects {
    Table,
    SubjectId,
    Name,
    Description,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    EnrollmentId,
    UserId,
    SubjectId,
}
