use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_student_progress_table::StudentProgress;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParagraphSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ParagraphSubmission::Id))
                    .col(integer(ParagraphSubmission::ProgressId))
                    .col(integer(ParagraphSubmission::ParagraphIndex))
                    .col(text(ParagraphSubmission::ParagraphSummary))
                    .col(text(ParagraphSubmission::CumulativeSummary))
                    .col(
                        timestamp_with_time_zone(ParagraphSubmission::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paragraph_submission_progress_id")
                            .from(ParagraphSubmission::Table, ParagraphSubmission::ProgressId)
                            .to(StudentProgress::Table, StudentProgress::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_paragraph_submission_progress_id")
                    .table(ParagraphSubmission::Table)
                    .col(ParagraphSubmission::ProgressId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParagraphSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParagraphSubmission {
    Table,
    Id,
    ProgressId,
    ParagraphIndex,
    ParagraphSummary,
    CumulativeSummary,
    SubmittedAt,
}
