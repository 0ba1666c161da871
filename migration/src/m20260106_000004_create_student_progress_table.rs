use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_profile_table::Profile,
    m20260105_000002_create_reading_module_table::ReadingModule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentProgress::Id))
                    .col(integer(StudentProgress::StudentId))
                    .col(integer(StudentProgress::ModuleId))
                    .col(integer(StudentProgress::HighestParagraphIndexReached).default(0))
                    .col(boolean(StudentProgress::Completed).default(false))
                    .col(timestamp_with_time_zone_null(StudentProgress::CompletedAt))
                    .col(integer_null(StudentProgress::Score))
                    .col(text_null(StudentProgress::TeacherFeedback))
                    .col(timestamp_with_time_zone_null(StudentProgress::TeacherFeedbackAt))
                    .col(text_null(StudentProgress::FinalSummary))
                    .col(integer(StudentProgress::TimeSpentMinutes).default(0))
                    .col(
                        timestamp_with_time_zone(StudentProgress::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(StudentProgress::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_progress_student_id")
                            .from(StudentProgress::Table, StudentProgress::StudentId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_progress_module_id")
                            .from(StudentProgress::Table, StudentProgress::ModuleId)
                            .to(ReadingModule::Table, ReadingModule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_progress_student_module")
                    .table(StudentProgress::Table)
                    .col(StudentProgress::StudentId)
                    .col(StudentProgress::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentProgress {
    Table,
    Id,
    StudentId,
    ModuleId,
    HighestParagraphIndexReached,
    Completed,
    CompletedAt,
    Score,
    TeacherFeedback,
    TeacherFeedbackAt,
    FinalSummary,
    TimeSpentMinutes,
    StartedAt,
    UpdatedAt,
}
