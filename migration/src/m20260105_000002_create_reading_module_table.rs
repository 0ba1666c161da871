use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingModule::Table)
                    .if_not_exists()
                    .col(pk_auto(ReadingModule::Id))
                    .col(string(ReadingModule::Title))
                    .col(text_null(ReadingModule::Description))
                    .col(string(ReadingModule::Level))
                    .col(string(ReadingModule::Genre))
                    .col(string(ReadingModule::Language))
                    .col(boolean(ReadingModule::IsCustom).default(false))
                    .col(integer_null(ReadingModule::CreatedBy))
                    .col(
                        timestamp_with_time_zone(ReadingModule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ReadingModule::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reading_module_created_by")
                            .from(ReadingModule::Table, ReadingModule::CreatedBy)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReadingModule {
    Table,
    Id,
    Title,
    Description,
    Level,
    Genre,
    Language,
    IsCustom,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
