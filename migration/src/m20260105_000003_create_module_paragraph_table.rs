use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_reading_module_table::ReadingModule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModuleParagraph::Table)
                    .if_not_exists()
                    .col(pk_auto(ModuleParagraph::Id))
                    .col(integer(ModuleParagraph::ModuleId))
                    .col(integer(ModuleParagraph::ParagraphIndex))
                    .col(text(ModuleParagraph::Content))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_module_paragraph_module_id")
                            .from(ModuleParagraph::Table, ModuleParagraph::ModuleId)
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
                    .name("idx_module_paragraph_module_index")
                    .table(ModuleParagraph::Table)
                    .col(ModuleParagraph::ModuleId)
                    .col(ModuleParagraph::ParagraphIndex)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModuleParagraph::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModuleParagraph {
    Table,
    Id,
    ModuleId,
    ParagraphIndex,
    Content,
}
