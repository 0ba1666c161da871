use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(SubscriptionPlan::Id))
                    .col(string(SubscriptionPlan::Name))
                    .col(string_uniq(SubscriptionPlan::StripePriceId))
                    .col(big_integer(SubscriptionPlan::AmountCents))
                    .col(string(SubscriptionPlan::Currency))
                    .col(string(SubscriptionPlan::Interval))
                    .col(integer_null(SubscriptionPlan::MaxStudents))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionPlan {
    Table,
    Id,
    Name,
    StripePriceId,
    AmountCents,
    Currency,
    Interval,
    MaxStudents,
}
