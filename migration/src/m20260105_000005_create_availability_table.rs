use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Availability::Table)
                    .if_not_exists()
                    .col(pk_auto(Availability::Id))
                    .col(integer(Availability::VehicleId))
                    .col(date(Availability::Date))
                    .col(boolean(Availability::IsAvailable).default(true))
                    .col(string_null(Availability::Reason))
                    .col(big_integer_null(Availability::Price))
                    .col(
                        timestamp(Availability::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_vehicle_id")
                            .from(Availability::Table, Availability::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_vehicle_date")
                    .table(Availability::Table)
                    .col(Availability::VehicleId)
                    .col(Availability::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Availability {
    Table,
    Id,
    VehicleId,
    Date,
    IsAvailable,
    Reason,
    Price,
    CreatedAt,
}
