use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_track_table::Track;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::OwnerId))
                    .col(integer(Vehicle::TrackId))
                    .col(string(Vehicle::Make))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(big_integer(Vehicle::DailyRate))
                    .col(text(Vehicle::Description))
                    .col(integer_null(Vehicle::Horsepower))
                    .col(string_null(Vehicle::Transmission))
                    .col(string_null(Vehicle::Drivetrain))
                    .col(string_null(Vehicle::EngineType))
                    .col(integer_null(Vehicle::Mileage))
                    .col(json(Vehicle::Amenities))
                    .col(json(Vehicle::AddOns))
                    .col(boolean(Vehicle::IsActive).default(true))
                    .col(boolean(Vehicle::IsApproved).default(false))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_track_id")
                            .from(Vehicle::Table, Vehicle::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_owner_id")
                    .table(Vehicle::Table)
                    .col(Vehicle::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_active_approved")
                    .table(Vehicle::Table)
                    .col(Vehicle::IsActive)
                    .col(Vehicle::IsApproved)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    OwnerId,
    TrackId,
    Make,
    Model,
    Year,
    DailyRate,
    Description,
    Horsepower,
    Transmission,
    Drivetrain,
    EngineType,
    Mileage,
    Amenities,
    AddOns,
    IsActive,
    IsApproved,
    CreatedAt,
    UpdatedAt,
}
