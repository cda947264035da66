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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::VehicleId))
                    .col(string(Reservation::RenterId))
                    .col(string(Reservation::OwnerId))
                    .col(date(Reservation::StartDate))
                    .col(date(Reservation::EndDate))
                    .col(string_null(Reservation::PickupTime))
                    .col(string_null(Reservation::DropoffTime))
                    .col(integer(Reservation::TotalDays))
                    .col(big_integer(Reservation::DailyRate))
                    .col(big_integer(Reservation::TotalAmount))
                    .col(string(Reservation::Status))
                    .col(text_null(Reservation::RenterMessage))
                    .col(text_null(Reservation::OwnerMessage))
                    .col(text_null(Reservation::CancellationReason))
                    .col(integer_null(Reservation::PaymentId))
                    .col(string_null(Reservation::PaymentStatus))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_vehicle_id")
                            .from(Reservation::Table, Reservation::VehicleId)
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
                    .name("idx_reservation_vehicle_dates")
                    .table(Reservation::Table)
                    .col(Reservation::VehicleId)
                    .col(Reservation::StartDate)
                    .col(Reservation::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_renter_status")
                    .table(Reservation::Table)
                    .col(Reservation::RenterId)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_owner_status")
                    .table(Reservation::Table)
                    .col(Reservation::OwnerId)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    VehicleId,
    RenterId,
    OwnerId,
    StartDate,
    EndDate,
    PickupTime,
    DropoffTime,
    TotalDays,
    DailyRate,
    TotalAmount,
    Status,
    RenterMessage,
    OwnerMessage,
    CancellationReason,
    PaymentId,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}
