use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000006_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalCompletion::Id))
                    .col(integer_uniq(RentalCompletion::ReservationId))
                    .col(integer(RentalCompletion::VehicleId))
                    .col(string(RentalCompletion::RenterId))
                    .col(string(RentalCompletion::OwnerId))
                    .col(string(RentalCompletion::Status))
                    .col(json_null(RentalCompletion::RenterReturnForm))
                    .col(json_null(RentalCompletion::OwnerReturnReview))
                    .col(text_null(RentalCompletion::CompletionNotes))
                    .col(timestamp_null(RentalCompletion::CompletedAt))
                    .col(
                        timestamp(RentalCompletion::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(RentalCompletion::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_completion_reservation_id")
                            .from(RentalCompletion::Table, RentalCompletion::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_completion_status")
                    .table(RentalCompletion::Table)
                    .col(RentalCompletion::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalCompletion {
    Table,
    Id,
    ReservationId,
    VehicleId,
    RenterId,
    OwnerId,
    Status,
    RenterReturnForm,
    OwnerReturnReview,
    CompletionNotes,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}
