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
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::ReservationId))
                    .col(string(Payment::RenterId))
                    .col(string(Payment::OwnerId))
                    .col(big_integer(Payment::Amount))
                    .col(big_integer(Payment::PlatformFee))
                    .col(big_integer(Payment::OwnerAmount))
                    .col(string(Payment::Currency))
                    .col(string(Payment::Status))
                    .col(string_null(Payment::StripePaymentIntentId))
                    .col(string_null(Payment::StripeChargeId))
                    .col(big_integer_null(Payment::RefundAmount))
                    .col(string_null(Payment::RefundReason))
                    .col(text_null(Payment::FailureReason))
                    .col(json_null(Payment::Metadata))
                    .col(
                        timestamp(Payment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Payment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_reservation_id")
                            .from(Payment::Table, Payment::ReservationId)
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
                    .name("idx_payment_stripe_payment_intent_id")
                    .table(Payment::Table)
                    .col(Payment::StripePaymentIntentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_renter_id")
                    .table(Payment::Table)
                    .col(Payment::RenterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    ReservationId,
    RenterId,
    OwnerId,
    Amount,
    PlatformFee,
    OwnerAmount,
    Currency,
    Status,
    StripePaymentIntentId,
    StripeChargeId,
    RefundAmount,
    RefundReason,
    FailureReason,
    Metadata,
    CreatedAt,
    UpdatedAt,
}
