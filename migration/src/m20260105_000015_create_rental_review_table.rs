use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000013_create_rental_completion_table::RentalCompletion;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalReview::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalReview::Id))
                    .col(integer(RentalReview::RentalCompletionId))
                    .col(integer(RentalReview::ReservationId))
                    .col(integer(RentalReview::VehicleId))
                    .col(string(RentalReview::ReviewerId))
                    .col(string(RentalReview::ReviewedId))
                    .col(string(RentalReview::ReviewType))
                    .col(integer(RentalReview::Rating))
                    .col(integer_null(RentalReview::Communication))
                    .col(integer_null(RentalReview::VehicleCondition))
                    .col(integer_null(RentalReview::Professionalism))
                    .col(integer_null(RentalReview::OverallExperience))
                    .col(string(RentalReview::Title))
                    .col(text(RentalReview::Content))
                    .col(json(RentalReview::Photos))
                    .col(json_null(RentalReview::Response))
                    .col(boolean(RentalReview::IsPublic).default(true))
                    .col(boolean(RentalReview::IsModerated).default(false))
                    .col(
                        timestamp(RentalReview::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(RentalReview::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_review_rental_completion_id")
                            .from(RentalReview::Table, RentalReview::RentalCompletionId)
                            .to(RentalCompletion::Table, RentalCompletion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_review_completion_reviewer")
                    .table(RentalReview::Table)
                    .col(RentalReview::RentalCompletionId)
                    .col(RentalReview::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_review_reviewed_id")
                    .table(RentalReview::Table)
                    .col(RentalReview::ReviewedId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_review_vehicle_id")
                    .table(RentalReview::Table)
                    .col(RentalReview::VehicleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalReview {
    Table,
    Id,
    RentalCompletionId,
    ReservationId,
    VehicleId,
    ReviewerId,
    ReviewedId,
    ReviewType,
    Rating,
    Communication,
    VehicleCondition,
    Professionalism,
    OverallExperience,
    Title,
    Content,
    Photos,
    Response,
    IsPublic,
    IsModerated,
    CreatedAt,
    UpdatedAt,
}
