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
                    .table(VehicleVitals::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleVitals::Id))
                    .col(integer(VehicleVitals::RentalCompletionId))
                    .col(integer(VehicleVitals::VehicleId))
                    .col(double_null(VehicleVitals::EngineTemp))
                    .col(double_null(VehicleVitals::OilPressure))
                    .col(string_null(VehicleVitals::OilLevel))
                    .col(string_null(VehicleVitals::CoolantLevel))
                    .col(json_null(VehicleVitals::TirePressure))
                    .col(string_null(VehicleVitals::TireCondition))
                    .col(string_null(VehicleVitals::BrakePadCondition))
                    .col(string_null(VehicleVitals::BrakeFluidLevel))
                    .col(string_null(VehicleVitals::BodyCondition))
                    .col(string_null(VehicleVitals::InteriorCondition))
                    .col(text_null(VehicleVitals::Notes))
                    .col(string(VehicleVitals::SubmittedBy))
                    .col(
                        timestamp(VehicleVitals::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_vitals_rental_completion_id")
                            .from(VehicleVitals::Table, VehicleVitals::RentalCompletionId)
                            .to(RentalCompletion::Table, RentalCompletion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleVitals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleVitals {
    Table,
    Id,
    RentalCompletionId,
    VehicleId,
    EngineTemp,
    OilPressure,
    OilLevel,
    CoolantLevel,
    TirePressure,
    TireCondition,
    BrakePadCondition,
    BrakeFluidLevel,
    BodyCondition,
    InteriorCondition,
    Notes,
    SubmittedBy,
    SubmittedAt,
}
