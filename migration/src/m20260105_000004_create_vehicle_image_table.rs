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
                    .table(VehicleImage::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleImage::Id))
                    .col(integer(VehicleImage::VehicleId))
                    .col(string(VehicleImage::ImageUrl))
                    .col(boolean(VehicleImage::IsPrimary).default(false))
                    .col(integer(VehicleImage::Position))
                    .col(
                        timestamp(VehicleImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_image_vehicle_id")
                            .from(VehicleImage::Table, VehicleImage::VehicleId)
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
                    .name("idx_vehicle_image_vehicle_id")
                    .table(VehicleImage::Table)
                    .col(VehicleImage::VehicleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleImage {
    Table,
    Id,
    VehicleId,
    ImageUrl,
    IsPrimary,
    Position,
    CreatedAt,
}
