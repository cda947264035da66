use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlatformSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(PlatformSettings::Id))
                    .col(double(PlatformSettings::PlatformFeePercentage))
                    .col(big_integer(PlatformSettings::MinimumPlatformFee))
                    .col(big_integer_null(PlatformSettings::MaximumPlatformFee))
                    .col(boolean(PlatformSettings::IsActive).default(true))
                    .col(
                        timestamp(PlatformSettings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(PlatformSettings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlatformSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlatformSettings {
    Table,
    Id,
    PlatformFeePercentage,
    MinimumPlatformFee,
    MaximumPlatformFee,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
