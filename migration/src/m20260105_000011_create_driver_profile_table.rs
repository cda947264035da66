use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(DriverProfile::Id))
                    .col(string_uniq(DriverProfile::UserId))
                    .col(text(DriverProfile::Bio))
                    .col(text_null(DriverProfile::Achievements))
                    .col(string(DriverProfile::Experience))
                    .col(json(DriverProfile::Licenses))
                    .col(json(DriverProfile::PreferredCategories))
                    .col(json(DriverProfile::Availability))
                    .col(string(DriverProfile::Location))
                    .col(json(DriverProfile::ContactInfo))
                    .col(json_null(DriverProfile::SocialLinks))
                    .col(boolean(DriverProfile::IsActive).default(true))
                    .col(
                        timestamp(DriverProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(DriverProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DriverProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DriverProfile {
    Table,
    Id,
    UserId,
    Bio,
    Achievements,
    Experience,
    Licenses,
    PreferredCategories,
    Availability,
    Location,
    ContactInfo,
    SocialLinks,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
