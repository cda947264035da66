use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::OwnerId))
                    .col(string(Team::Name))
                    .col(text(Team::Description))
                    .col(string_null(Team::LogoUrl))
                    .col(string(Team::Location))
                    .col(json(Team::Specialties))
                    .col(integer(Team::AvailableSeats))
                    .col(json(Team::Requirements))
                    .col(json(Team::ContactInfo))
                    .col(json_null(Team::SocialLinks))
                    .col(boolean(Team::IsActive).default(true))
                    .col(
                        timestamp(Team::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Team::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_owner_id")
                    .table(Team::Table)
                    .col(Team::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    LogoUrl,
    Location,
    Specialties,
    AvailableSeats,
    Requirements,
    ContactInfo,
    SocialLinks,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
