use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000010_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamApplication::Id))
                    .col(integer(TeamApplication::TeamId))
                    .col(string(TeamApplication::DriverId))
                    .col(string(TeamApplication::Status))
                    .col(text(TeamApplication::Message))
                    .col(text(TeamApplication::DriverExperience))
                    .col(json(TeamApplication::PreferredDates))
                    .col(
                        timestamp(TeamApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(TeamApplication::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_application_team_id")
                            .from(TeamApplication::Table, TeamApplication::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_application_team_status")
                    .table(TeamApplication::Table)
                    .col(TeamApplication::TeamId)
                    .col(TeamApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_application_driver_id")
                    .table(TeamApplication::Table)
                    .col(TeamApplication::DriverId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamApplication {
    Table,
    Id,
    TeamId,
    DriverId,
    Status,
    Message,
    DriverExperience,
    PreferredDates,
    CreatedAt,
    UpdatedAt,
}
