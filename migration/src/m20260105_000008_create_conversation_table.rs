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
                    .table(Conversation::Table)
                    .if_not_exists()
                    .col(pk_auto(Conversation::Id))
                    .col(integer(Conversation::VehicleId))
                    .col(string(Conversation::RenterId))
                    .col(string(Conversation::OwnerId))
                    .col(
                        timestamp(Conversation::LastMessageAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text_null(Conversation::LastMessageText))
                    .col(string_null(Conversation::LastMessageSenderId))
                    .col(integer(Conversation::UnreadCountRenter).default(0))
                    .col(integer(Conversation::UnreadCountOwner).default(0))
                    .col(boolean(Conversation::IsActive).default(true))
                    .col(
                        timestamp(Conversation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Conversation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversation_vehicle_id")
                            .from(Conversation::Table, Conversation::VehicleId)
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
                    .name("idx_conversation_participants")
                    .table(Conversation::Table)
                    .col(Conversation::VehicleId)
                    .col(Conversation::RenterId)
                    .col(Conversation::OwnerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Conversation {
    Table,
    Id,
    VehicleId,
    RenterId,
    OwnerId,
    LastMessageAt,
    LastMessageText,
    LastMessageSenderId,
    UnreadCountRenter,
    UnreadCountOwner,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
