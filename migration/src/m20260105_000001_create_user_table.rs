use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::ExternalId))
                    .col(string(User::Name))
                    .col(string_null(User::Email))
                    .col(string_null(User::Phone))
                    .col(string_null(User::ProfileImage))
                    .col(double_null(User::Rating))
                    .col(integer(User::TotalRentals).default(0))
                    .col(string_null(User::UserType))
                    .col(boolean(User::Admin).default(false))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    ExternalId,
    Name,
    Email,
    Phone,
    ProfileImage,
    Rating,
    TotalRentals,
    UserType,
    Admin,
    CreatedAt,
    UpdatedAt,
}
