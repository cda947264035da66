use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(string(Track::Name))
                    .col(string(Track::Location))
                    .col(text_null(Track::Description))
                    .col(string_null(Track::ImageUrl))
                    .col(boolean(Track::IsActive).default(true))
                    .col(
                        timestamp(Track::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    Name,
    Location,
    Description,
    ImageUrl,
    IsActive,
    CreatedAt,
}
