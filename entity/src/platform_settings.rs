use sea_orm::entity::prelude::*;

/// Fee configuration. Only the first active row is consulted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "platform_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub platform_fee_percentage: f64,
    pub minimum_platform_fee: i64,
    pub maximum_platform_fee: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
