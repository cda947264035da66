use sea_orm::entity::prelude::*;

use crate::json::{AddOnList, StringList};

/// Listed track car. `daily_rate` is in cents.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: String,
    pub track_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub daily_rate: i64,
    pub description: String,
    pub horsepower: Option<i32>,
    pub transmission: Option<String>,
    pub drivetrain: Option<String>,
    pub engine_type: Option<String>,
    pub mileage: Option<i32>,
    pub amenities: StringList,
    pub add_ons: AddOnList,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::track::Entity",
        from = "Column::TrackId",
        to = "super::track::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Track,
    #[sea_orm(has_many = "super::vehicle_image::Entity")]
    VehicleImage,
    #[sea_orm(has_many = "super::availability::Entity")]
    Availability,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::conversation::Entity")]
    Conversation,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl Related<super::vehicle_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleImage.def()
    }
}

impl Related<super::availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::conversation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
