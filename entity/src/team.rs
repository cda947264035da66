use sea_orm::entity::prelude::*;

use crate::json::{ContactInfo, SocialLinks, StringList};

/// Motorsports team advertising open seats.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub location: String,
    pub specialties: StringList,
    pub available_seats: i32,
    pub requirements: StringList,
    pub contact_info: ContactInfo,
    pub social_links: Option<SocialLinks>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_application::Entity")]
    TeamApplication,
}

impl Related<super::team_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
