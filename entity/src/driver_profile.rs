use sea_orm::entity::prelude::*;

use crate::{
    json::{ContactInfo, SocialLinks, StringList},
    sea_orm_active_enums::ExperienceLevel,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "driver_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub bio: String,
    pub achievements: Option<String>,
    pub experience: ExperienceLevel,
    pub licenses: StringList,
    pub preferred_categories: StringList,
    pub availability: StringList,
    pub location: String,
    pub contact_info: ContactInfo,
    pub social_links: Option<SocialLinks>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
