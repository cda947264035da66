//! Driver profile repository. A user has at most one profile.

use chrono::Utc;
use entity::{json::StringList, sea_orm_active_enums::ExperienceLevel};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::driver::{CreateDriverProfileDto, UpdateDriverProfileDto},
    server::data::team::split_list,
};

/// Optional filters of the public driver directory.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct DriverFilter {
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
    /// Comma separated; a profile matches when it lists any of them.
    pub categories: Option<String>,
    /// Comma separated, matched the same way as `categories`.
    pub availability: Option<String>,
}

pub struct DriverProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: &str,
        profile: CreateDriverProfileDto,
    ) -> Result<entity::driver_profile::Model, DbErr> {
        let now = Utc::now();
        entity::driver_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            bio: ActiveValue::Set(profile.bio),
            achievements: ActiveValue::Set(profile.achievements),
            experience: ActiveValue::Set(profile.experience),
            licenses: ActiveValue::Set(StringList(profile.licenses)),
            preferred_categories: ActiveValue::Set(StringList(profile.preferred_categories)),
            availability: ActiveValue::Set(StringList(profile.availability)),
            location: ActiveValue::Set(profile.location),
            contact_info: ActiveValue::Set(profile.contact_info),
            social_links: ActiveValue::Set(profile.social_links),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::driver_profile::Model>, DbErr> {
        entity::prelude::DriverProfile::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::driver_profile::Model>, DbErr> {
        entity::prelude::DriverProfile::find()
            .filter(entity::driver_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Active profiles matching the filter, newest first.
    pub async fn list_active(
        &self,
        filter: DriverFilter,
    ) -> Result<Vec<entity::driver_profile::Model>, DbErr> {
        let mut query = entity::prelude::DriverProfile::find()
            .filter(entity::driver_profile::Column::IsActive.eq(true));

        if let Some(experience) = filter.experience {
            query = query.filter(entity::driver_profile::Column::Experience.eq(experience));
        }

        let profiles = query
            .order_by_desc(entity::driver_profile::Column::CreatedAt)
            .all(self.db)
            .await?;

        let location = filter.location.map(|l| l.to_lowercase());
        let categories = split_list(filter.categories);
        let availability = split_list(filter.availability);

        Ok(profiles
            .into_iter()
            .filter(|p| {
                location
                    .as_ref()
                    .is_none_or(|l| p.location.to_lowercase().contains(l))
            })
            .filter(|p| {
                categories.is_empty()
                    || p.preferred_categories.0.iter().any(|c| categories.contains(c))
            })
            .filter(|p| {
                availability.is_empty() || p.availability.0.iter().any(|a| availability.contains(a))
            })
            .collect())
    }

    pub async fn update(
        &self,
        profile: entity::driver_profile::Model,
        changes: UpdateDriverProfileDto,
    ) -> Result<entity::driver_profile::Model, DbErr> {
        let mut active = profile.into_active_model();
        if let Some(bio) = changes.bio {
            active.bio = ActiveValue::Set(bio);
        }
        if changes.achievements.is_some() {
            active.achievements = ActiveValue::Set(changes.achievements);
        }
        if let Some(experience) = changes.experience {
            active.experience = ActiveValue::Set(experience);
        }
        if let Some(licenses) = changes.licenses {
            active.licenses = ActiveValue::Set(StringList(licenses));
        }
        if let Some(categories) = changes.preferred_categories {
            active.preferred_categories = ActiveValue::Set(StringList(categories));
        }
        if let Some(availability) = changes.availability {
            active.availability = ActiveValue::Set(StringList(availability));
        }
        if let Some(location) = changes.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(contact_info) = changes.contact_info {
            active.contact_info = ActiveValue::Set(contact_info);
        }
        if changes.social_links.is_some() {
            active.social_links = ActiveValue::Set(changes.social_links);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DriverProfile::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
