//! Motorsport team repository.

use chrono::Utc;
use entity::json::StringList;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::team::{CreateTeamDto, UpdateTeamDto};

/// Optional filters of the public team directory.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct TeamFilter {
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    pub min_seats: Option<i32>,
    /// Comma separated; a team matches when it lists any of them.
    pub specialties: Option<String>,
}

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: &str,
        team: CreateTeamDto,
    ) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            owner_id: ActiveValue::Set(owner_id.to_string()),
            name: ActiveValue::Set(team.name),
            description: ActiveValue::Set(team.description),
            logo_url: ActiveValue::Set(team.logo_url),
            location: ActiveValue::Set(team.location),
            specialties: ActiveValue::Set(StringList(team.specialties)),
            available_seats: ActiveValue::Set(team.available_seats),
            requirements: ActiveValue::Set(StringList(team.requirements)),
            contact_info: ActiveValue::Set(team.contact_info),
            social_links: ActiveValue::Set(team.social_links),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Active teams matching the filter, newest first.
    pub async fn list_active(&self, filter: TeamFilter) -> Result<Vec<entity::team::Model>, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::IsActive.eq(true));

        if let Some(min_seats) = filter.min_seats {
            query = query.filter(entity::team::Column::AvailableSeats.gte(min_seats));
        }

        let teams = query
            .order_by_desc(entity::team::Column::CreatedAt)
            .all(self.db)
            .await?;

        let location = filter.location.map(|l| l.to_lowercase());
        let specialties = split_list(filter.specialties);

        Ok(teams
            .into_iter()
            .filter(|team| {
                location
                    .as_ref()
                    .is_none_or(|l| team.location.to_lowercase().contains(l))
            })
            .filter(|team| {
                specialties.is_empty() || team.specialties.0.iter().any(|s| specialties.contains(s))
            })
            .collect())
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::team::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        team: entity::team::Model,
        changes: UpdateTeamDto,
    ) -> Result<entity::team::Model, DbErr> {
        let mut active = team.into_active_model();
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if changes.logo_url.is_some() {
            active.logo_url = ActiveValue::Set(changes.logo_url);
        }
        if let Some(location) = changes.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(specialties) = changes.specialties {
            active.specialties = ActiveValue::Set(StringList(specialties));
        }
        if let Some(seats) = changes.available_seats {
            active.available_seats = ActiveValue::Set(seats);
        }
        if let Some(requirements) = changes.requirements {
            active.requirements = ActiveValue::Set(StringList(requirements));
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
        entity::prelude::TeamApplication::delete_many()
            .filter(entity::team_application::Column::TeamId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}

/// Splits a comma separated query value, dropping blanks.
pub(crate) fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
