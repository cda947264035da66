//! Vehicle listing repository.
//!
//! Listings are never hard deleted by owners; `is_active = false` hides them everywhere a
//! renter can see them.

use chrono::Utc;
use entity::json::{AddOnList, StringList};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::vehicle::UpdateVehicleDto,
    server::{data::vehicle_image::VehicleImageRepository, model::vehicle::CreateVehicleParams},
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active, unapproved vehicle and its images.
    ///
    /// Images keep the given order; the first one is primary.
    pub async fn create(
        &self,
        params: CreateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        let vehicle = entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            track_id: ActiveValue::Set(params.track_id),
            make: ActiveValue::Set(params.make),
            model: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            daily_rate: ActiveValue::Set(params.daily_rate),
            description: ActiveValue::Set(params.description),
            horsepower: ActiveValue::Set(params.horsepower),
            transmission: ActiveValue::Set(params.transmission),
            drivetrain: ActiveValue::Set(params.drivetrain),
            engine_type: ActiveValue::Set(params.engine_type),
            mileage: ActiveValue::Set(params.mileage),
            amenities: ActiveValue::Set(StringList(params.amenities)),
            add_ons: ActiveValue::Set(AddOnList(params.add_ons)),
            is_active: ActiveValue::Set(true),
            is_approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let image_repo = VehicleImageRepository::new(self.db);
        for (position, url) in params.images.into_iter().enumerate() {
            image_repo
                .create(vehicle.id, url, position == 0, position as i32)
                .await?;
        }

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    pub async fn find_many_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Active, approved vehicles, newest first, optionally at one track.
    pub async fn list_public(
        &self,
        track_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let mut query = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsActive.eq(true))
            .filter(entity::vehicle::Column::IsApproved.eq(true));

        if let Some(track_id) = track_id {
            query = query.filter(entity::vehicle::Column::TrackId.eq(track_id));
        }

        query
            .order_by_desc(entity::vehicle::Column::CreatedAt)
            .order_by_desc(entity::vehicle::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Active vehicles of an owner, approved or not, newest first.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::OwnerId.eq(owner_id))
            .filter(entity::vehicle::Column::IsActive.eq(true))
            .order_by_desc(entity::vehicle::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Active vehicles awaiting admin approval, oldest first.
    pub async fn list_pending_approval(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsActive.eq(true))
            .filter(entity::vehicle::Column::IsApproved.eq(false))
            .order_by_asc(entity::vehicle::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies a partial update. `None` fields keep their current value.
    pub async fn update(
        &self,
        vehicle: entity::vehicle::Model,
        changes: UpdateVehicleDto,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active = vehicle.into_active_model();

        if let Some(track_id) = changes.track_id {
            active.track_id = ActiveValue::Set(track_id);
        }
        if let Some(make) = changes.make {
            active.make = ActiveValue::Set(make);
        }
        if let Some(model) = changes.model {
            active.model = ActiveValue::Set(model);
        }
        if let Some(year) = changes.year {
            active.year = ActiveValue::Set(year);
        }
        if let Some(daily_rate) = changes.daily_rate {
            active.daily_rate = ActiveValue::Set(daily_rate);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if changes.horsepower.is_some() {
            active.horsepower = ActiveValue::Set(changes.horsepower);
        }
        if changes.transmission.is_some() {
            active.transmission = ActiveValue::Set(changes.transmission);
        }
        if changes.drivetrain.is_some() {
            active.drivetrain = ActiveValue::Set(changes.drivetrain);
        }
        if changes.engine_type.is_some() {
            active.engine_type = ActiveValue::Set(changes.engine_type);
        }
        if changes.mileage.is_some() {
            active.mileage = ActiveValue::Set(changes.mileage);
        }
        if let Some(amenities) = changes.amenities {
            active.amenities = ActiveValue::Set(StringList(amenities));
        }
        if let Some(add_ons) = changes.add_ons {
            active.add_ons = ActiveValue::Set(AddOnList(add_ons));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn set_active(
        &self,
        vehicle: entity::vehicle::Model,
        is_active: bool,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active = vehicle.into_active_model();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Records the admin decision. A rejected vehicle is also deactivated.
    pub async fn set_approval(
        &self,
        vehicle: entity::vehicle::Model,
        approved: bool,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active = vehicle.into_active_model();
        active.is_approved = ActiveValue::Set(approved);
        if !approved {
            active.is_active = ActiveValue::Set(false);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
