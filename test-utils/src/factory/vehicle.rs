//! Vehicle listings.

use chrono::Utc;
use entity::json::{AddOnList, StringList};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for vehicle rows.
///
/// Defaults: a 2022 Porsche 911 GT3 at 50 000 cents per day, active and approved.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    track_id: i32,
    make: String,
    model: String,
    daily_rate: i64,
    is_active: bool,
    is_approved: bool,
}

impl<'a> VehicleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: &str, track_id: i32) -> Self {
        Self {
            db,
            owner_id: owner_id.to_string(),
            track_id,
            make: "Porsche".to_string(),
            model: "911 GT3".to_string(),
            daily_rate: 50_000,
            is_active: true,
            is_approved: true,
        }
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn daily_rate(mut self, daily_rate: i64) -> Self {
        self.daily_rate = daily_rate;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn is_approved(mut self, is_approved: bool) -> Self {
        self.is_approved = is_approved;
        self
    }

    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            track_id: ActiveValue::Set(self.track_id),
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(2022),
            daily_rate: ActiveValue::Set(self.daily_rate),
            description: ActiveValue::Set("Track prepared".to_string()),
            horsepower: ActiveValue::Set(Some(502)),
            transmission: ActiveValue::Set(Some("PDK".to_string())),
            drivetrain: ActiveValue::Set(Some("RWD".to_string())),
            engine_type: ActiveValue::Set(None),
            mileage: ActiveValue::Set(None),
            amenities: ActiveValue::Set(StringList::default()),
            add_ons: ActiveValue::Set(AddOnList::default()),
            is_active: ActiveValue::Set(self.is_active),
            is_approved: ActiveValue::Set(self.is_approved),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_vehicle(
    db: &DatabaseConnection,
    owner_id: &str,
    track_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, owner_id, track_id).build().await
}
