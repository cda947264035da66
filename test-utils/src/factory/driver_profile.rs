use chrono::Utc;
use entity::{
    json::{ContactInfo, StringList},
    sea_orm_active_enums::ExperienceLevel,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for driver profiles. Defaults to an intermediate weekend driver in Sonoma.
pub struct DriverProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    experience: ExperienceLevel,
    location: String,
    preferred_categories: Vec<String>,
    availability: Vec<String>,
}

impl<'a> DriverProfileFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            experience: ExperienceLevel::Intermediate,
            location: "Sonoma, CA".to_string(),
            preferred_categories: vec!["GT3".to_string()],
            availability: vec!["weekends".to_string()],
        }
    }

    pub fn experience(mut self, experience: ExperienceLevel) -> Self {
        self.experience = experience;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn availability(mut self, availability: &[&str]) -> Self {
        self.availability = availability.iter().map(|s| s.to_string()).collect();
        self
    }

    pub async fn build(self) -> Result<entity::driver_profile::Model, DbErr> {
        let now = Utc::now();
        entity::driver_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            bio: ActiveValue::Set("Club racer".to_string()),
            achievements: ActiveValue::Set(None),
            experience: ActiveValue::Set(self.experience),
            licenses: ActiveValue::Set(StringList(vec!["SCCA".to_string()])),
            preferred_categories: ActiveValue::Set(StringList(self.preferred_categories)),
            availability: ActiveValue::Set(StringList(self.availability)),
            location: ActiveValue::Set(self.location),
            contact_info: ActiveValue::Set(ContactInfo::default()),
            social_links: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_driver_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::driver_profile::Model, DbErr> {
    DriverProfileFactory::new(db, user_id).build().await
}
