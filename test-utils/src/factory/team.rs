use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::json::{ContactInfo, StringList};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for team rows. Defaults to an active GT3 team in Sonoma with two open seats.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    name: String,
    location: String,
    specialties: Vec<String>,
    available_seats: i32,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: &str) -> Self {
        Self {
            db,
            owner_id: owner_id.to_string(),
            name: format!("Team {}", next_id()),
            location: "Sonoma, CA".to_string(),
            specialties: vec!["GT3".to_string()],
            available_seats: 2,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn specialties(mut self, specialties: &[&str]) -> Self {
        self.specialties = specialties.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.available_seats = available_seats;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Endurance racing program".to_string()),
            logo_url: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            specialties: ActiveValue::Set(StringList(self.specialties)),
            available_seats: ActiveValue::Set(self.available_seats),
            requirements: ActiveValue::Set(StringList::default()),
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

pub async fn create_team(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, owner_id).build().await
}
