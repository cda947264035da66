//! User parameters and conversions.

use entity::sea_orm_active_enums::UserType;
use serde::Deserialize;

use crate::model::user::{UserDto, UserSummaryDto};

/// Fields written when a user is created or refreshed from the identity provider.
///
/// `is_admin` is only written when `Some`, so a regular login never revokes admin.
#[derive(Debug, Clone, Default)]
pub struct UpsertUserParam {
    pub external_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_admin: Option<bool>,
}

/// Display name from the provider's first and last name.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let name = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default());
    let name = name.trim();

    if name.is_empty() {
        "Unknown User".to_string()
    } else {
        name.to_string()
    }
}

/// User object carried by the identity provider's `user.*` webhook events.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<IdentityEmail>,
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub phone_numbers: Vec<IdentityPhone>,
    pub primary_phone_number_id: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityEmail {
    pub id: String,
    pub email_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityPhone {
    pub id: String,
    pub phone_number: String,
}

impl IdentityUser {
    /// The primary email, or the first listed when no primary is marked.
    pub fn primary_email(&self) -> Option<String> {
        self.email_addresses
            .iter()
            .find(|e| Some(&e.id) == self.primary_email_address_id.as_ref())
            .or_else(|| self.email_addresses.first())
            .map(|e| e.email_address.clone())
    }

    pub fn primary_phone(&self) -> Option<String> {
        self.phone_numbers
            .iter()
            .find(|p| Some(&p.id) == self.primary_phone_number_id.as_ref())
            .or_else(|| self.phone_numbers.first())
            .map(|p| p.phone_number.clone())
    }
}

impl From<IdentityUser> for UpsertUserParam {
    fn from(user: IdentityUser) -> Self {
        Self {
            name: display_name(user.first_name.as_deref(), user.last_name.as_deref()),
            email: user.primary_email(),
            phone: user.primary_phone(),
            profile_image: user.image_url.clone(),
            external_id: user.id,
            is_admin: None,
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            external_id: user.external_id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            profile_image: user.profile_image,
            rating: user.rating,
            total_rentals: user.total_rentals,
            user_type: user.user_type,
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

impl From<entity::user::Model> for UserSummaryDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            external_id: user.external_id,
            name: user.name,
            profile_image: user.profile_image,
            rating: user.rating,
        }
    }
}

/// User type after the user takes on `role`, keeping any role they already had.
pub fn merged_user_type(current: Option<UserType>, role: UserType) -> UserType {
    match current {
        None => role,
        Some(current) if current == role => role,
        Some(_) => UserType::Both,
    }
}
