use crate::model::driver::DriverProfileDto;

impl From<entity::driver_profile::Model> for DriverProfileDto {
    fn from(d: entity::driver_profile::Model) -> Self {
        Self {
            id: d.id,
            user_id: d.user_id,
            bio: d.bio,
            achievements: d.achievements,
            experience: d.experience,
            licenses: d.licenses.0,
            preferred_categories: d.preferred_categories.0,
            availability: d.availability.0,
            location: d.location,
            contact_info: d.contact_info,
            social_links: d.social_links,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}
