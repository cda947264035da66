use crate::model::team::TeamDto;

impl From<entity::team::Model> for TeamDto {
    fn from(t: entity::team::Model) -> Self {
        Self {
            id: t.id,
            owner_id: t.owner_id,
            name: t.name,
            description: t.description,
            logo_url: t.logo_url,
            location: t.location,
            specialties: t.specialties.0,
            available_seats: t.available_seats,
            requirements: t.requirements.0,
            contact_info: t.contact_info,
            social_links: t.social_links,
            is_active: t.is_active,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
