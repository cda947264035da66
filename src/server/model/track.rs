use crate::model::track::TrackDto;

impl From<entity::track::Model> for TrackDto {
    fn from(track: entity::track::Model) -> Self {
        Self {
            id: track.id,
            name: track.name,
            location: track.location,
            description: track.description,
            image_url: track.image_url,
            is_active: track.is_active,
            created_at: track.created_at,
        }
    }
}
