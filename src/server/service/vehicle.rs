//! Vehicle listings: browsing, owner management and admin approval.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::vehicle::{AddVehicleImageDto, CreateVehicleDto, UpdateVehicleDto},
    server::{
        data::{
            availability::AvailabilityRepository, track::TrackRepository,
            user::UserRepository, vehicle::VehicleRepository,
            vehicle_image::VehicleImageRepository,
        },
        error::AppError,
        model::{
            page::page_size,
            vehicle::{CreateVehicleParams, VehicleDetail, VehicleWithImage},
        },
    },
};

pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Loads a vehicle the user owns.
///
/// # Returns
/// - `Err(AppError::NotFound)` - No such vehicle
/// - `Err(AppError::Forbidden)` - The user is not the owner
pub(crate) async fn owned_vehicle<C: ConnectionTrait>(
    db: &C,
    vehicle_id: i32,
    user_id: &str,
) -> Result<entity::vehicle::Model, AppError> {
    let vehicle = VehicleRepository::new(db)
        .find_by_id(vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    if vehicle.owner_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to modify this vehicle".to_string(),
        ));
    }

    Ok(vehicle)
}

/// Pairs each vehicle with its primary image URL.
pub(crate) async fn with_primary_images<C: ConnectionTrait>(
    db: &C,
    vehicles: Vec<entity::vehicle::Model>,
) -> Result<Vec<VehicleWithImage>, AppError> {
    let ids = vehicles.iter().map(|v| v.id).collect();
    let mut images = VehicleImageRepository::new(db).primary_urls(ids).await?;

    Ok(vehicles
        .into_iter()
        .map(|vehicle| VehicleWithImage {
            primary_image: images.remove(&vehicle.id),
            vehicle,
        })
        .collect())
}

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public listings, newest first.
    pub async fn list(
        &self,
        track_id: Option<i32>,
        limit: Option<u64>,
    ) -> Result<Vec<VehicleWithImage>, AppError> {
        let vehicles = VehicleRepository::new(self.db)
            .list_public(track_id, page_size(limit, DEFAULT_LIST_LIMIT))
            .await?;

        with_primary_images(self.db, vehicles).await
    }

    /// Listing page with images, owner, track and availability.
    ///
    /// A deactivated vehicle is reported as not found.
    pub async fn get_by_id(&self, id: i32) -> Result<VehicleDetail, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|v| v.is_active)
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let images = VehicleImageRepository::new(self.db)
            .list_by_vehicle(vehicle.id)
            .await?;
        let owner = UserRepository::new(self.db)
            .find_by_external_id(&vehicle.owner_id)
            .await?;
        let track = TrackRepository::new(self.db)
            .find_by_id(vehicle.track_id)
            .await?;
        let availability = AvailabilityRepository::new(self.db)
            .list_by_vehicle(vehicle.id, None)
            .await?;

        Ok(VehicleDetail {
            vehicle,
            images,
            owner,
            track,
            availability,
        })
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<VehicleWithImage>, AppError> {
        let vehicles = VehicleRepository::new(self.db)
            .list_by_owner(owner_id)
            .await?;

        with_primary_images(self.db, vehicles).await
    }

    /// Lists a new vehicle for the owner. It stays hidden until an admin approves it.
    pub async fn create(
        &self,
        owner_id: &str,
        vehicle: CreateVehicleDto,
    ) -> Result<entity::vehicle::Model, AppError> {
        if vehicle.daily_rate <= 0 {
            return Err(AppError::BadRequest(
                "Daily rate must be positive".to_string(),
            ));
        }

        TrackRepository::new(self.db)
            .find_by_id(vehicle.track_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))?;

        let created = VehicleRepository::new(self.db)
            .create(CreateVehicleParams {
                owner_id: owner_id.to_string(),
                track_id: vehicle.track_id,
                make: vehicle.make,
                model: vehicle.model,
                year: vehicle.year,
                daily_rate: vehicle.daily_rate,
                description: vehicle.description,
                horsepower: vehicle.horsepower,
                transmission: vehicle.transmission,
                drivetrain: vehicle.drivetrain,
                engine_type: vehicle.engine_type,
                mileage: vehicle.mileage,
                amenities: vehicle.amenities,
                add_ons: vehicle.add_ons,
                images: vehicle.images,
            })
            .await?;

        tracing::info!("Vehicle {} listed by {}", created.id, owner_id);

        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: &str,
        id: i32,
        changes: UpdateVehicleDto,
    ) -> Result<entity::vehicle::Model, AppError> {
        let vehicle = owned_vehicle(self.db, id, user_id).await?;

        if changes.daily_rate.is_some_and(|rate| rate <= 0) {
            return Err(AppError::BadRequest(
                "Daily rate must be positive".to_string(),
            ));
        }

        Ok(VehicleRepository::new(self.db)
            .update(vehicle, changes)
            .await?)
    }

    /// Soft deletes the listing.
    pub async fn remove(&self, user_id: &str, id: i32) -> Result<(), AppError> {
        let vehicle = owned_vehicle(self.db, id, user_id).await?;
        VehicleRepository::new(self.db)
            .set_active(vehicle, false)
            .await?;
        Ok(())
    }

    /// Appends an image. A new primary image replaces the previous primary.
    pub async fn add_image(
        &self,
        user_id: &str,
        vehicle_id: i32,
        image: AddVehicleImageDto,
    ) -> Result<entity::vehicle_image::Model, AppError> {
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;
        let repo = VehicleImageRepository::new(self.db);

        let position = repo.count_by_vehicle(vehicle.id).await?;
        if image.is_primary {
            repo.unset_primary(vehicle.id).await?;
        }

        Ok(repo
            .create(vehicle.id, image.image_url, image.is_primary, position as i32)
            .await?)
    }

    pub async fn remove_image(&self, user_id: &str, image_id: i32) -> Result<(), AppError> {
        let repo = VehicleImageRepository::new(self.db);
        let image = repo
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        owned_vehicle(self.db, image.vehicle_id, user_id).await?;
        repo.delete(image.id).await?;

        Ok(())
    }

    /// Active listings awaiting a decision, oldest first.
    pub async fn list_pending(&self) -> Result<Vec<VehicleWithImage>, AppError> {
        let vehicles = VehicleRepository::new(self.db)
            .list_pending_approval()
            .await?;

        with_primary_images(self.db, vehicles).await
    }

    pub async fn approve(&self, id: i32) -> Result<entity::vehicle::Model, AppError> {
        self.decide(id, true).await
    }

    /// Rejects and deactivates the listing.
    pub async fn reject(&self, id: i32) -> Result<entity::vehicle::Model, AppError> {
        self.decide(id, false).await
    }

    async fn decide(&self, id: i32, approved: bool) -> Result<entity::vehicle::Model, AppError> {
        let repo = VehicleRepository::new(self.db);
        let vehicle = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = repo.set_approval(vehicle, approved).await?;
        tracing::info!(
            "Vehicle {} {}",
            vehicle.id,
            if approved { "approved" } else { "rejected" }
        );

        Ok(vehicle)
    }
}
