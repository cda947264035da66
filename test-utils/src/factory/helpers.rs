//! Counter for unique test values and shortcuts for common dependency chains.

use sea_orm::{DatabaseConnection, DbErr};

use entity::sea_orm_active_enums::ReservationStatus;

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter, used to keep factory output unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, a track and an approved, active vehicle listed by that owner.
///
/// # Returns
/// - `Ok((owner, track, vehicle))`
/// - `Err(DbErr)` - Insert failed
pub async fn create_vehicle_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::track::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let track = crate::factory::track::create_track(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, &owner.external_id, track.id).await?;

    Ok((owner, track, vehicle))
}

/// Creates a vehicle with its owner plus a renter and a reservation in the given status.
///
/// The reservation runs from 2030-06-01 to 2030-06-03.
///
/// # Returns
/// - `Ok((owner, renter, vehicle, reservation))`
/// - `Err(DbErr)` - Insert failed
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
    status: ReservationStatus,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::vehicle::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (owner, _track, vehicle) = create_vehicle_with_dependencies(db).await?;
    let renter = crate::factory::user::create_user(db).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(
        db,
        &vehicle,
        &renter.external_id,
    )
    .status(status)
    .build()
    .await?;

    Ok((owner, renter, vehicle, reservation))
}
