pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_track_table;
mod m20260105_000003_create_vehicle_table;
mod m20260105_000004_create_vehicle_image_table;
mod m20260105_000005_create_availability_table;
mod m20260105_000006_create_reservation_table;
mod m20260105_000007_create_favorite_table;
mod m20260105_000008_create_conversation_table;
mod m20260105_000009_create_message_table;
mod m20260105_000010_create_team_table;
mod m20260105_000011_create_driver_profile_table;
mod m20260105_000012_create_team_application_table;
mod m20260105_000013_create_rental_completion_table;
mod m20260105_000014_create_vehicle_vitals_table;
mod m20260105_000015_create_rental_review_table;
mod m20260105_000016_create_payment_table;
mod m20260105_000017_create_platform_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_track_table::Migration),
            Box::new(m20260105_000003_create_vehicle_table::Migration),
            Box::new(m20260105_000004_create_vehicle_image_table::Migration),
            Box::new(m20260105_000005_create_availability_table::Migration),
            Box::new(m20260105_000006_create_reservation_table::Migration),
            Box::new(m20260105_000007_create_favorite_table::Migration),
            Box::new(m20260105_000008_create_conversation_table::Migration),
            Box::new(m20260105_000009_create_message_table::Migration),
            Box::new(m20260105_000010_create_team_table::Migration),
            Box::new(m20260105_000011_create_driver_profile_table::Migration),
            Box::new(m20260105_000012_create_team_application_table::Migration),
            Box::new(m20260105_000013_create_rental_completion_table::Migration),
            Box::new(m20260105_000014_create_vehicle_vitals_table::Migration),
            Box::new(m20260105_000015_create_rental_review_table::Migration),
            Box::new(m20260105_000016_create_payment_table::Migration),
            Box::new(m20260105_000017_create_platform_settings_table::Migration),
        ]
    }
}
