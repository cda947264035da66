use crate::server::data::{
    payment::{PaymentRepository, PaymentUpdate},
    platform_settings::PlatformSettingsRepository,
};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_settings;
mod find_by_intent_id;
mod update;
