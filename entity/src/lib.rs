//! SeaORM entities for the trackside marketplace.
//!
//! One module per table. Status columns are string-backed active enums collected in
//! [`sea_orm_active_enums`]; structured columns (add-ons, contact details, return forms)
//! are stored as JSON through the types in [`json`].

pub mod prelude;

pub mod availability;
pub mod conversation;
pub mod driver_profile;
pub mod favorite;
pub mod json;
pub mod message;
pub mod payment;
pub mod platform_settings;
pub mod rental_completion;
pub mod rental_review;
pub mod reservation;
pub mod sea_orm_active_enums;
pub mod team;
pub mod team_application;
pub mod track;
pub mod user;
pub mod vehicle;
pub mod vehicle_image;
pub mod vehicle_vitals;
