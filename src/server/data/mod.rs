//! Database repository layer for all domain entities.
//!
//! Each repository wraps a connection (or an open transaction) and performs the CRUD for one
//! table. Repositories return SeaORM models; services convert them into DTOs. Every write sets
//! its own timestamps.

pub mod availability;
pub mod conversation;
pub mod driver_profile;
pub mod favorite;
pub mod message;
pub mod payment;
pub mod platform_settings;
pub mod rental_completion;
pub mod reservation;
pub mod review;
pub mod team;
pub mod team_application;
pub mod track;
pub mod user;
pub mod vehicle;
pub mod vehicle_image;
pub mod vehicle_vitals;

#[cfg(test)]
mod test;
