//! Server-side domain types.
//!
//! Holds the parameter types passed from services to repositories, the small pieces of
//! booking arithmetic shared by several services (date ranges, platform fees, review
//! statistics, completion transitions) and the conversions from entity models to DTOs.

pub mod availability;
pub mod conversation;
pub mod date_range;
pub mod driver;
pub mod favorite;
pub mod fee;
pub mod message;
pub mod page;
pub mod party;
pub mod payment;
pub mod rental_completion;
pub mod reservation;
pub mod review;
pub mod team;
pub mod team_application;
pub mod track;
pub mod user;
pub mod vehicle;
