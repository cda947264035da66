//! Request and response bodies of the JSON API.
//!
//! DTOs are plain serde structs documented for OpenAPI through `utoipa::ToSchema`. Money is in
//! cents, dates are `YYYY-MM-DD` and timestamps are RFC 3339 UTC.

pub mod api;
pub mod availability;
pub mod conversation;
pub mod driver;
pub mod favorite;
pub mod message;
pub mod payment;
pub mod rental_completion;
pub mod reservation;
pub mod review;
pub mod team;
pub mod team_application;
pub mod track;
pub mod user;
pub mod vehicle;
