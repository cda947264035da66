//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce who may do what,
//! validate input, run multi-step writes in a transaction and return entity models or the
//! aggregates in `server::model`, leaving DTO conversion to the controllers.

pub mod admin_code;
pub mod auth;
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
pub mod webhook;

#[cfg(test)]
mod test;
