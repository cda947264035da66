//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard`, hands the request body to a service and
//! converts the returned models into DTOs. Handlers carry `utoipa::path` annotations that
//! `router::ApiDoc` collects into the OpenAPI document.

pub mod admin;
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

/// Converts a list of models into their DTOs.
pub(crate) fn into_dtos<M, D: From<M>>(models: Vec<M>) -> Vec<D> {
    models.into_iter().map(D::from).collect()
}
