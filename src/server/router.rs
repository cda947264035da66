//! Route table and OpenAPI document.
//!
//! Login and webhook routes sit behind a per-IP rate limit, so the server must be served
//! with `into_make_service_with_connect_info::<SocketAddr>()`.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        availability::{self, AVAILABILITY_TAG},
        conversation::{self, CONVERSATION_TAG},
        driver::{self, DRIVER_TAG},
        favorite::{self, FAVORITE_TAG},
        message::{self, MESSAGE_TAG},
        payment::{self, PAYMENT_TAG},
        rental_completion::{self, RENTAL_COMPLETION_TAG},
        reservation::{self, RESERVATION_TAG},
        review::{self, REVIEW_TAG},
        team::{self, TEAM_TAG},
        team_application::{self, TEAM_APPLICATION_TAG},
        track::{self, TRACK_TAG},
        user::{self, USER_TAG},
        vehicle::{self, VEHICLE_TAG},
        webhook::{self, WEBHOOK_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Sustained requests per second allowed per client IP on limited routes.
const RATE_LIMIT_PER_SECOND: u64 = 2;
const RATE_LIMIT_BURST: u32 = 20;

#[derive(OpenApi)]
#[openapi(
    info(title = "Trackside API", description = "Track car rental marketplace"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        user::get_current_user,
        user::get_user,
        user::update_profile,
        user::update_profile_image,
        track::list_tracks,
        track::get_track,
        track::create_track,
        vehicle::list_vehicles,
        vehicle::list_my_vehicles,
        vehicle::get_vehicle,
        vehicle::create_vehicle,
        vehicle::update_vehicle,
        vehicle::delete_vehicle,
        vehicle::add_vehicle_image,
        vehicle::remove_vehicle_image,
        availability::get_availability,
        availability::check_availability,
        availability::get_calendar,
        availability::block_date,
        availability::block_range,
        availability::unblock_date,
        availability::unblock_range,
        availability::set_default_availability,
        reservation::create_reservation,
        reservation::list_reservations,
        reservation::list_pending,
        reservation::list_confirmed,
        reservation::list_upcoming,
        reservation::get_reservation,
        reservation::approve_reservation,
        reservation::decline_reservation,
        reservation::cancel_reservation,
        reservation::complete_reservation,
        rental_completion::create_completion,
        rental_completion::list_completions,
        rental_completion::list_pending_completions,
        rental_completion::get_completion,
        rental_completion::submit_renter_return,
        rental_completion::submit_owner_review,
        rental_completion::submit_vitals,
        rental_completion::submit_review,
        review::list_my_reviews,
        review::list_vehicle_reviews,
        review::list_vehicle_reviews_page,
        review::get_vehicle_review_stats,
        review::get_user_review_stats,
        review::list_pending_responses,
        review::respond_to_review,
        review::delete_review,
        favorite::list_favorites,
        favorite::add_favorite,
        favorite::toggle_favorite,
        favorite::count_favorites,
        favorite::is_favorited,
        favorite::remove_favorite,
        conversation::list_conversations,
        conversation::create_conversation,
        conversation::find_conversation,
        conversation::get_conversation,
        conversation::delete_conversation,
        conversation::mark_conversation_read,
        conversation::archive_conversation,
        conversation::list_messages,
        conversation::list_host_conversations,
        conversation::bulk_conversation_action,
        conversation::get_host_analytics,
        message::send_message,
        message::get_unread_count,
        message::mark_message_read,
        message::edit_message,
        message::delete_message,
        message::send_system_message,
        message::get_host_message_stats,
        payment::create_payment_intent,
        payment::list_payments,
        payment::get_payment,
        payment::confirm_payment,
        payment::refund_payment,
        webhook::stripe_webhook,
        webhook::identity_webhook,
        team::list_teams,
        team::list_my_teams,
        team::get_team,
        team::create_team,
        team::update_team,
        team::delete_team,
        team::list_team_applications,
        team::list_public_team_applications,
        driver::list_drivers,
        driver::get_my_driver_profile,
        driver::get_driver,
        driver::create_driver,
        driver::update_driver,
        driver::delete_driver,
        team_application::apply_to_team,
        team_application::list_my_applications,
        team_application::update_application_status,
        admin::list_pending_vehicles,
        admin::approve_vehicle,
        admin::reject_vehicle,
        admin::initialize_settings,
        admin::list_applications_by_status,
    ),
    tags(
        (name = AUTH_TAG, description = "Login through the identity provider"),
        (name = USER_TAG, description = "User profiles"),
        (name = TRACK_TAG, description = "Race tracks"),
        (name = VEHICLE_TAG, description = "Vehicle listings"),
        (name = AVAILABILITY_TAG, description = "Vehicle availability calendars"),
        (name = RESERVATION_TAG, description = "Booking requests and their lifecycle"),
        (name = RENTAL_COMPLETION_TAG, description = "Post-rental handover"),
        (name = REVIEW_TAG, description = "Reviews and ratings"),
        (name = FAVORITE_TAG, description = "Saved vehicles"),
        (name = CONVERSATION_TAG, description = "Conversations and host inbox"),
        (name = MESSAGE_TAG, description = "Messages"),
        (name = PAYMENT_TAG, description = "Reservation payments and refunds"),
        (name = WEBHOOK_TAG, description = "Signed callbacks from external services"),
        (name = TEAM_TAG, description = "Racing teams"),
        (name = DRIVER_TAG, description = "Driver profiles"),
        (name = TEAM_APPLICATION_TAG, description = "Driver applications to teams"),
        (name = ADMIN_TAG, description = "Administration"),
    )
)]
pub struct ApiDoc;

/// Builds the full API router.
///
/// # Arguments
/// - `app_url` - Front end origin allowed by CORS
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::ConfigErr)` - `app_url` is not a valid origin
/// - `Err(AppError::InternalError)` - Rate limit configuration was rejected
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let governor = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(RATE_LIMIT_PER_SECOND)
            .burst_size(RATE_LIMIT_BURST)
            .finish()
            .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?,
    );

    let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let limited = Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/webhooks/stripe", post(webhook::stripe_webhook))
        .route("/api/webhooks/identity", post(webhook::identity_webhook))
        .layer(GovernorLayer::new(governor));

    let api = Router::new()
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/users/me",
            get(user::get_current_user).put(user::update_profile),
        )
        .route("/api/users/me/image", put(user::update_profile_image))
        .route("/api/users/{external_id}", get(user::get_user))
        .route(
            "/api/users/{external_id}/review-stats",
            get(review::get_user_review_stats),
        )
        .route(
            "/api/tracks",
            get(track::list_tracks).post(track::create_track),
        )
        .route("/api/tracks/{id}", get(track::get_track))
        .route(
            "/api/vehicles",
            get(vehicle::list_vehicles).post(vehicle::create_vehicle),
        )
        .route("/api/vehicles/mine", get(vehicle::list_my_vehicles))
        .route(
            "/api/vehicles/images/{image_id}",
            delete(vehicle::remove_vehicle_image),
        )
        .route(
            "/api/vehicles/{id}",
            get(vehicle::get_vehicle)
                .put(vehicle::update_vehicle)
                .delete(vehicle::delete_vehicle),
        )
        .route("/api/vehicles/{id}/images", post(vehicle::add_vehicle_image))
        .route(
            "/api/vehicles/{id}/availability",
            get(availability::get_availability),
        )
        .route(
            "/api/vehicles/{id}/availability/check",
            get(availability::check_availability),
        )
        .route(
            "/api/vehicles/{id}/availability/calendar",
            get(availability::get_calendar),
        )
        .route(
            "/api/vehicles/{id}/availability/block",
            post(availability::block_date),
        )
        .route(
            "/api/vehicles/{id}/availability/block-range",
            post(availability::block_range),
        )
        .route(
            "/api/vehicles/{id}/availability/unblock-range",
            post(availability::unblock_range),
        )
        .route(
            "/api/vehicles/{id}/availability/default",
            put(availability::set_default_availability),
        )
        .route(
            "/api/vehicles/{id}/availability/{date}",
            delete(availability::unblock_date),
        )
        .route(
            "/api/vehicles/{id}/reviews",
            get(review::list_vehicle_reviews),
        )
        .route(
            "/api/vehicles/{id}/reviews/page",
            get(review::list_vehicle_reviews_page),
        )
        .route(
            "/api/vehicles/{id}/reviews/stats",
            get(review::get_vehicle_review_stats),
        )
        .route(
            "/api/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route("/api/reservations/pending", get(reservation::list_pending))
        .route(
            "/api/reservations/confirmed",
            get(reservation::list_confirmed),
        )
        .route("/api/reservations/upcoming", get(reservation::list_upcoming))
        .route("/api/reservations/{id}", get(reservation::get_reservation))
        .route(
            "/api/reservations/{id}/approve",
            post(reservation::approve_reservation),
        )
        .route(
            "/api/reservations/{id}/decline",
            post(reservation::decline_reservation),
        )
        .route(
            "/api/reservations/{id}/cancel",
            post(reservation::cancel_reservation),
        )
        .route(
            "/api/reservations/{id}/complete",
            post(reservation::complete_reservation),
        )
        .route(
            "/api/rental-completions",
            get(rental_completion::list_completions).post(rental_completion::create_completion),
        )
        .route(
            "/api/rental-completions/pending",
            get(rental_completion::list_pending_completions),
        )
        .route(
            "/api/rental-completions/{id}",
            get(rental_completion::get_completion),
        )
        .route(
            "/api/rental-completions/{id}/renter-return",
            post(rental_completion::submit_renter_return),
        )
        .route(
            "/api/rental-completions/{id}/owner-review",
            post(rental_completion::submit_owner_review),
        )
        .route(
            "/api/rental-completions/{id}/vitals",
            post(rental_completion::submit_vitals),
        )
        .route(
            "/api/rental-completions/{id}/review",
            post(rental_completion::submit_review),
        )
        .route("/api/reviews", get(review::list_my_reviews))
        .route(
            "/api/reviews/pending-responses",
            get(review::list_pending_responses),
        )
        .route("/api/reviews/{id}", delete(review::delete_review))
        .route("/api/reviews/{id}/respond", post(review::respond_to_review))
        .route(
            "/api/favorites",
            get(favorite::list_favorites).post(favorite::add_favorite),
        )
        .route("/api/favorites/toggle", post(favorite::toggle_favorite))
        .route("/api/favorites/count", get(favorite::count_favorites))
        .route(
            "/api/favorites/{vehicle_id}",
            get(favorite::is_favorited).delete(favorite::remove_favorite),
        )
        .route(
            "/api/conversations",
            get(conversation::list_conversations).post(conversation::create_conversation),
        )
        .route(
            "/api/conversations/find",
            get(conversation::find_conversation),
        )
        .route(
            "/api/conversations/{id}",
            get(conversation::get_conversation).delete(conversation::delete_conversation),
        )
        .route(
            "/api/conversations/{id}/read",
            post(conversation::mark_conversation_read),
        )
        .route(
            "/api/conversations/{id}/archive",
            post(conversation::archive_conversation),
        )
        .route(
            "/api/conversations/{id}/messages",
            get(conversation::list_messages),
        )
        .route("/api/messages", post(message::send_message))
        .route("/api/messages/unread-count", get(message::get_unread_count))
        .route(
            "/api/messages/{id}",
            put(message::edit_message).delete(message::delete_message),
        )
        .route("/api/messages/{id}/read", post(message::mark_message_read))
        .route(
            "/api/host/conversations",
            get(conversation::list_host_conversations),
        )
        .route(
            "/api/host/conversations/bulk",
            post(conversation::bulk_conversation_action),
        )
        .route("/api/host/analytics", get(conversation::get_host_analytics))
        .route(
            "/api/host/messages/stats",
            get(message::get_host_message_stats),
        )
        .route(
            "/api/host/messages/system",
            post(message::send_system_message),
        )
        .route("/api/payments", get(payment::list_payments))
        .route("/api/payments/intent", post(payment::create_payment_intent))
        .route("/api/payments/{id}", get(payment::get_payment))
        .route("/api/payments/{id}/confirm", post(payment::confirm_payment))
        .route("/api/payments/{id}/refund", post(payment::refund_payment))
        .route("/api/teams", get(team::list_teams).post(team::create_team))
        .route("/api/teams/mine", get(team::list_my_teams))
        .route(
            "/api/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/teams/{id}/applications",
            get(team::list_team_applications),
        )
        .route(
            "/api/teams/{id}/applications/public",
            get(team::list_public_team_applications),
        )
        .route(
            "/api/drivers",
            get(driver::list_drivers).post(driver::create_driver),
        )
        .route("/api/drivers/me", get(driver::get_my_driver_profile))
        .route(
            "/api/drivers/{id}",
            get(driver::get_driver)
                .put(driver::update_driver)
                .delete(driver::delete_driver),
        )
        .route(
            "/api/team-applications",
            post(team_application::apply_to_team),
        )
        .route(
            "/api/team-applications/mine",
            get(team_application::list_my_applications),
        )
        .route(
            "/api/team-applications/{id}/status",
            put(team_application::update_application_status),
        )
        .route(
            "/api/admin/vehicles/pending",
            get(admin::list_pending_vehicles),
        )
        .route(
            "/api/admin/vehicles/{id}/approve",
            post(admin::approve_vehicle),
        )
        .route(
            "/api/admin/vehicles/{id}/reject",
            post(admin::reject_vehicle),
        )
        .route(
            "/api/admin/settings/initialize",
            post(admin::initialize_settings),
        )
        .route(
            "/api/admin/team-applications",
            get(admin::list_applications_by_status),
        );

    Ok(Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .merge(limited)
        .merge(api)
        .layer(cors))
}
