pub mod auth;
pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod cron;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/reset-password", post(auth::reset_password))
        // Catalog
        .route("/cars", get(catalog::list_cars))
        .route("/cars/{id}", get(catalog::get_car))
        .route("/locations", get(catalog::list_locations))
        .route("/extras", get(catalog::list_extras))
        .route("/promotions/active", get(catalog::list_active_promotions))
        // Availability
        .route("/availability", post(availability::check))
        // Bookings
        .route("/bookings", post(bookings::create))
        .route("/bookings/{id}", get(bookings::get))
        .route("/bookings/user/{user_id}", get(bookings::list_for_user))
        .route("/bookings/{id}/cancel", post(bookings::cancel))
        .route("/bookings/{id}/confirm", post(bookings::confirm))
        // Cron
        .route("/cron/auto-complete", get(cron::auto_complete))
}
