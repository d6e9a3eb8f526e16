use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::booking::{availability, pricing};
use crate::db;
use crate::error::AppError;
use crate::models::{Booking, BookingDetail, BookingStatus};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub car_id: Option<Uuid>,
    pub pickup_location_id: Option<Uuid>,
    pub dropoff_location_id: Option<Uuid>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub dropoff_date: Option<DateTime<Utc>>,
    pub promo_code: Option<String>,
}

/// `POST /bookings` — checkout. The availability check and the insert are
/// two separate statements; two racing checkouts for an overlapping interval
/// can both succeed (see DESIGN.md).
pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<Booking>, AppError> {
    let car_id = require(req.car_id, "carId")?;
    let pickup_location_id = require(req.pickup_location_id, "pickupLocationId")?;
    let dropoff_location_id = require(req.dropoff_location_id, "dropoffLocationId")?;
    let pickup_at = require(req.pickup_date, "pickupDate")?;
    let dropoff_at = require(req.dropoff_date, "dropoffDate")?;

    if dropoff_at <= pickup_at {
        return Err(AppError::BadRequest(
            "dropoffDate must be after pickupDate".to_string(),
        ));
    }

    let car = db::cars::find_by_id(&state.pool, car_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    if !car.available {
        return Err(AppError::BadRequest(
            "This car is not available for rent".to_string(),
        ));
    }

    for (id, field) in [
        (pickup_location_id, "pickupLocationId"),
        (dropoff_location_id, "dropoffLocationId"),
    ] {
        db::locations::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Unknown location in {field}")))?;
    }

    let result = availability::check(&state.pool, car_id, pickup_at, dropoff_at).await?;
    if !result.available {
        return Err(AppError::Conflict(
            "Car is already booked for part of this interval".to_string(),
        ));
    }

    let discount = match &req.promo_code {
        Some(code) => {
            let promo = db::promotions::find_active_by_code(&state.pool, code)
                .await?
                .ok_or_else(|| AppError::BadRequest("Invalid promo code".to_string()))?;
            Some(promo.discount_percent)
        }
        None => None,
    };

    let days = pricing::rental_days(pickup_at, dropoff_at);
    let total_cents = pricing::total_cents(days, car.price_per_day_cents, discount);

    let booking = db::bookings::create(
        &state.pool,
        &db::bookings::NewBooking {
            user_id: auth.user_id,
            car_id,
            pickup_location_id,
            dropoff_location_id,
            pickup_at,
            dropoff_at,
            daily_rate_cents: car.price_per_day_cents,
            total_cents,
        },
    )
    .await?;

    notify(&state, &booking, car.name.clone(), Notification::Received);

    Ok(Json(booking))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDetail>, AppError> {
    let booking = db::bookings::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    auth.require_self_or_admin(booking.user_id)?;

    Ok(Json(booking))
}

pub async fn list_for_user(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<BookingDetail>>, AppError> {
    auth.require_self_or_admin(user_id)?;

    let bookings = db::bookings::list_by_user(&state.pool, user_id).await?;
    Ok(Json(bookings))
}

pub async fn cancel(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = db::bookings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    auth.require_self_or_admin(booking.user_id)?;

    if !booking.status.can_cancel() {
        return Err(AppError::Conflict(format!(
            "Cannot cancel a {:?} booking",
            booking.status
        )));
    }

    let updated = db::bookings::update_status(&state.pool, id, BookingStatus::Cancelled).await?;

    let car_name = db::cars::find_by_id(&state.pool, updated.car_id)
        .await?
        .map(|c| c.name)
        .unwrap_or_default();
    notify(&state, &updated, car_name, Notification::Cancelled);

    Ok(Json(updated))
}

pub async fn confirm(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    auth.require_admin()?;

    let booking = db::bookings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if !booking.status.can_confirm() {
        return Err(AppError::Conflict(format!(
            "Cannot confirm a {:?} booking",
            booking.status
        )));
    }

    let updated = db::bookings::update_status(&state.pool, id, BookingStatus::Confirmed).await?;

    let car_name = db::cars::find_by_id(&state.pool, updated.car_id)
        .await?
        .map(|c| c.name)
        .unwrap_or_default();
    notify(&state, &updated, car_name, Notification::Confirmed);

    Ok(Json(updated))
}

enum Notification {
    Received,
    Confirmed,
    Cancelled,
}

/// Fire-and-forget transactional email. Failures are logged, never surfaced
/// to the client.
fn notify(state: &SharedState, booking: &Booking, car_name: String, kind: Notification) {
    let Some(mailer) = state.mailer.clone() else {
        tracing::debug!("SMTP not configured, skipping booking notification");
        return;
    };

    let pool = state.pool.clone();
    let booking = booking.clone();

    tokio::spawn(async move {
        let user = match db::users::find_by_id(&pool, booking.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Failed to load user for booking notification: {e}");
                return;
            }
        };

        let sent = match kind {
            Notification::Received => {
                mailer
                    .send_booking_received(&user.email, &user.name, &car_name, &booking)
                    .await
            }
            Notification::Confirmed => {
                mailer
                    .send_booking_confirmed(&user.email, &user.name, &car_name, &booking)
                    .await
            }
            Notification::Cancelled => {
                mailer
                    .send_booking_cancelled(&user.email, &user.name, &car_name, booking.pickup_at)
                    .await
            }
        };

        if let Err(e) = sent {
            tracing::error!("Failed to send booking notification: {e}");
        }
    });
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}
