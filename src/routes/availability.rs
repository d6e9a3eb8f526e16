use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::availability;
use crate::error::AppError;
use crate::models::Booking;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub car_id: Option<Uuid>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub dropoff_date: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub conflicts: Vec<Booking>,
}

/// `POST /availability` — is a car free for the requested interval?
/// Interval sanity beyond field presence is not checked here; the checker
/// treats whatever interval it is handed as-is.
pub async fn check(
    State(state): State<SharedState>,
    Json(req): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let car_id = req
        .car_id
        .ok_or_else(|| AppError::BadRequest("carId is required".to_string()))?;
    let pickup_date = req
        .pickup_date
        .ok_or_else(|| AppError::BadRequest("pickupDate is required".to_string()))?;
    let dropoff_date = req
        .dropoff_date
        .ok_or_else(|| AppError::BadRequest("dropoffDate is required".to_string()))?;

    let result = availability::check(&state.pool, car_id, pickup_date, dropoff_date).await?;

    Ok(Json(AvailabilityResponse {
        available: result.available,
        conflicts: result.conflicts,
    }))
}
