use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::Booking;

/// Closed-interval intersection test. Inclusive on both ends, so an existing
/// drop-off equal to the requested pickup counts as a conflict.
pub fn overlaps(
    existing_pickup: DateTime<Utc>,
    existing_dropoff: DateTime<Utc>,
    requested_pickup: DateTime<Utc>,
    requested_dropoff: DateTime<Utc>,
) -> bool {
    existing_pickup <= requested_dropoff && existing_dropoff >= requested_pickup
}

/// Outcome of an availability check for one car and interval.
#[derive(Debug)]
pub struct Availability {
    pub available: bool,
    pub conflicts: Vec<Booking>,
}

/// A car is free iff no confirmed booking for it intersects the requested
/// interval. Pending and cancelled bookings never block. Read-only; interval
/// sanity (dropoff > pickup) is the caller's responsibility.
pub async fn check(
    pool: &PgPool,
    car_id: Uuid,
    pickup_at: DateTime<Utc>,
    dropoff_at: DateTime<Utc>,
) -> Result<Availability, sqlx::Error> {
    let conflicts = db::bookings::find_conflicts(pool, car_id, pickup_at, dropoff_at).await?;
    Ok(Availability {
        available: conflicts.is_empty(),
        conflicts,
    })
}
