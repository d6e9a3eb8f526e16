use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Booking, BookingDetail, BookingStatus};

const DETAIL_SELECT: &str = "SELECT b.id, b.user_id, b.car_id,
        c.name AS car_name, c.model AS car_model,
        b.pickup_location_id, pl.name AS pickup_location_name,
        b.dropoff_location_id, dl.name AS dropoff_location_name,
        b.pickup_at, b.dropoff_at, b.status,
        b.daily_rate_cents, b.total_cents, b.created_at
     FROM bookings b
     JOIN cars c ON b.car_id = c.id
     JOIN locations pl ON b.pickup_location_id = pl.id
     JOIN locations dl ON b.dropoff_location_id = dl.id";

pub struct NewBooking {
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub pickup_location_id: Uuid,
    pub dropoff_location_id: Uuid,
    pub pickup_at: DateTime<Utc>,
    pub dropoff_at: DateTime<Utc>,
    pub daily_rate_cents: i64,
    pub total_cents: i64,
}

pub async fn create(pool: &PgPool, new: &NewBooking) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "INSERT INTO bookings (user_id, car_id, pickup_location_id, dropoff_location_id,
                               pickup_at, dropoff_at, status, daily_rate_cents, total_cents)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(new.user_id)
    .bind(new.car_id)
    .bind(new.pickup_location_id)
    .bind(new.dropoff_location_id)
    .bind(new.pickup_at)
    .bind(new.dropoff_at)
    .bind(BookingStatus::Pending)
    .bind(new.daily_rate_cents)
    .bind(new.total_cents)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_detail_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<BookingDetail>, sqlx::Error> {
    sqlx::query_as::<_, BookingDetail>(&format!("{DETAIL_SELECT} WHERE b.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<BookingDetail>, sqlx::Error> {
    sqlx::query_as::<_, BookingDetail>(&format!(
        "{DETAIL_SELECT} WHERE b.user_id = $1 ORDER BY b.created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Confirmed bookings for a car whose interval intersects the requested one.
/// Both ends inclusive, so a drop-off equal to the next pickup still
/// conflicts.
pub async fn find_conflicts(
    pool: &PgPool,
    car_id: Uuid,
    pickup_at: DateTime<Utc>,
    dropoff_at: DateTime<Utc>,
) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings
         WHERE car_id = $1 AND status = $2
           AND pickup_at <= $4 AND dropoff_at >= $3
         ORDER BY pickup_at ASC",
    )
    .bind(car_id)
    .bind(BookingStatus::Confirmed)
    .bind(pickup_at)
    .bind(dropoff_at)
    .fetch_all(pool)
    .await
}

pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: BookingStatus,
) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>("UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await
}

/// Move confirmed bookings whose drop-off has passed to completed. A single
/// statement, so re-running with nothing to do is a no-op.
pub async fn complete_expired(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "UPDATE bookings SET status = $1
         WHERE status = $2 AND dropoff_at < $3
         RETURNING id",
    )
    .bind(BookingStatus::Completed)
    .bind(BookingStatus::Confirmed)
    .bind(now)
    .fetch_all(pool)
    .await
}
