use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of booking states. Stored as the Postgres `booking_status`
/// enum; transitions are matched exhaustively so a new variant forces every
/// transition site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Only confirmed bookings block a car's availability.
    pub fn blocks_availability(self) -> bool {
        match self {
            BookingStatus::Confirmed => true,
            BookingStatus::Pending | BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }

    /// A booking can be cancelled while it has not run its course.
    pub fn can_cancel(self) -> bool {
        match self {
            BookingStatus::Pending | BookingStatus::Confirmed => true,
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }

    /// Only pending bookings can be confirmed.
    pub fn can_confirm(self) -> bool {
        match self {
            BookingStatus::Pending => true,
            BookingStatus::Confirmed | BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub pickup_location_id: Uuid,
    pub dropoff_location_id: Uuid,
    pub pickup_at: DateTime<Utc>,
    pub dropoff_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub daily_rate_cents: i64,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Booking joined with car and location summaries, as returned by the
/// detail and per-user listing endpoints.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BookingDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub car_name: String,
    pub car_model: String,
    pub pickup_location_id: Uuid,
    pub pickup_location_name: String,
    pub dropoff_location_id: Uuid,
    pub dropoff_location_name: String,
    pub pickup_at: DateTime<Utc>,
    pub dropoff_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub daily_rate_cents: i64,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}
