use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price_per_day_cents: i64,
    pub available: bool,
    pub seats: i32,
    pub transmission: String,
    pub fuel: String,
    pub created_at: DateTime<Utc>,
}
