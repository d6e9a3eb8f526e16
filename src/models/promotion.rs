use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub discount_percent: i32,
    pub active: bool,
    pub valid_until: Option<DateTime<Utc>>,
}
