use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Extra {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_per_day_cents: i64,
    pub active: bool,
}
