use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;

#[derive(Debug, Serialize)]
pub struct AutoCompleteResult {
    pub completed: usize,
    pub booking_ids: Vec<Uuid>,
}

/// Transition confirmed bookings whose drop-off has passed to completed.
/// Idempotent: a second run over the same data finds nothing to do. Each
/// booking's transition is independent; there is no surrounding transaction
/// to roll back on partial failure.
pub async fn auto_complete(pool: &PgPool) -> Result<AutoCompleteResult, sqlx::Error> {
    let booking_ids = db::bookings::complete_expired(pool, Utc::now()).await?;

    if booking_ids.is_empty() {
        tracing::debug!("Auto-complete: no bookings qualified");
    } else {
        tracing::info!("Auto-complete: {} booking(s) completed", booking_ids.len());
    }

    Ok(AutoCompleteResult {
        completed: booking_ids.len(),
        booking_ids,
    })
}
