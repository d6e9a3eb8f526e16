use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::booking::lifecycle::{self, AutoCompleteResult};
use crate::error::AppError;
use crate::state::SharedState;

/// `GET /cron/auto-complete` — invoked by the hosting platform's scheduler.
/// The shared secret gates the scan; without it nothing runs.
pub async fn auto_complete(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<AutoCompleteResult>, AppError> {
    authorize(&headers, &state.config.cron_secret)?;

    let result = lifecycle::auto_complete(&state.pool).await?;
    Ok(Json(result))
}

fn authorize(headers: &HeaderMap, secret: &str) -> Result<(), AppError> {
    let presented = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing cron secret".to_string()))?;

    if presented.as_bytes().ct_eq(secret.as_bytes()).into() {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Invalid cron secret".to_string()))
    }
}
