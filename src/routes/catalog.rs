use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{Car, Extra, Location, Promotion};
use crate::state::SharedState;

pub async fn list_cars(State(state): State<SharedState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = db::cars::list_available(&state.pool).await?;
    Ok(Json(cars))
}

pub async fn get_car(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Car>, AppError> {
    let car = db::cars::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
    Ok(Json(car))
}

pub async fn list_locations(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Location>>, AppError> {
    let locations = db::locations::list_all(&state.pool).await?;
    Ok(Json(locations))
}

pub async fn list_extras(State(state): State<SharedState>) -> Result<Json<Vec<Extra>>, AppError> {
    let extras = db::extras::list_active(&state.pool).await?;
    Ok(Json(extras))
}

pub async fn list_active_promotions(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Promotion>>, AppError> {
    let promotions = db::promotions::list_active(&state.pool).await?;
    Ok(Json(promotions))
}
