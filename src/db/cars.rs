use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Car;

/// Catalog listing — only cars currently offered for rent, cheapest first.
pub async fn list_available(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
    sqlx::query_as::<_, Car>(
        "SELECT * FROM cars WHERE available = true ORDER BY price_per_day_cents ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Car>, sqlx::Error> {
    sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
