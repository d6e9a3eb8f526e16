use sqlx::PgPool;

use crate::models::Promotion;

pub async fn list_active(pool: &PgPool) -> Result<Vec<Promotion>, sqlx::Error> {
    sqlx::query_as::<_, Promotion>(
        "SELECT * FROM promotions
         WHERE active = true AND (valid_until IS NULL OR valid_until > now())
         ORDER BY code ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_active_by_code(
    pool: &PgPool,
    code: &str,
) -> Result<Option<Promotion>, sqlx::Error> {
    sqlx::query_as::<_, Promotion>(
        "SELECT * FROM promotions
         WHERE code = $1 AND active = true AND (valid_until IS NULL OR valid_until > now())",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}
