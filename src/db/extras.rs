use sqlx::PgPool;

use crate::models::Extra;

pub async fn list_active(pool: &PgPool) -> Result<Vec<Extra>, sqlx::Error> {
    sqlx::query_as::<_, Extra>("SELECT * FROM extras WHERE active = true ORDER BY name ASC")
        .fetch_all(pool)
        .await
}
