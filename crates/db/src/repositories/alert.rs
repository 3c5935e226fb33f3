use crate::models::DbAlert;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Appends one analysis record. Alert rows are never updated afterwards.
pub async fn create_alert(
    pool: &Pool<Postgres>,
    user_id: &str,
    result: serde_json::Value,
) -> Result<DbAlert> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let alert = sqlx::query_as::<_, DbAlert>(
        r#"
        INSERT INTO alerts (id, user_id, alert_time, result)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, alert_time, result
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(now)
    .bind(result)
    .fetch_one(pool)
    .await?;

    Ok(alert)
}

pub async fn get_alerts_by_user_id(pool: &Pool<Postgres>, user_id: &str) -> Result<Vec<DbAlert>> {
    let alerts = sqlx::query_as::<_, DbAlert>(
        r#"
        SELECT id, user_id, alert_time, result
        FROM alerts
        WHERE user_id = $1
        ORDER BY alert_time DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}
