use crate::models::DbReminder;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_reminder(
    pool: &Pool<Postgres>,
    medication_id: Uuid,
    remind_time: DateTime<Utc>,
    taken: bool,
) -> Result<DbReminder> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating reminder: id={}, medication_id={}, remind_time={}",
        id,
        medication_id,
        remind_time
    );

    let reminder = sqlx::query_as::<_, DbReminder>(
        r#"
        INSERT INTO reminders (id, medication_id, remind_time, taken, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, medication_id, remind_time, taken, created_at
        "#,
    )
    .bind(id)
    .bind(medication_id)
    .bind(remind_time)
    .bind(taken)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(reminder)
}

pub async fn get_reminders_by_medication_id(
    pool: &Pool<Postgres>,
    medication_id: Uuid,
) -> Result<Vec<DbReminder>> {
    let reminders = sqlx::query_as::<_, DbReminder>(
        r#"
        SELECT id, medication_id, remind_time, taken, created_at
        FROM reminders
        WHERE medication_id = $1
        ORDER BY remind_time ASC
        "#,
    )
    .bind(medication_id)
    .fetch_all(pool)
    .await?;

    Ok(reminders)
}

pub async fn get_reminder_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbReminder>> {
    let reminder = sqlx::query_as::<_, DbReminder>(
        r#"
        SELECT id, medication_id, remind_time, taken, created_at
        FROM reminders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(reminder)
}

/// Applies a partial update; absent fields keep their stored value.
/// Returns None when the id has no matching row.
pub async fn update_reminder(
    pool: &Pool<Postgres>,
    id: Uuid,
    remind_time: Option<DateTime<Utc>>,
    taken: Option<bool>,
) -> Result<Option<DbReminder>> {
    let Some(existing) = get_reminder_by_id(pool, id).await? else {
        return Ok(None);
    };

    let remind_time = remind_time.unwrap_or(existing.remind_time);
    let taken = taken.unwrap_or(existing.taken);

    let updated = sqlx::query_as::<_, DbReminder>(
        r#"
        UPDATE reminders
        SET remind_time = $2, taken = $3
        WHERE id = $1
        RETURNING id, medication_id, remind_time, taken, created_at
        "#,
    )
    .bind(id)
    .bind(remind_time)
    .bind(taken)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated))
}

/// Returns false when the id had no matching row.
pub async fn delete_reminder(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM reminders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
