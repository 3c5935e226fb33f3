use crate::models::DbMedication;
use chrono::Utc;
use eyre::Result;
use meditrack_core::models::medication::{CreateMedicationRequest, UpdateMedicationRequest};
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const MEDICATION_COLUMNS: &str = "id, user_id, name, dose, frequency, effect, remind_times, \
                                  start_date, end_date, status, created_at";

/// Inserts a batch of medications inside a single transaction. The batch is
/// all-or-nothing: any insert failure rolls back every row.
pub async fn create_medications_batch(
    pool: &Pool<Postgres>,
    medications: &[CreateMedicationRequest],
) -> Result<Vec<DbMedication>> {
    let mut tx = pool.begin().await?;
    let mut created = Vec::with_capacity(medications.len());

    for medication in medications {
        let id = Uuid::new_v4();
        let now = Utc::now();

        tracing::debug!(
            "Inserting medication: id={}, user_id={}, name={}",
            id,
            medication.user_id,
            medication.name
        );

        let row = sqlx::query_as::<_, DbMedication>(
            r#"
            INSERT INTO medications
                (id, user_id, name, dose, frequency, effect, remind_times,
                 start_date, end_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, name, dose, frequency, effect, remind_times,
                      start_date, end_date, status, created_at
            "#,
        )
        .bind(id)
        .bind(&medication.user_id)
        .bind(&medication.name)
        .bind(&medication.dose)
        .bind(&medication.frequency)
        .bind(&medication.effect)
        .bind(Json(medication.remind_times.clone()))
        .bind(medication.start_date)
        .bind(medication.end_date)
        .bind(medication.status.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        created.push(row);
    }

    tx.commit().await?;

    tracing::debug!("Batch insert committed: {} medications", created.len());
    Ok(created)
}

pub async fn list_medications_by_user(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Vec<DbMedication>> {
    let medications = sqlx::query_as::<_, DbMedication>(&format!(
        "SELECT {MEDICATION_COLUMNS} FROM medications WHERE user_id = $1 ORDER BY created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(medications)
}

/// Medications whose status is "in progress" only. Interaction analysis
/// runs over exactly this set.
pub async fn list_active_medications_by_user(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Vec<DbMedication>> {
    let medications = sqlx::query_as::<_, DbMedication>(&format!(
        "SELECT {MEDICATION_COLUMNS} FROM medications \
         WHERE user_id = $1 AND status = 'in progress' ORDER BY created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(medications)
}

pub async fn get_medication_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbMedication>> {
    let medication = sqlx::query_as::<_, DbMedication>(&format!(
        "SELECT {MEDICATION_COLUMNS} FROM medications WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(medication)
}

/// Applies a partial update: fields absent from the patch keep their stored
/// value. Returns None when the id has no matching row.
pub async fn update_medication(
    pool: &Pool<Postgres>,
    id: Uuid,
    patch: &UpdateMedicationRequest,
) -> Result<Option<DbMedication>> {
    let Some(existing) = get_medication_by_id(pool, id).await? else {
        return Ok(None);
    };

    let name = patch.name.as_deref().unwrap_or(&existing.name);
    let dose = patch.dose.as_deref().unwrap_or(&existing.dose);
    let frequency = patch.frequency.as_deref().unwrap_or(&existing.frequency);
    let effect = patch.effect.as_deref().unwrap_or(&existing.effect);
    let remind_times = patch
        .remind_times
        .clone()
        .unwrap_or_else(|| existing.remind_times.0.clone());
    let start_date = patch.start_date.or(existing.start_date);
    let end_date = patch.end_date.or(existing.end_date);
    let status = patch
        .status
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| existing.status.clone());

    let updated = sqlx::query_as::<_, DbMedication>(
        r#"
        UPDATE medications
        SET name = $2, dose = $3, frequency = $4, effect = $5,
            remind_times = $6, start_date = $7, end_date = $8, status = $9
        WHERE id = $1
        RETURNING id, user_id, name, dose, frequency, effect, remind_times,
                  start_date, end_date, status, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(dose)
    .bind(frequency)
    .bind(effect)
    .bind(Json(remind_times))
    .bind(start_date)
    .bind(end_date)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated))
}

/// Returns false when the id had no matching row. Reminders referencing the
/// deleted medication are left in place.
pub async fn delete_medication(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
