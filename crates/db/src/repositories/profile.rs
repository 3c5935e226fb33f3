use crate::models::DbUserProfile;
use chrono::Utc;
use eyre::Result;
use meditrack_core::models::profile::UpdateUserProfileRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_profile_by_user_id(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Option<DbUserProfile>> {
    let profile = sqlx::query_as::<_, DbUserProfile>(
        r#"
        SELECT * FROM user_profiles WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Fetches the profile, creating an all-false default row when none exists.
pub async fn get_or_create_profile(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<DbUserProfile> {
    if let Some(profile) = get_profile_by_user_id(pool, user_id).await? {
        return Ok(profile);
    }

    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating default profile for user {}", user_id);

    let profile = sqlx::query_as::<_, DbUserProfile>(
        r#"
        INSERT INTO user_profiles (id, user_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

/// Applies a partial update over the flag set; absent flags keep their
/// stored value. Creates the default row first when none exists.
pub async fn update_profile(
    pool: &Pool<Postgres>,
    user_id: &str,
    patch: &UpdateUserProfileRequest,
) -> Result<DbUserProfile> {
    let existing = get_or_create_profile(pool, user_id).await?;
    let now = Utc::now();

    let updated = sqlx::query_as::<_, DbUserProfile>(
        r#"
        UPDATE user_profiles SET
            diet_alcohol = $2, diet_caffeine = $3, diet_grapefruit = $4,
            diet_milk = $5, diet_high_fat = $6, diet_high_vitamin_k = $7,
            diet_tyramine = $8,
            supp_st_johns_wort = $9, supp_ginkgo = $10, supp_ginseng = $11,
            supp_garlic = $12, supp_grape_seed = $13, supp_fish_oil = $14,
            supp_omega3 = $15, supp_licorice = $16, supp_red_yeast_rice = $17,
            history_asthma = $18, history_diabetes = $19,
            history_hypertension = $20, history_liver_dysfunction = $21,
            history_kidney_dysfunction = $22, history_gastric_ulcer = $23,
            history_epilepsy = $24, history_arrhythmia = $25,
            condition_pregnancy = $26, condition_breastfeeding = $27,
            condition_infant = $28, condition_elderly = $29,
            condition_obesity = $30,
            updated_at = $31
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(patch.diet_alcohol.unwrap_or(existing.diet_alcohol))
    .bind(patch.diet_caffeine.unwrap_or(existing.diet_caffeine))
    .bind(patch.diet_grapefruit.unwrap_or(existing.diet_grapefruit))
    .bind(patch.diet_milk.unwrap_or(existing.diet_milk))
    .bind(patch.diet_high_fat.unwrap_or(existing.diet_high_fat))
    .bind(patch.diet_high_vitamin_k.unwrap_or(existing.diet_high_vitamin_k))
    .bind(patch.diet_tyramine.unwrap_or(existing.diet_tyramine))
    .bind(patch.supp_st_johns_wort.unwrap_or(existing.supp_st_johns_wort))
    .bind(patch.supp_ginkgo.unwrap_or(existing.supp_ginkgo))
    .bind(patch.supp_ginseng.unwrap_or(existing.supp_ginseng))
    .bind(patch.supp_garlic.unwrap_or(existing.supp_garlic))
    .bind(patch.supp_grape_seed.unwrap_or(existing.supp_grape_seed))
    .bind(patch.supp_fish_oil.unwrap_or(existing.supp_fish_oil))
    .bind(patch.supp_omega3.unwrap_or(existing.supp_omega3))
    .bind(patch.supp_licorice.unwrap_or(existing.supp_licorice))
    .bind(patch.supp_red_yeast_rice.unwrap_or(existing.supp_red_yeast_rice))
    .bind(patch.history_asthma.unwrap_or(existing.history_asthma))
    .bind(patch.history_diabetes.unwrap_or(existing.history_diabetes))
    .bind(patch.history_hypertension.unwrap_or(existing.history_hypertension))
    .bind(
        patch
            .history_liver_dysfunction
            .unwrap_or(existing.history_liver_dysfunction),
    )
    .bind(
        patch
            .history_kidney_dysfunction
            .unwrap_or(existing.history_kidney_dysfunction),
    )
    .bind(patch.history_gastric_ulcer.unwrap_or(existing.history_gastric_ulcer))
    .bind(patch.history_epilepsy.unwrap_or(existing.history_epilepsy))
    .bind(patch.history_arrhythmia.unwrap_or(existing.history_arrhythmia))
    .bind(patch.condition_pregnancy.unwrap_or(existing.condition_pregnancy))
    .bind(
        patch
            .condition_breastfeeding
            .unwrap_or(existing.condition_breastfeeding),
    )
    .bind(patch.condition_infant.unwrap_or(existing.condition_infant))
    .bind(patch.condition_elderly.unwrap_or(existing.condition_elderly))
    .bind(patch.condition_obesity.unwrap_or(existing.condition_obesity))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Returns false when the user had no profile row.
pub async fn delete_profile(pool: &Pool<Postgres>, user_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
