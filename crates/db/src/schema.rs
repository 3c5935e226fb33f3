use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            platform_user_id VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(255) NULL,
            timezone VARCHAR(64) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create medications table. user_id carries the external platform
    // identifier and is intentionally not a foreign key: medication rows may
    // be created before the owning user row exists.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS medications (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            dose VARCHAR(255) NOT NULL DEFAULT '',
            frequency VARCHAR(255) NOT NULL DEFAULT '',
            effect VARCHAR(255) NOT NULL DEFAULT '',
            remind_times JSONB NOT NULL DEFAULT '[]',
            start_date DATE NULL,
            end_date DATE NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'in progress',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create user_profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profiles (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id VARCHAR(255) NOT NULL UNIQUE,
            diet_alcohol BOOLEAN NOT NULL DEFAULT FALSE,
            diet_caffeine BOOLEAN NOT NULL DEFAULT FALSE,
            diet_grapefruit BOOLEAN NOT NULL DEFAULT FALSE,
            diet_milk BOOLEAN NOT NULL DEFAULT FALSE,
            diet_high_fat BOOLEAN NOT NULL DEFAULT FALSE,
            diet_high_vitamin_k BOOLEAN NOT NULL DEFAULT FALSE,
            diet_tyramine BOOLEAN NOT NULL DEFAULT FALSE,
            supp_st_johns_wort BOOLEAN NOT NULL DEFAULT FALSE,
            supp_ginkgo BOOLEAN NOT NULL DEFAULT FALSE,
            supp_ginseng BOOLEAN NOT NULL DEFAULT FALSE,
            supp_garlic BOOLEAN NOT NULL DEFAULT FALSE,
            supp_grape_seed BOOLEAN NOT NULL DEFAULT FALSE,
            supp_fish_oil BOOLEAN NOT NULL DEFAULT FALSE,
            supp_omega3 BOOLEAN NOT NULL DEFAULT FALSE,
            supp_licorice BOOLEAN NOT NULL DEFAULT FALSE,
            supp_red_yeast_rice BOOLEAN NOT NULL DEFAULT FALSE,
            history_asthma BOOLEAN NOT NULL DEFAULT FALSE,
            history_diabetes BOOLEAN NOT NULL DEFAULT FALSE,
            history_hypertension BOOLEAN NOT NULL DEFAULT FALSE,
            history_liver_dysfunction BOOLEAN NOT NULL DEFAULT FALSE,
            history_kidney_dysfunction BOOLEAN NOT NULL DEFAULT FALSE,
            history_gastric_ulcer BOOLEAN NOT NULL DEFAULT FALSE,
            history_epilepsy BOOLEAN NOT NULL DEFAULT FALSE,
            history_arrhythmia BOOLEAN NOT NULL DEFAULT FALSE,
            condition_pregnancy BOOLEAN NOT NULL DEFAULT FALSE,
            condition_breastfeeding BOOLEAN NOT NULL DEFAULT FALSE,
            condition_infant BOOLEAN NOT NULL DEFAULT FALSE,
            condition_elderly BOOLEAN NOT NULL DEFAULT FALSE,
            condition_obesity BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reminders table. medication_id is not a foreign key; reminders
    // outlive their medication and orphans are tolerated.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reminders (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            medication_id UUID NOT NULL,
            remind_time TIMESTAMP WITH TIME ZONE NOT NULL,
            taken BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create alerts table (append-only analysis log)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alerts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id VARCHAR(255) NOT NULL,
            alert_time TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            result JSONB NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_medications_user_id ON medications(user_id);
        CREATE INDEX IF NOT EXISTS idx_medications_status ON medications(status);
        CREATE INDEX IF NOT EXISTS idx_reminders_medication_id ON reminders(medication_id);
        CREATE INDEX IF NOT EXISTS idx_reminders_remind_time ON reminders(remind_time);
        CREATE INDEX IF NOT EXISTS idx_alerts_user_id ON alerts(user_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
