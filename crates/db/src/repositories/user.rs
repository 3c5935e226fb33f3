use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    platform_user_id: &str,
    name: Option<&str>,
    timezone: Option<&str>,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating user: id={}, platform_user_id={}",
        id,
        platform_user_id
    );

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, platform_user_id, name, timezone, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, platform_user_id, name, timezone, created_at
        "#,
    )
    .bind(id)
    .bind(platform_user_id)
    .bind(name)
    .bind(timezone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_platform_id(
    pool: &Pool<Postgres>,
    platform_user_id: &str,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, platform_user_id, name, timezone, created_at
        FROM users
        WHERE platform_user_id = $1
        "#,
    )
    .bind(platform_user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_user(
    pool: &Pool<Postgres>,
    platform_user_id: &str,
    name: Option<&str>,
    timezone: Option<&str>,
) -> Result<Option<DbUser>> {
    let Some(user) = get_user_by_platform_id(pool, platform_user_id).await? else {
        return Ok(None);
    };

    let name = name.or(user.name.as_deref());
    let timezone = timezone.or(user.timezone.as_deref());

    let updated_user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET name = $2, timezone = $3
        WHERE platform_user_id = $1
        RETURNING id, platform_user_id, name, timezone, created_at
        "#,
    )
    .bind(platform_user_id)
    .bind(name)
    .bind(timezone)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated_user))
}
