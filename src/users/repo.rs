use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::User;

impl User {
    pub async fn exists(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(db)
            .await
            .with_context(|| format!("check user {id}"))?;
        Ok(found)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    pub async fn create(db: &PgPool, username: &str, email: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(db)
        .await
        .context("create user")?;
        Ok(user)
    }
}
