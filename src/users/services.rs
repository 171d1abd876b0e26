use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::User;
use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// True when `err` wraps a Postgres unique-constraint violation (`23505`).
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db)) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// Fails with a client-visible not-found when the user does not exist.
pub async fn require_user(db: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    if User::exists(db, user_id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("User not found"))
    }
}
