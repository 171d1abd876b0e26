use anyhow::Context;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::{dto::HistoryRecord, repo_types::HistoryRow};

/// Append a record to the user's history.
pub async fn append(db: &PgPool, user_id: Uuid, record: &HistoryRecord) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO history_records (user_id, recorded_at, meals, totals, status)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(user_id)
    .bind(record.date)
    .bind(Json(&record.meals))
    .bind(Json(&record.totals))
    .bind(Json(&record.status))
    .execute(db)
    .await
    .with_context(|| format!("append history for user {user_id}"))?;
    Ok(())
}

/// Every record of the user, in the order they were appended.
pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<HistoryRecord>> {
    let rows = sqlx::query_as::<_, HistoryRow>(
        r#"
        SELECT recorded_at, meals, totals, status
          FROM history_records
         WHERE user_id = $1
         ORDER BY seq ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .with_context(|| format!("list history for user {user_id}"))?;

    Ok(rows.into_iter().map(HistoryRecord::from).collect())
}
