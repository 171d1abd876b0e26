use anyhow::Context;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::FoodRow;
use crate::nutrition::{FoodProfile, Macros, Micros};

pub const SEARCH_LIMIT: i64 = 5;
pub const TOP_LIMIT: i64 = 10;

const FOOD_COLUMNS: &str =
    "id, name, calories, protein, carbs, fat, micros, category, region";

/// Look up a single food.
pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<FoodProfile>> {
    let row = sqlx::query_as::<_, FoodRow>(&format!(
        "SELECT {FOOD_COLUMNS} FROM foods WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
    .with_context(|| format!("find food {id}"))?;
    Ok(row.map(FoodProfile::from))
}

/// Read access to food profiles by id.
#[async_trait]
pub trait FoodLookup: Send + Sync {
    async fn find_food(&self, id: Uuid) -> anyhow::Result<Option<FoodProfile>>;
}

#[async_trait]
impl FoodLookup for PgPool {
    async fn find_food(&self, id: Uuid) -> anyhow::Result<Option<FoodProfile>> {
        find_by_id(self, id).await
    }
}

/// Case-insensitive substring match on the food name.
pub async fn search_by_name(db: &PgPool, query: &str) -> anyhow::Result<Vec<FoodProfile>> {
    let rows = sqlx::query_as::<_, FoodRow>(&format!(
        r#"
        SELECT {FOOD_COLUMNS}
          FROM foods
         WHERE name ILIKE $1
         ORDER BY name
         LIMIT $2
        "#
    ))
    .bind(like_pattern(query))
    .bind(SEARCH_LIMIT)
    .fetch_all(db)
    .await
    .context("search foods by name")?;
    Ok(rows.into_iter().map(FoodProfile::from).collect())
}

/// Foods carrying exactly the `tag` category.
pub async fn top_by_category(db: &PgPool, tag: &str) -> anyhow::Result<Vec<FoodProfile>> {
    let rows = sqlx::query_as::<_, FoodRow>(&format!(
        r#"
        SELECT {FOOD_COLUMNS}
          FROM foods
         WHERE $1 = ANY(category)
         ORDER BY name
         LIMIT $2
        "#
    ))
    .bind(tag)
    .bind(TOP_LIMIT)
    .fetch_all(db)
    .await
    .context("list foods by category")?;
    Ok(rows.into_iter().map(FoodProfile::from).collect())
}

/// Catalog entry as supplied by the fixture loader; the id is assigned
/// by the database.
#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub calories: f64,
    pub macros: Macros,
    pub micros: Micros,
    pub category: Vec<String>,
    pub region: String,
}

/// Insert a food, or overwrite the one with the same name.
pub async fn upsert_tx(tx: &mut Transaction<'_, Postgres>, food: &NewFood) -> anyhow::Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO foods (name, calories, protein, carbs, fat, micros, category, region)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (name) DO UPDATE
           SET calories = EXCLUDED.calories,
               protein  = EXCLUDED.protein,
               carbs    = EXCLUDED.carbs,
               fat      = EXCLUDED.fat,
               micros   = EXCLUDED.micros,
               category = EXCLUDED.category,
               region   = EXCLUDED.region
        RETURNING id
        "#,
    )
    .bind(&food.name)
    .bind(food.calories)
    .bind(food.macros.protein)
    .bind(food.macros.carbs)
    .bind(food.macros.fat)
    .bind(Json(food.micros))
    .bind(&food.category)
    .bind(&food.region)
    .fetch_one(&mut **tx)
    .await
    .with_context(|| format!("upsert food {}", food.name))?;
    Ok(id)
}

pub async fn delete_all_tx(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<u64> {
    let done = sqlx::query("DELETE FROM foods")
        .execute(&mut **tx)
        .await
        .context("delete foods")?;
    Ok(done.rows_affected())
}

/// `%query%` with LIKE metacharacters escaped, so user input matches
/// literally.
fn like_pattern(query: &str) -> String {
    let mut out = String::with_capacity(query.len() + 2);
    out.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
