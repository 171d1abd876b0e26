//! Food catalog fixture loader.
//!
//! Usage:
//! ```bash
//! # Upsert the built-in foods (uses DATABASE_URL from environment)
//! cargo run --bin seed-foods
//!
//! # Empty the catalog first
//! cargo run --bin seed-foods -- --reset
//! ```

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use nutrimeter::{seed, telemetry};

#[derive(Parser)]
#[command(name = "seed-foods", about = "Load the built-in food catalog")]
struct SeedArgs {
    /// Database URL override
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Delete every food before loading
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let args = SeedArgs::parse();
    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect(&args.database_url)
        .await
        .context("connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .context("run migrations")?;

    let report = seed::load_foods(&db, &seed::default_foods(), args.reset).await?;
    info!(removed = report.removed, upserted = report.upserted, "food catalog seeded");
    Ok(())
}
