//! Database migration runner for Scholar.
//!
//! Usage:
//!   scholar-migrator up      - Create the school schema
//!   scholar-migrator down    - Drop the school schema
//!   scholar-migrator status  - Show migration status
//!   scholar-migrator fresh   - Drop all tables and re-run migrations
//!
//! The connection string is read from `DATABASE_URL`.

use sea_orm_migration::prelude::*;
use scholar_db::migration::Migrator;

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Run the migrator CLI (it sets up its own tracing)
    cli::run_cli(Migrator).await;
}
