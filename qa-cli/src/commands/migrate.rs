//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Create the questions/answers tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    let result = migrations::run(&pool)
        .await
        .context("Failed to run migrations");

    pool.close().await;
    result
}
