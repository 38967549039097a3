//! Schema setup command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use freelance_server::db::migrations;
use freelance_server::Database;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Config file (default: ~/.freelance/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), args.database_url)?;

    let db = Database::open(&config.database)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&db).await.context("Failed to run migrations")?;
    db.close().await;

    tracing::info!("schema is up to date");
    Ok(())
}
