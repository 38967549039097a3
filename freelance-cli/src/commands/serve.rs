//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use freelance_server::db::migrations;
use freelance_server::{run_server, Database};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Config file (default: ~/.freelance/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Address to bind to (overrides config, default: 127.0.0.1:8080)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the schema before serving
    #[arg(long)]
    pub migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref(), args.database_url)?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }

    let db = Database::open(&config.database)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        migrations::run(&db).await.context("Failed to run migrations")?;
    }

    tracing::info!(bind = %config.server.bind_addr, "starting freelance server");

    // Blocks until shutdown
    run_server(db, config.server).await.context("Server error")?;

    Ok(())
}
