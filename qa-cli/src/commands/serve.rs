//! HTTP server command
//!
//! Creates the database pool, applies the schema, serves the API, and
//! closes the pool once the server stops (including on error).

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::{create_pool_with_options, migrations};
use qa_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Don't create tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Keep data in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting qa-service on {}", config.bind_addr);

    if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on exit");
        return run_server(AppState::in_memory(), config)
            .await
            .context("Server error");
    }

    let database_url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL not set. Set via --database-url or DATABASE_URL env")?;

    let pool = create_pool_with_options(database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let result = async {
        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        run_server(AppState::from_pool(pool.clone()), config)
            .await
            .context("Server error")
    }
    .await;

    pool.close().await;
    tracing::info!("Database pool closed");

    result
}
