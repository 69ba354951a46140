//! HTTP server command
//!
//! Builds the store once (PostgreSQL with schema bootstrap, or in-memory)
//! and hands it to the server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use company_server::db::{self, pool::DEFAULT_MAX_CONNECTIONS};
use company_server::http::server::DEFAULT_ALLOWED_ORIGIN;
use company_server::{run_server, AppState, MemoryCompanyStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "COMPANY_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Keep companies in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// Browser origin allowed to make cross-origin calls
    #[arg(long, env = "COMPANY_ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            allowed_origin: self.allowed_origin.clone(),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let state = if args.memory {
        if args.database_url.is_some() {
            tracing::warn!("--memory given, ignoring DATABASE_URL");
        }
        tracing::warn!("Using in-memory store - data is lost on exit");
        AppState::new(MemoryCompanyStore::new())
    } else {
        let database_url = args.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env (or pass --memory)",
        )?;

        let repo = db::connect(database_url, args.max_connections)
            .await
            .context("Failed to connect to database")?;
        AppState::new(repo)
    };

    tracing::info!("Starting company server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
