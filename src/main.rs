//! Paint Orders - HTTP entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌─────────────────┐    ┌────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ OrderRepository │───▶│ PostgreSQL │
//! │  (YAML)  │    │  (axum)  │    │  (Order Store)  │    │  (orders)  │
//! └──────────┘    └──────────┘    └─────────────────┘    └────────────┘
//! ```
//!
//! Flags: `--env <name>` (or `-e`, default `dev`) selects `config/<name>.yaml`,
//! `--port <port>` overrides the configured listen port.

use std::sync::Arc;

use anyhow::{Context, Result};

use paint_orders::config::AppConfig;
use paint_orders::db::Database;
use paint_orders::gateway::{self, handlers::health::VERSION, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = paint_orders::logging::init_logging(&app_config);

    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    tracing::info!(version = VERSION, "Starting Paint Orders in {} mode", env);

    let db = Database::connect(&app_config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if app_config.database.init_schema {
        db.init_schema()
            .await
            .context("Failed to initialize orders schema")?;
    }

    let state = Arc::new(AppState::new(Arc::new(db)));
    gateway::run_server(&app_config.gateway, state).await
}
