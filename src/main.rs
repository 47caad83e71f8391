//! Meals frontend server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────────────────────────┐
//!     ──────────────────────▶│  http::server (axum router + middleware) │
//!                            │      │                    │              │
//!                            │      ▼                    ▼              │
//!                            │  pages (loaders)      api (passthrough)  │
//!                            │      │                    │              │
//!                            │      └──── session ───────┘              │
//!                            │               │ Cookie: token=...        │
//!                            │               ▼                          │
//!                            │        backend::client ──────────────────┼──▶ Meals API
//!                            └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use meals_frontend::config::load_config;
use meals_frontend::lifecycle::{launch, signals, Shutdown};
use meals_frontend::observability::logging;

#[derive(Parser)]
#[command(name = "meals-frontend")]
#[command(about = "Server-side data layer for the meals web app", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init(&config.observability);

    tracing::info!("meals-frontend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        fallback_emails = config.emails.fallback.len(),
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let running = launch(config, &shutdown).await?;
    signals::spawn_handler(shutdown.clone());

    running.handle.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
