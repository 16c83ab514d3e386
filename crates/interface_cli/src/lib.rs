//! Command-Line Interface
//!
//! The `gic` binary loads the customer registry from the configured data
//! directory, runs one subcommand against it and saves it back when the
//! command changed anything.
//!
//! ```text
//! gic seed
//! gic add premium --name "Ana Munoz" --email ana@x.com --phone 987654321 --address "Av 2 Valpo" --points 200
//! gic points redeem ana@x.com 50
//! gic stats
//! gic report
//! ```
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `GIC_DATA_DIR` | `datos` |
//! | `GIC_REPORTS_DIR` | `reportes` |
//! | `GIC_LOGS_DIR` | `logs` |
//! | `GIC_LOG_LEVEL` | `info` |
//!
//! `RUST_LOG` takes precedence over `GIC_LOG_LEVEL` for diagnostics.

pub mod app;
pub mod commands;
pub mod config;
pub mod sample;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use app::AppContext;
pub use commands::{Cli, Command};
pub use config::AppConfig;

/// Entry point of the `gic` binary
pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let mut ctx = AppContext::open(&config)?;
    let stdout = io::stdout();
    cli.execute(&mut ctx, &mut stdout.lock())
}

/// Installs the diagnostic subscriber, writing to stderr
///
/// `RUST_LOG` wins over `log_level`; an unparsable level falls back to `info`.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .try_init();
}
