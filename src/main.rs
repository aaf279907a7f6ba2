//! avg — a sliding-window running average calculator.
//!
//! Run with:  `RUST_LOG=debug avg`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("avg v{} starting", env!("CARGO_PKG_VERSION"));

    avg_ui::run().map_err(Into::into)
}
