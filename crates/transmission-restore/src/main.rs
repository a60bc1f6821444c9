//! # Transmission Restore
//!
//! ## Usage
//!
//! ```sh,ignore
//! cargo run --release --bin transmission-restore -- \
//!     --torrents-path /var/lib/torrents \
//!     --transmission-host nas.local \
//!     --mapping '/data/old;/data/new' \
//!     --wait-secs 2 \
//!     --dry-run
//! ```

use clap::Parser;
use serde as _;
use serde_bencode as _;
use serde_bytes as _;
use thiserror as _;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use transmission_restore_types as _;

#[cfg(test)]
use {tempfile as _, test_log as _};

use transmission_restore::{Cli, Config, Error, connect, run};
use transmission_restore_controller as _;

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to Transmission and runs the restore.
async fn restore(config: &Config) -> Result<(), Error> {
    let mut client = connect(config).await?;

    let report = run(config, &mut client).await?;
    let (matched, submitted) = report
        .mappings
        .iter()
        .fold((0, 0), |(m, s), r| (m + r.matched, s + r.submitted));
    info!(
        indexed = report.indexed,
        matched, submitted, "restore finished"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from(Cli::parse());
    if let Err(e) = restore(&config).await {
        error!("{e}");
        return Err(e.into());
    }

    Ok(())
}
