//! # Transmission Restore
//!
//! Re-registers torrents with Transmission after their data moved. Every `.torrent` file of a
//! directory is indexed by the name it declares; then, for each `<local>;<remote>` mapping,
//! the direct children of `local` whose names are in the index are added to Transmission,
//! paused, with `remote` as their download directory.
//!
//! ## Example
//!
//! ```rust,ignore
//! use transmission_restore::{Config, connect, run};
//!
//! async fn restore(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = connect(config).await?;
//!     let report = run(config, &mut client).await?;
//!     println!("{report:?}");
//!     Ok(())
//! }
//! ```

use dotenvy as _;
use tracing::info;
use tracing_subscriber as _;

use transmission_restore_controller::TransmissionClient;
use transmission_restore_types::TorrentSubmitter;

pub mod config;
pub mod error;
pub mod index;
pub mod mapping;
pub mod metainfo;
pub mod pacer;
pub mod scan;
#[cfg(test)]
mod testutil;

pub use config::{BackendConfig, Cli, Config, ConfigError};
pub use error::Error;
pub use index::{TorrentIndex, TorrentRecord, build_index};
pub use mapping::{MappingProcessor, MappingReport, PathMapping};

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Distinct torrent names indexed.
    pub indexed: usize,
    /// One report per mapping, in configuration order.
    pub mappings: Vec<MappingReport>,
}

/// Builds the Transmission client for `config`.
///
/// A real run checks the daemon is reachable before anything else happens. A dry run never
/// submits, so it never contacts the daemon and works offline.
pub async fn connect(config: &Config) -> Result<TransmissionClient, Error> {
    let rpc_url = config.backend.rpc_url();
    let credentials = config.backend.credentials();
    let client = if config.dry_run {
        TransmissionClient::new(&rpc_url, credentials)
    } else {
        TransmissionClient::try_new(&rpc_url, credentials).await
    };
    client.map_err(Error::Connect)
}

/// Indexes `config.torrents_path`, then applies every mapping in order through `submitter`.
///
/// Stops at the first error; mappings completed before it are not undone.
pub async fn run<S: TorrentSubmitter>(
    config: &Config,
    submitter: &mut S,
) -> Result<RunReport, Error> {
    let index = build_index(&config.torrents_path).map_err(|source| Error::Index {
        dir: config.torrents_path.clone(),
        source,
    })?;
    info!("using {} mappings", config.mappings.len());
    if config.dry_run {
        info!("dry run, nothing will be added to transmission");
    }

    let mut processor = MappingProcessor::new(&index, submitter, config.dry_run, config.wait);
    let mut report = RunReport {
        indexed: index.len(),
        mappings: Vec::with_capacity(config.mappings.len()),
    };
    for mapping in &config.mappings {
        let mapped = processor
            .apply(mapping)
            .await
            .map_err(|source| Error::Mapping {
                local: mapping.local.clone(),
                remote: mapping.remote.clone(),
                source,
            })?;
        report.mappings.push(mapped);
    }

    Ok(report)
}
