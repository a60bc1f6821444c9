//! Command line and run configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use thiserror::Error;

use transmission_restore_controller::Credentials;

use crate::mapping::PathMapping;

/// Port Transmission listens on for RPC unless told otherwise.
pub const DEFAULT_RPC_PORT: u16 = 9091;

/// Error variants for configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A mapping is not of the form `<local>;<remote>`.
    #[error("invalid mapping {0:?}, expected <local>;<remote>")]
    InvalidMapping(String),
}

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the .torrent files to restore.
    #[arg(long, env = "TRANSMISSION_RESTORE_TORRENTS_PATH")]
    pub torrents_path: PathBuf,

    /// Transmission RPC host.
    #[arg(long, env = "TRANSMISSION_RESTORE_HOST", default_value = "localhost")]
    pub transmission_host: String,

    /// Transmission RPC port, 0 selects the default port.
    #[arg(long, env = "TRANSMISSION_RESTORE_PORT", default_value_t = DEFAULT_RPC_PORT)]
    pub transmission_port: u16,

    /// Transmission RPC username.
    #[arg(long, env = "TRANSMISSION_RESTORE_USERNAME")]
    pub transmission_username: Option<String>,

    /// Transmission RPC password.
    #[arg(long, env = "TRANSMISSION_RESTORE_PASSWORD", hide_env_values = true)]
    pub transmission_password: Option<String>,

    /// Talk to Transmission over https.
    #[arg(long, env = "TRANSMISSION_RESTORE_HTTPS", default_value_t = false)]
    pub transmission_https: bool,

    /// Local to Transmission directory mapping as `<local>;<remote>`, repeatable.
    #[arg(long = "mapping")]
    pub mappings: Vec<PathMapping>,

    /// Only log what would be added. Transmission is not contacted.
    #[arg(long, env = "TRANSMISSION_RESTORE_DRY_RUN", default_value_t = false)]
    pub dry_run: bool,

    /// Seconds to wait between two additions.
    #[arg(long, env = "TRANSMISSION_RESTORE_WAIT_SECS", default_value_t = 0)]
    pub wait_secs: u64,
}

/// Connection settings for the Transmission daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// RPC host.
    pub host: String,
    /// RPC port.
    pub port: u16,
    /// Use https instead of http.
    pub https: bool,
    /// Basic auth username; no auth is sent without one.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
}

impl BackendConfig {
    /// The RPC endpoint, `{scheme}://{host}:{port}/transmission/rpc`.
    pub fn rpc_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        let port = if self.port == 0 {
            DEFAULT_RPC_PORT
        } else {
            self.port
        };
        format!("{scheme}://{}:{port}/transmission/rpc", self.host)
    }

    /// Credentials to authenticate with, if a username is set.
    pub fn credentials(&self) -> Option<Credentials> {
        self.username.as_ref().map(|username| Credentials {
            username: username.clone(),
            password: self.password.clone().unwrap_or_default(),
        })
    }
}

/// Everything a restore run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the .torrent files.
    pub torrents_path: PathBuf,
    /// Transmission connection settings.
    pub backend: BackendConfig,
    /// Mappings, processed in this order.
    pub mappings: Vec<PathMapping>,
    /// Only log matches, submit nothing.
    pub dry_run: bool,
    /// Pause between two submissions.
    pub wait: Duration,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            torrents_path: cli.torrents_path,
            backend: BackendConfig {
                host: cli.transmission_host,
                port: cli.transmission_port,
                https: cli.transmission_https,
                username: cli.transmission_username,
                password: cli.transmission_password,
            },
            mappings: cli.mappings,
            dry_run: cli.dry_run,
            wait: Duration::from_secs(cli.wait_secs),
        }
    }
}
