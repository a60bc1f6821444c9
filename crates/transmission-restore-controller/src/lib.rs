//! # Torrent submission using Transmission RPC.
//!
//! usage:
//!
//! ```rust,ignore
//! use transmission_restore_controller::TransmissionClient;
//! use transmission_restore_types::{SubmissionRequest, TorrentSubmitter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metainfo = std::fs::read("path/to/file.torrent")?;
//!     let mut client =
//!         TransmissionClient::try_new("http://localhost:9091/transmission/rpc", None).await?;
//!     client
//!         .submit(SubmissionRequest {
//!             metainfo: &metainfo,
//!             download_dir: "/path/to/download/dir",
//!             paused: true,
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!

mod client;
mod conversions;
mod ops;
#[cfg(test)]
mod testutil;

pub use client::{Credentials, TransmissionClient};

#[cfg(test)]
use tracing_subscriber as _;
