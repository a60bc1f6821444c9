//! # Transmission Restore Types
//!
//! This crate defines the submission contract shared between the restore logic and the
//! download backend client.

use std::fmt;

use thiserror::Error;

/// Error type for submissions to a download backend.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Network-related errors (connection failures, timeouts, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered the call but rejected it
    #[error("server error: {0}")]
    ServerError(String),

    /// The backend address could not be built from the configuration
    #[error("invalid rpc url: {0}")]
    InvalidUrl(String),
}

/// A single torrent registration, built per match and dropped after the call.
///
/// The metainfo is the untouched content of the torrent file; the backend parses it itself.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SubmissionRequest<'a> {
    /// Raw bytes of the torrent-definition file.
    pub metainfo: &'a [u8],
    /// Directory, as seen by the backend, holding the torrent's data.
    pub download_dir: &'a str,
    /// Whether the torrent is added in the paused state.
    pub paused: bool,
}

impl fmt::Debug for SubmissionRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionRequest")
            .field("metainfo_len", &self.metainfo.len())
            .field("download_dir", &self.download_dir)
            .field("paused", &self.paused)
            .finish()
    }
}

/// TorrentSubmitter defines the interface for registering torrents with a download backend.
#[allow(async_fn_in_trait)]
pub trait TorrentSubmitter {
    /// Register a torrent with the backend. Returns once the backend accepted it.
    async fn submit(&mut self, request: SubmissionRequest<'_>) -> Result<(), SubmitError>;
}
