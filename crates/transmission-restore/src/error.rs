//! Top-level error of a restore run.

use std::path::PathBuf;

use thiserror::Error;

use transmission_restore_types::SubmitError;

use crate::{index::IndexError, mapping::MappingError};

/// Error variants for a restore run. Each wraps the failing step with its context.
#[derive(Error, Debug)]
pub enum Error {
    /// Transmission could not be reached or refused the session.
    #[error("error connecting to transmission: {0}")]
    Connect(#[source] SubmitError),

    /// The torrents directory could not be indexed.
    #[error("read torrent files of {}: {source}", .dir.display())]
    Index {
        /// Torrents directory.
        dir: PathBuf,
        /// Indexing error.
        source: IndexError,
    },

    /// A mapping failed part way through.
    #[error("error processing mapping {} -> {remote}: {source}", .local.display())]
    Mapping {
        /// Local root of the mapping.
        local: PathBuf,
        /// Remote root of the mapping.
        remote: String,
        /// Processing error.
        source: MappingError,
    },
}
