//! In-memory index of torrent files keyed by their declared name.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    metainfo::{Metainfo, MetainfoError},
    scan::{ScanError, scan_dir},
};

/// Error variants for [`build_index`].
#[derive(Error, Debug)]
pub enum IndexError {
    /// Listing the torrents directory failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A torrent file could not be read.
    #[error("{}: read file: {source}", .path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A torrent file could not be decoded.
    #[error("{}: {source}", .path.display())]
    Decode {
        /// File being decoded.
        path: PathBuf,
        /// Decoding error.
        source: MetainfoError,
    },
}

/// A parsed torrent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentRecord {
    name: String,
    raw: Vec<u8>,
    source: PathBuf,
}

impl TorrentRecord {
    /// Declared content name, the index key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file content exactly as read from disk.
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Path of the file the record was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Torrent records keyed by declared name. Read-only once built.
#[derive(Debug, Default)]
pub struct TorrentIndex {
    records: HashMap<String, TorrentRecord>,
}

impl TorrentIndex {
    /// Looks up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&TorrentRecord> {
        self.records.get(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no torrent was indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, replacing and returning any record with the same name.
    fn insert(&mut self, record: TorrentRecord) -> Option<TorrentRecord> {
        self.records.insert(record.name.clone(), record)
    }
}

/// Reads and indexes every file directly inside `dir`.
///
/// Subdirectories are skipped. The first unreadable or undecodable file aborts the whole
/// operation. When two files declare the same name, the one listed later replaces the
/// earlier one.
pub fn build_index(dir: impl AsRef<Path>) -> Result<TorrentIndex, IndexError> {
    let mut index = TorrentIndex::default();

    for entry in scan_dir(dir)? {
        let entry = entry?;
        if entry.is_dir {
            continue;
        }

        let raw = fs::read(&entry.path).map_err(|source| IndexError::Read {
            path: entry.path.clone(),
            source,
        })?;
        let metainfo = Metainfo::from_bytes(&raw).map_err(|source| IndexError::Decode {
            path: entry.path.clone(),
            source,
        })?;
        debug!(
            name = %metainfo.info.name,
            files = metainfo.file_count(),
            announce = %metainfo.announce_lossy(),
            "parsed {}",
            entry.path.display()
        );

        let record = TorrentRecord {
            name: metainfo.info.name,
            raw,
            source: entry.path,
        };
        if let Some(replaced) = index.insert(record) {
            warn!(
                name = %replaced.name,
                replaced = %replaced.source.display(),
                "duplicate torrent name, keeping the file read last"
            );
        }
    }

    info!("parsed {} torrent files", index.len());
    Ok(index)
}
