//! Non-recursive directory listing.
//!
//! [`scan_dir`] returns a lazy, single-pass iterator over the direct children of a directory,
//! in whatever order the filesystem yields them. Every error carries the path it came from.

use std::{
    ffi::OsString,
    fs, io,
    path::{self, Path, PathBuf},
};

use thiserror::Error;

/// Error variants for directory scans.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The directory itself could not be opened.
    #[error("{}: read dir: {source}", .path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An entry could not be read while listing.
    #[error("{}: {source}", .path.display())]
    Entry {
        /// Entry path, or the directory when the entry name is unknown.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// A direct child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// File name of the entry.
    pub name: OsString,
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory. Symbolic links are not followed.
    pub is_dir: bool,
}

/// Iterator over the direct children of a directory, see [`scan_dir`].
#[derive(Debug)]
pub struct DirScan {
    dir: PathBuf,
    entries: fs::ReadDir,
}

/// Opens `dir` for listing.
pub fn scan_dir(dir: impl AsRef<Path>) -> Result<DirScan, ScanError> {
    let dir = dir.as_ref();
    let read_dir_err = |source: io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let dir = path::absolute(dir).map_err(read_dir_err)?;
    let entries = fs::read_dir(&dir).map_err(read_dir_err)?;
    Ok(DirScan { dir, entries })
}

impl DirScan {
    /// Directory being listed.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Iterator for DirScan {
    type Item = Result<ScannedEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.entries.next()? {
            Ok(entry) => entry,
            Err(source) => {
                return Some(Err(ScanError::Entry {
                    path: self.dir.clone(),
                    source,
                }));
            }
        };

        let path = entry.path();
        Some(match entry.file_type() {
            Ok(file_type) => Ok(ScannedEntry {
                name: entry.file_name(),
                path,
                is_dir: file_type.is_dir(),
            }),
            Err(source) => Err(ScanError::Entry { path, source }),
        })
    }
}
