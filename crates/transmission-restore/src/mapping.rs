//! Matching local directory entries against the index and submitting them.

use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, trace};

use transmission_restore_types::{SubmissionRequest, SubmitError, TorrentSubmitter};

use crate::{
    config::ConfigError,
    index::TorrentIndex,
    pacer::Pacer,
    scan::{ScanError, scan_dir},
};

/// Error variants for [`MappingProcessor::apply`].
#[derive(Error, Debug)]
pub enum MappingError {
    /// Listing the local directory failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The backend rejected or never received a submission.
    #[error("{}: {source}", .path.display())]
    Submit {
        /// Local entry that matched.
        path: PathBuf,
        /// Submission error.
        source: SubmitError,
    },
}

/// A local directory and the path the backend sees for the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// Directory on this host holding the content.
    pub local: PathBuf,
    /// The same directory as seen by the backend.
    pub remote: String,
}

impl FromStr for PathMapping {
    type Err = ConfigError;

    /// Parses `<local>;<remote>`, splitting on the first `;`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(';') {
            Some((local, remote)) if !local.is_empty() && !remote.is_empty() => Ok(Self {
                local: PathBuf::from(local),
                remote: remote.to_string(),
            }),
            _ => Err(ConfigError::InvalidMapping(s.to_string())),
        }
    }
}

impl fmt::Display for PathMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.local, self.remote)
    }
}

/// Outcome of one mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingReport {
    /// Local entries found in the index.
    pub matched: usize,
    /// Entries actually submitted; zero on a dry run.
    pub submitted: usize,
}

/// Applies mappings against a built index, one after the other.
#[allow(missing_debug_implementations)]
pub struct MappingProcessor<'a, S> {
    index: &'a TorrentIndex,
    submitter: &'a mut S,
    pacer: Pacer,
    dry_run: bool,
}

impl<'a, S: TorrentSubmitter> MappingProcessor<'a, S> {
    /// Creates a processor. On a dry run matches are only logged.
    pub fn new(
        index: &'a TorrentIndex,
        submitter: &'a mut S,
        dry_run: bool,
        wait: Duration,
    ) -> Self {
        Self {
            index,
            submitter,
            pacer: Pacer::new(wait),
            dry_run,
        }
    }

    /// Submits every direct child of `mapping.local` whose name is an index key, with
    /// `mapping.remote` as its download directory. Stops at the first error.
    pub async fn apply(&mut self, mapping: &PathMapping) -> Result<MappingReport, MappingError> {
        let mut report = MappingReport::default();

        for entry in scan_dir(&mapping.local)? {
            let entry = entry?;
            let Some(record) = entry.name.to_str().and_then(|name| self.index.get(name)) else {
                trace!("no torrent for {}", entry.path.display());
                continue;
            };
            report.matched += 1;

            info!(
                name = record.name(),
                local = %mapping.local.display(),
                remote = %mapping.remote,
                len = record.raw_bytes().len(),
                dry_run = self.dry_run,
                "adding torrent to transmission"
            );
            if self.dry_run {
                continue;
            }

            self.pacer.ready().await;
            self.submitter
                .submit(SubmissionRequest {
                    metainfo: record.raw_bytes(),
                    download_dir: &mapping.remote,
                    paused: true,
                })
                .await
                .map_err(|source| MappingError::Submit {
                    path: entry.path.clone(),
                    source,
                })?;
            report.submitted += 1;
        }

        info!(
            matched = report.matched,
            submitted = report.submitted,
            "processed mapping {mapping}"
        );
        Ok(report)
    }
}
