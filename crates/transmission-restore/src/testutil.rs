//! Shared test fixtures.

use std::{fs, path::Path};

use transmission_restore_types::{SubmissionRequest, SubmitError, TorrentSubmitter};

/// Bencoded string.
fn bstr(s: &str) -> String {
    format!("{}:{}", s.len(), s)
}

/// A well-formed single-file torrent declaring `name`.
pub(crate) fn torrent_bytes(name: &str) -> Vec<u8> {
    format!(
        "d{}{}{}d{}i5e{}{}{}i16384e{}{}ee",
        bstr("announce"),
        bstr("http://tracker.local/announce"),
        bstr("info"),
        bstr("length"),
        bstr("name"),
        bstr(name),
        bstr("piece length"),
        bstr("pieces"),
        bstr(&"a".repeat(20)),
    )
    .into_bytes()
}

/// A multi-file private torrent carrying every optional standard key.
pub(crate) fn multi_file_torrent(name: &str) -> Vec<u8> {
    let files = [
        format!("d{}i3e{}l{}ee", bstr("length"), bstr("path"), bstr("01.flac")),
        format!(
            "d{}i4e{}l{}{}ee",
            bstr("length"),
            bstr("path"),
            bstr("CD1"),
            bstr("02.flac")
        ),
    ]
    .concat();
    let info = [
        bstr("files"),
        format!("l{files}e"),
        bstr("name"),
        bstr(name),
        bstr("piece length"),
        "i32768e".to_string(),
        bstr("pieces"),
        bstr(&"b".repeat(20)),
        bstr("private"),
        "i1e".to_string(),
        bstr("source"),
        bstr("RED"),
    ]
    .concat();
    let root = [
        bstr("created by"),
        bstr("mktorrent 1.1"),
        bstr("creation date"),
        "i1700000000e".to_string(),
        bstr("encoding"),
        bstr("UTF-8"),
        bstr("info"),
        format!("d{info}e"),
    ]
    .concat();
    format!("d{root}e").into_bytes()
}

/// A multi-file torrent named `Album` whose announce URL, `created by` and file path hold
/// Latin-1 bytes.
pub(crate) const LEGACY_ENCODED_TORRENT: &[u8] = b"d8:announce12:http://tr\xe9/a10:created by3:ab\xff4:infod5:filesld6:lengthi3e4:pathl4:caf\xe9eee4:name5:Albumee";

/// Writes `bytes` to `dir/file_name`.
pub(crate) fn write_file(dir: &Path, file_name: &str, bytes: &[u8]) {
    fs::write(dir.join(file_name), bytes).unwrap();
}

/// A submission as seen by [`RecordingSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recorded {
    pub(crate) metainfo: Vec<u8>,
    pub(crate) download_dir: String,
    pub(crate) paused: bool,
}

/// Submitter that records every request and optionally fails from the n-th call on.
#[derive(Debug, Default)]
pub(crate) struct RecordingSubmitter {
    pub(crate) calls: Vec<Recorded>,
    pub(crate) fail_from: Option<usize>,
}

impl TorrentSubmitter for RecordingSubmitter {
    async fn submit(&mut self, request: SubmissionRequest<'_>) -> Result<(), SubmitError> {
        if self.fail_from.is_some_and(|n| self.calls.len() >= n) {
            return Err(SubmitError::ServerError("duplicate torrent".into()));
        }
        self.calls.push(Recorded {
            metainfo: request.metainfo.to_vec(),
            download_dir: request.download_dir.to_string(),
            paused: request.paused,
        });
        Ok(())
    }
}
