//! Conversion from [`SubmissionRequest`] to the Transmission `torrent-add` arguments.
//!
//! The newtype wrapper exists to satisfy the orphan rule since both the source
//! and target types are defined outside this crate.

use base64::{Engine, prelude::BASE64_STANDARD};
use transmission_restore_types::SubmissionRequest;
use transmission_rpc::types::TorrentAddArgs;

/// Wrapper for converting a `SubmissionRequest` to `TorrentAddArgs`.
#[derive(Debug)]
pub(crate) struct SubmissionRequestWrapper<'a>(pub(crate) SubmissionRequest<'a>);

impl From<SubmissionRequestWrapper<'_>> for TorrentAddArgs {
    fn from(wrapper: SubmissionRequestWrapper<'_>) -> Self {
        let value = wrapper.0;
        Self {
            // Transmission wants the .torrent content base64 encoded.
            metainfo: Some(BASE64_STANDARD.encode(value.metainfo)),
            download_dir: Some(value.download_dir.to_string()),
            paused: Some(value.paused),
            ..Default::default()
        }
    }
}
