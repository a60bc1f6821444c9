//! Shared test utilities and fixtures.

use transmission_restore_types::SubmissionRequest;

/// Minimal single-file torrent declaring the name `Movie1`.
pub(crate) const SAMPLE_METAINFO: &[u8] = b"d8:announce23:http://tracker/announce4:infod6:lengthi5e4:name6:Movie112:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaaee";

/// [`SAMPLE_METAINFO`] in standard base64.
pub(crate) const SAMPLE_METAINFO_B64: &str = "ZDg6YW5ub3VuY2UyMzpodHRwOi8vdHJhY2tlci9hbm5vdW5jZTQ6aW5mb2Q2Omxlbmd0aGk1ZTQ6bmFtZTY6TW92aWUxMTI6cGllY2UgbGVuZ3RoaTE2Mzg0ZTY6cGllY2VzMjA6YWFhYWFhYWFhYWFhYWFhYWFhYWFlZQ==";

pub(crate) fn make_test_request<'a>(
    metainfo: &'a [u8],
    download_dir: &'a str,
) -> SubmissionRequest<'a> {
    SubmissionRequest {
        metainfo,
        download_dir,
        paused: true,
    }
}
