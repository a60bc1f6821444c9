//! Decoding of `.torrent` files.
//!
//! Only `info.name` drives any behavior and must be UTF-8. The other standard keys are typed
//! so a file carrying them with the wrong type is rejected, but their strings are kept as raw
//! bytes: legacy torrents often encode them in Latin-1 or a local code page. Unknown keys are
//! ignored.

use std::borrow::Cow;

use serde::Deserialize;
use serde_bytes::ByteBuf;
use thiserror::Error;

/// Error variants for [`Metainfo::from_bytes`].
#[derive(Error, Debug)]
pub enum MetainfoError {
    /// The content is not a bencoded torrent dictionary.
    #[error("unmarshal torrent: {0}")]
    Decode(#[from] serde_bencode::Error),

    /// The torrent declares an empty `info.name`.
    #[error("torrent declares an empty name")]
    EmptyName,
}

/// Top-level dictionary of a torrent-definition file.
#[derive(Debug, Deserialize)]
pub struct Metainfo {
    /// Tracker announce URL.
    #[serde(default)]
    pub announce: Option<ByteBuf>,

    /// Tool that created the file.
    #[serde(rename = "created by", default)]
    pub created_by: Option<ByteBuf>,

    /// Creation time, seconds since the epoch.
    #[serde(rename = "creation date", default)]
    pub creation_date: Option<i64>,

    /// Character encoding of the string fields.
    #[serde(default)]
    pub encoding: Option<ByteBuf>,

    /// The info section.
    pub info: Info,
}

/// The `info` section of a torrent.
#[derive(Debug, Deserialize)]
pub struct Info {
    /// Declared content name, the file or top-level directory name.
    pub name: String,

    /// File list of a multi-file torrent.
    #[serde(default)]
    pub files: Option<Vec<FileEntry>>,

    /// Content length of a single-file torrent.
    #[serde(default)]
    pub length: Option<i64>,

    /// Bytes per piece.
    #[serde(rename = "piece length", default)]
    pub piece_length: Option<i64>,

    /// Concatenated SHA-1 piece hashes.
    #[serde(default)]
    pub pieces: Option<ByteBuf>,

    /// `1` for private torrents.
    #[serde(default)]
    pub private: Option<i64>,

    /// Source tag used by private trackers.
    #[serde(default)]
    pub source: Option<ByteBuf>,
}

/// One file of a multi-file torrent.
#[derive(Debug, Deserialize)]
pub struct FileEntry {
    /// File length in bytes.
    pub length: i64,
    /// Path components relative to the content directory.
    pub path: Vec<ByteBuf>,
}

impl Metainfo {
    /// Decodes a torrent file and checks that it declares a name.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        let metainfo: Self = serde_bencode::from_bytes(bytes)?;
        if metainfo.info.name.is_empty() {
            return Err(MetainfoError::EmptyName);
        }
        Ok(metainfo)
    }

    /// Number of files the torrent describes.
    pub fn file_count(&self) -> usize {
        self.info.files.as_ref().map_or(1, Vec::len)
    }

    /// Announce URL for display, invalid UTF-8 replaced.
    pub fn announce_lossy(&self) -> Cow<'_, str> {
        self.announce
            .as_deref()
            .map_or(Cow::Borrowed(""), |url| String::from_utf8_lossy(url))
    }
}
