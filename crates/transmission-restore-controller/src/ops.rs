//! Internal trait abstracting Transmission RPC operations.
//!
//! This module provides the [`TransmissionOps`] trait which abstracts the underlying
//! transmission client, enabling mocking in tests.

use transmission_rpc::{TransClient, types::TorrentAddArgs};

/// Error returned by the RPC layer.
pub(crate) type RpcError = Box<dyn std::error::Error + Send + Sync>;

/// Internal trait that abstracts the transmission client operations.
/// Both calls return the `result` field of the RPC response, `"success"` when accepted.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait TransmissionOps {
    async fn session_get(&mut self) -> Result<String, RpcError>;
    async fn torrent_add(&mut self, args: TorrentAddArgs) -> Result<String, RpcError>;
}

impl TransmissionOps for TransClient {
    async fn session_get(&mut self) -> Result<String, RpcError> {
        let response = TransClient::session_get(self).await?;
        Ok(response.result)
    }

    async fn torrent_add(&mut self, args: TorrentAddArgs) -> Result<String, RpcError> {
        let response = TransClient::torrent_add(self, args).await?;
        Ok(response.result)
    }
}
