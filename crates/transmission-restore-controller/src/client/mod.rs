//! Transmission RPC client implementation.

use std::fmt;

use tracing::debug;
use transmission_rpc::{TransClient, types::BasicAuth};
use url::Url;

use transmission_restore_types::{SubmissionRequest, SubmitError, TorrentSubmitter};

use crate::conversions::SubmissionRequestWrapper;
use crate::ops::{RpcError, TransmissionOps};

#[cfg(test)]
mod tests;

/// RPC result string Transmission returns for accepted calls.
const RPC_SUCCESS: &str = "success";

/// Basic auth credentials for the Transmission RPC endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// RPC username.
    pub username: String,
    /// RPC password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// TransmissionClient registers torrents with a Transmission daemon over RPC.
#[allow(missing_debug_implementations, private_bounds)]
pub struct TransmissionClient<T: TransmissionOps = TransClient> {
    client: T,
}

impl TransmissionClient {
    /// Create a new TransmissionClient without contacting the daemon.
    ///
    /// Only the URL is validated; the first RPC call happens on the first submission.
    pub fn new(rpc_url: &str, credentials: Option<Credentials>) -> Result<Self, SubmitError> {
        let url = Url::parse(rpc_url).map_err(|e| SubmitError::InvalidUrl(e.to_string()))?;

        debug!("Using Transmission RPC at {}", url);
        let client = match credentials {
            Some(Credentials { username, password }) => TransClient::with_auth(
                url,
                BasicAuth {
                    user: username,
                    password,
                },
            ),
            None => TransClient::new(url),
        };

        Ok(Self { client })
    }

    /// Create a new TransmissionClient and check the daemon is reachable.
    ///
    /// This method is async as one `session-get` round-trip is made to verify the daemon is
    /// reachable and accepts the credentials.
    pub async fn try_new(
        rpc_url: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self, SubmitError> {
        let mut client = Self::new(rpc_url, credentials)?;
        client.ping().await?;

        debug!("Connected to Transmission Daemon");
        Ok(client)
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TransmissionClient<T> {
    /// Create a TransmissionClient with a custom client implementation.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_client(client: T) -> Self {
        Self { client }
    }

    async fn ping(&mut self) -> Result<(), SubmitError> {
        let result = self.client.session_get().await.map_err(map_rpc_error)?;
        check_result(result)
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TorrentSubmitter for TransmissionClient<T> {
    async fn submit(&mut self, request: SubmissionRequest<'_>) -> Result<(), SubmitError> {
        debug!("Adding {request:?}");
        let result = self
            .client
            .torrent_add(SubmissionRequestWrapper(request).into())
            .await
            .map_err(map_rpc_error)?;
        check_result(result)?;

        debug!("Torrent added into {}", request.download_dir);
        Ok(())
    }
}

/// Maps transport and decoding failures of the RPC layer.
fn map_rpc_error(err: RpcError) -> SubmitError {
    SubmitError::Network(err.to_string())
}

/// Turns a non-success RPC result into a server error.
fn check_result(result: String) -> Result<(), SubmitError> {
    if result == RPC_SUCCESS {
        Ok(())
    } else {
        Err(SubmitError::ServerError(result))
    }
}
