//! Tests for the TransmissionClient.

use transmission_restore_types::{SubmitError, TorrentSubmitter};

use super::{Credentials, TransmissionClient, check_result, map_rpc_error};
use crate::ops::MockTransmissionOps;
use crate::testutil::{SAMPLE_METAINFO, SAMPLE_METAINFO_B64, make_test_request};

#[test_log::test(tokio::test)]
async fn test_submit_success() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_torrent_add()
        .withf(|args| {
            args.metainfo.as_deref() == Some(SAMPLE_METAINFO_B64)
                && args.download_dir.as_deref() == Some("/data/new")
                && args.paused == Some(true)
        })
        .times(1)
        .returning(|_| Ok("success".to_string()));

    let mut client = TransmissionClient::with_client(mock);
    let result = client
        .submit(make_test_request(SAMPLE_METAINFO, "/data/new"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_submit_rejected() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_torrent_add()
        .returning(|_| Ok("invalid or corrupt torrent file".to_string()));

    let mut client = TransmissionClient::with_client(mock);
    let result = client
        .submit(make_test_request(SAMPLE_METAINFO, "/data/new"))
        .await;

    match result.unwrap_err() {
        SubmitError::ServerError(msg) => {
            assert_eq!(msg, "invalid or corrupt torrent file");
        }
        _ => panic!("Expected ServerError"),
    }
}

#[tokio::test]
async fn test_submit_network_error() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_torrent_add()
        .returning(|_| Err("connection refused".into()));

    let mut client = TransmissionClient::with_client(mock);
    let result = client
        .submit(make_test_request(SAMPLE_METAINFO, "/data/new"))
        .await;

    match result.unwrap_err() {
        SubmitError::Network(msg) => assert!(msg.contains("connection refused")),
        _ => panic!("Expected Network error"),
    }
}

#[tokio::test]
async fn test_submit_calls_backend_once_per_request() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_torrent_add()
        .times(2)
        .returning(|_| Ok("success".to_string()));

    let mut client = TransmissionClient::with_client(mock);
    for dir in ["/data/a", "/data/b"] {
        client
            .submit(make_test_request(SAMPLE_METAINFO, dir))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_ping_success() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_session_get()
        .times(1)
        .returning(|| Ok("success".to_string()));

    let mut client = TransmissionClient::with_client(mock);
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn test_ping_error() {
    let mut mock = MockTransmissionOps::new();

    mock.expect_session_get()
        .returning(|| Err("error sending request".into()));

    let mut client = TransmissionClient::with_client(mock);
    match client.ping().await.unwrap_err() {
        SubmitError::Network(msg) => assert!(msg.contains("error sending request")),
        _ => panic!("Expected Network error"),
    }
}

#[tokio::test]
async fn test_try_new_invalid_url() {
    let result = TransmissionClient::try_new("not a url", None).await;

    match result.err().unwrap() {
        SubmitError::InvalidUrl(_) => {}
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[test]
fn test_new_makes_no_rpc_call() {
    // Nothing listens on port 1.
    let credentials = Credentials {
        username: "admin".to_string(),
        password: "secret".to_string(),
    };
    assert!(TransmissionClient::new("http://127.0.0.1:1/transmission/rpc", None).is_ok());
    assert!(
        TransmissionClient::new("http://127.0.0.1:1/transmission/rpc", Some(credentials)).is_ok()
    );
}

#[test]
fn test_new_invalid_url() {
    let result = TransmissionClient::new("not a url", None);
    assert!(matches!(result, Err(SubmitError::InvalidUrl(_))));
}

#[test]
fn test_check_result() {
    assert!(check_result("success".to_string()).is_ok());
    assert!(matches!(
        check_result("duplicate torrent".to_string()),
        Err(SubmitError::ServerError(msg)) if msg == "duplicate torrent"
    ));
}

#[test]
fn test_error_mapping_network() {
    let err = map_rpc_error("timed out".into());
    assert!(matches!(err, SubmitError::Network(msg) if msg == "timed out"));
}

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = Credentials {
        username: "admin".to_string(),
        password: "hunter2".to_string(),
    };
    let out = format!("{credentials:?}");
    assert!(out.contains("admin"));
    assert!(!out.contains("hunter2"));
}
