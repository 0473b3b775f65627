//! Tests for the feed client against a mock HTTP server.

use blocklist_fetch::{FeedClient, FetchError};

#[test]
fn test_fetch_returns_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/public/bannedraw")
        .with_status(200)
        .with_body("1,Alice\n2,Bob\n")
        .create();

    let client = FeedClient::new(format!("{}/api/v1/public/bannedraw", server.url())).unwrap();
    let body = client.fetch().unwrap();

    assert_eq!(body, "1,Alice\n2,Bob\n");
    mock.assert();
}

#[test]
fn test_fetch_rejects_error_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/feed").with_status(503).create();

    let client = FeedClient::new(format!("{}/feed", server.url())).unwrap();
    let result = client.fetch();

    assert!(matches!(result, Err(FetchError::Status { .. })));
}

#[test]
fn test_fetch_rejects_empty_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/feed")
        .with_status(200)
        .with_body("  \n")
        .create();

    let client = FeedClient::new(format!("{}/feed", server.url())).unwrap();
    let result = client.fetch();

    assert!(matches!(result, Err(FetchError::EmptyFeed { .. })));
}

#[test]
fn test_fetch_rejects_unreachable_host() {
    // Port 9 is discard; nothing listens there in the test environment.
    let client = FeedClient::new("http://127.0.0.1:9/feed").unwrap();
    assert!(client.fetch().is_err());
}
