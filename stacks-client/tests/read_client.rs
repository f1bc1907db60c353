// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Read client behavior against scripted endpoints: the primary/fallback
//! contract, envelope decoding, and idempotence of repeated reads.

use assert_matches::assert_matches;
use serde_json::json;

use stacks_client::testing::{CannedResponse, TestServer};
use stacks_client::{ClarityArg, ClientError, EndpointPair, ReadClient, ReadRequest};

const ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn get_counter() -> ReadRequest {
    ReadRequest::new(ADDRESS, "counter", "get-counter")
}

#[tokio::test]
async fn primary_success_never_touches_fallback() {
    let primary = TestServer::start(vec![CannedResponse::value(json!("5"))]).await;
    let fallback = TestServer::start(vec![CannedResponse::value(json!("99"))]).await;
    let endpoints = EndpointPair::new(primary.url(), fallback.url());

    let client = ReadClient::new();
    let value = client
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap();
    assert_eq!(value.as_uint_string().unwrap(), "5");

    assert_eq!(primary.request_count(), 1);
    assert_eq!(fallback.request_count(), 0);
}

#[tokio::test]
async fn non_success_primary_falls_back_exactly_once() {
    let primary = TestServer::start(vec![CannedResponse::Status(500)]).await;
    let fallback = TestServer::start(vec![CannedResponse::value(json!("7"))]).await;
    let endpoints = EndpointPair::new(primary.url(), fallback.url());

    let client = ReadClient::new();
    let value = client
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap();
    assert_eq!(value.as_uint_string().unwrap(), "7");

    assert_eq!(primary.request_count(), 1);
    assert_eq!(fallback.request_count(), 1);
}

#[tokio::test]
async fn unreachable_primary_falls_back() {
    // Bind a port and drop the listener so the address refuses connections.
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", dead.local_addr().unwrap());
    drop(dead);

    let fallback = TestServer::start(vec![CannedResponse::value(json!("3"))]).await;
    let endpoints = EndpointPair::new(dead_url, fallback.url());

    let client = ReadClient::new();
    let value = client
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap();
    assert_eq!(value.as_uint_string().unwrap(), "3");
    assert_eq!(fallback.request_count(), 1);
}

#[tokio::test]
async fn https_primary_is_dialed_not_rejected_client_side() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // A plain TCP listener that accepts and immediately hangs up, so a TLS
    // handshake against it fails after the connection was made.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let https_url = format!("https://{}", listener.local_addr().unwrap());
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    let fallback = TestServer::start(vec![CannedResponse::value(json!("8"))]).await;
    let endpoints = EndpointPair::new(https_url, fallback.url());

    let value = ReadClient::new()
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap();
    assert_eq!(value.as_uint_string().unwrap(), "8");

    // The https primary must reach the wire; a client without a TLS backend
    // errors on the scheme before opening any connection.
    assert!(accepted.load(Ordering::SeqCst) >= 1);
    assert_eq!(fallback.request_count(), 1);
}

#[tokio::test]
async fn exhausting_both_endpoints_is_read_failed() {
    let primary = TestServer::start(vec![CannedResponse::Status(500)]).await;
    let fallback = TestServer::start(vec![CannedResponse::Status(404)]).await;
    let endpoints = EndpointPair::new(primary.url(), fallback.url());

    let client = ReadClient::new();
    let result = client.call_read_at(&endpoints, &get_counter()).await;
    assert_matches!(
        result,
        Err(ClientError::ReadFailed { function, .. }) if function == "get-counter"
    );

    // The single fallback hop is the only retry there is.
    assert_eq!(primary.request_count(), 1);
    assert_eq!(fallback.request_count(), 1);
}

#[tokio::test]
async fn reads_are_idempotent_without_intervening_writes() {
    let server = TestServer::start(vec![CannedResponse::value(json!("12"))]).await;
    let endpoints = EndpointPair::new(server.url(), server.url());

    let client = ReadClient::new();
    let first = client
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap()
        .as_uint_string()
        .unwrap();
    let second = client
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap()
        .as_uint_string()
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn request_carries_path_sender_and_hex_arguments() {
    let server = TestServer::start(vec![CannedResponse::value(json!("0"))]).await;
    let endpoints = EndpointPair::new(server.url(), server.url());

    let request = ReadRequest::new(ADDRESS, "ft", "get-balance")
        .with_arg(ClarityArg::Principal(ADDRESS.to_string()));
    ReadClient::new()
        .call_read_at(&endpoints, &request)
        .await
        .unwrap();

    let seen = server.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "POST");
    assert_eq!(
        seen[0].path,
        format!("/v2/contracts/call-read/{}/ft/get-balance", ADDRESS)
    );
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body["sender"], json!(ADDRESS));
    let argument = body["arguments"][0].as_str().unwrap();
    assert!(argument.starts_with("0x27"), "principal literal starts with a quote");
}

#[tokio::test]
async fn absent_value_is_reported_not_defaulted() {
    let server = TestServer::start(vec![CannedResponse::empty_result()]).await;
    let endpoints = EndpointPair::new(server.url(), server.url());

    let value = ReadClient::new()
        .call_read_at(&endpoints, &get_counter())
        .await
        .unwrap();
    assert!(!value.is_present());
    assert_matches!(
        value.as_uint_string(),
        Err(ClientError::MissingValue { .. })
    );
}
