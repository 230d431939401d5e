//! End-to-end dispatch against a live loopback HTTP endpoint.
//!
//! These tests exercise the production `ureq` fetcher through the full
//! dispatch path, using a minimal single-purpose HTTP stub bound to an
//! ephemeral loopback port.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use serde_json::json;

use gangway_core::{Bridge, ReturnEnvelope, UreqFetcher};

/// Serves `count` connections with a fixed `200 OK` response, body `OK`.
///
/// Returns the stub's base URL and the join handle for the serving thread.
fn spawn_http_stub(count: usize) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let url = format!("http://{}/", listener.local_addr().expect("local addr"));
    let handle = thread::spawn(move || {
        for _ in 0..count {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut buffer = [0_u8; 1024];
            let _ = stream.read(&mut buffer).expect("read request");
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK")
                .expect("write response");
        }
    });
    (url, handle)
}

#[test]
fn fetches_a_body_through_the_real_fetcher() {
    let (url, server) = spawn_http_stub(1);
    let bridge = Bridge::new(Box::new(UreqFetcher::new()));

    let value = bridge
        .call_with_args("DoHTTPRequest", &[json!(url), json!(3)])
        .expect("should succeed");

    assert_eq!(value, json!({ "body": "OK" }));
    server.join().expect("server thread");
}

#[test]
fn retry_counts_do_not_change_the_outcome() {
    // Retries are accepted on the wire but never performed; every call below
    // costs exactly one connection against the stub.
    let (url, server) = spawn_http_stub(3);
    let bridge = Bridge::new(Box::new(UreqFetcher::new()));

    for retry_count in [0, 1, 7] {
        let envelope = ReturnEnvelope::from_outcome(
            bridge.call_with_args("DoHTTPRequest", &[json!(&url), json!(retry_count)]),
        );
        let encoded = envelope.encode().expect("should encode");
        let decoded: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
        assert_eq!(
            decoded,
            json!({ "return_value": { "body": "OK" }, "error": null })
        );
    }
    server.join().expect("server thread");
}

#[test]
fn transport_failure_reaches_the_error_slot() {
    // Bind then drop to learn a loopback port with no listener behind it.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let url = format!("http://{}/", listener.local_addr().expect("local addr"));
    drop(listener);

    let bridge = Bridge::with_default_fetcher();
    let envelope =
        ReturnEnvelope::from_outcome(bridge.call_with_args("DoHTTPRequest", &[json!(url), json!(1)]));

    assert!(envelope.return_value.is_none());
    let error = envelope.error.expect("error slot populated");
    assert!(error.contains("failed to perform request"));
}
