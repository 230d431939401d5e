//! Backend operations reachable through the bridge.
//!
//! Operations are pure functions over validated parameters plus the fetch
//! collaborator; they hold no process state, so overlapping calls from the
//! host are independently safe.

use serde::Serialize;
use tracing::debug;

use crate::fetch::{Fetch, FetchError};

/// Tracing target for operation execution.
const OPS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::ops");

/// Well-known endpoint that echoes the caller's public address.
pub const PUBLIC_IP_ENDPOINT: &str = "https://api.ipify.org";

/// Declared return shape of the `DoHTTPRequest` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponseBody {
    /// Full response body as text.
    pub body: String,
}

/// Performs a single outbound GET against `url`.
///
/// The retry count is accepted for wire compatibility and has no effect: the
/// request runs exactly once whatever the caller asked for. Hosts that need
/// retries must drive them from their side of the boundary.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the transport or read failure.
pub fn do_http_request(
    fetch: &dyn Fetch,
    url: &str,
    retry_count: f64,
) -> Result<HttpResponseBody, FetchError> {
    debug!(target: OPS_TARGET, retry_count, "retries requested but not performed");
    let body = fetch.get(url)?;
    Ok(HttpResponseBody { body })
}

/// Returns the caller's public IP address as text.
///
/// Delegates to [`do_http_request`] against [`PUBLIC_IP_ENDPOINT`] and
/// shares its failure path.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the transport or read failure.
pub fn get_public_ip(fetch: &dyn Fetch) -> Result<String, FetchError> {
    do_http_request(fetch, PUBLIC_IP_ENDPOINT, 1.0).map(|response| response.body)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fetch::MockFetch;

    #[rstest]
    #[case::no_retries(0.0)]
    #[case::single(1.0)]
    #[case::several(3.0)]
    fn request_runs_exactly_once_whatever_the_retry_count(#[case] retry_count: f64) {
        let mut fetch = MockFetch::new();
        fetch
            .expect_get()
            .withf(|url| url == "http://127.0.0.1:8080/health")
            .times(1)
            .returning(|_| Ok("OK".to_owned()));

        let response = do_http_request(&fetch, "http://127.0.0.1:8080/health", retry_count)
            .expect("should succeed");
        assert_eq!(
            response,
            HttpResponseBody {
                body: "OK".to_owned()
            }
        );
    }

    #[test]
    fn propagates_transport_failure() {
        let mut fetch = MockFetch::new();
        fetch
            .expect_get()
            .returning(|_| Err(FetchError::request("connection refused")));

        let error = do_http_request(&fetch, "http://127.0.0.1:1/", 1.0).expect_err("should fail");
        assert!(error.to_string().contains("failed to perform request"));
    }

    #[test]
    fn public_ip_queries_the_fixed_endpoint() {
        let mut fetch = MockFetch::new();
        fetch
            .expect_get()
            .withf(|url| url == PUBLIC_IP_ENDPOINT)
            .times(1)
            .returning(|_| Ok("1.2.3.4".to_owned()));

        let ip = get_public_ip(&fetch).expect("should succeed");
        assert_eq!(ip, "1.2.3.4");
    }
}
