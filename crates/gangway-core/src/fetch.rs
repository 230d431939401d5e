//! Outbound request executor seam.
//!
//! The bridge performs exactly one GET per fetching operation. The trait
//! exists so dispatch logic can be exercised against a mock; the production
//! implementation wraps a blocking [`ureq::Agent`].

use thiserror::Error;

/// Failures from a single outbound request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be performed (resolve, connect, TLS, HTTP status).
    #[error("failed to perform request: {message}")]
    Request {
        /// Transport-level failure description.
        message: String,
    },

    /// The response body could not be read in full.
    #[error("failed to read response: {message}")]
    Read {
        /// Read-side failure description.
        message: String,
    },
}

impl FetchError {
    /// Creates a request failure.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates a body-read failure.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }
}

/// Performs one outbound GET and returns the response body as text.
#[cfg_attr(test, mockall::automock)]
pub trait Fetch {
    /// Fetches `url`, blocking the calling thread until the body has been
    /// read or the transport fails. No timeout is enforced at this layer.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the transport or read failure.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by a blocking [`ureq::Agent`].
pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    /// Creates a fetcher with the agent's default transport policy.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for UreqFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|error| FetchError::request(error.to_string()))?;
        response
            .into_string()
            .map_err(|error| FetchError::read(error.to_string()))
    }
}
