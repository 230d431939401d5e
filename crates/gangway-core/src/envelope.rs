//! Result envelope serialization for boundary crossings.
//!
//! Every call produces exactly one envelope: a success slot and an error
//! slot, the vacant one explicitly `null`. The envelope is the only value
//! the host ever parses, so encoding failure must degrade to absent output
//! rather than a corrupt string handed to a non-managed-memory caller.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::DispatchError;

/// Tracing target for envelope encoding.
const ENVELOPE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::envelope");

/// Single-use wire envelope carrying a call outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnEnvelope {
    /// Operation result; `null` on failure.
    pub return_value: Option<Value>,
    /// Failure description; `null` on success.
    pub error: Option<String>,
}

impl ReturnEnvelope {
    /// Creates a success envelope.
    pub fn success(value: Value) -> Self {
        Self {
            return_value: Some(value),
            error: None,
        }
    }

    /// Creates a failure envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            return_value: None,
            error: Some(error.into()),
        }
    }

    /// Converts a dispatch outcome into an envelope.
    pub fn from_outcome(outcome: Result<Value, DispatchError>) -> Self {
        match outcome {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error.to_string()),
        }
    }

    /// Serializes the envelope into its single wire string.
    ///
    /// Returns `None` when serialization fails; the boundary layer translates
    /// that into absent output. Contents are constrained to plain text and
    /// already-decoded JSON values, so this is not expected to occur.
    pub fn encode(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(text) => Some(text),
            Err(error) => {
                warn!(target: ENVELOPE_TARGET, %error, "failed to encode return envelope");
                None
            }
        }
    }
}
