//! Error types for bridge call failures.
//!
//! Each variant maps to one failure mode in the decode, lookup, narrow,
//! invoke pipeline and carries enough context to render an actionable
//! message into the result envelope's error slot.

use thiserror::Error;

use crate::args::ValueKind;
use crate::fetch::FetchError;

/// Errors surfaced while decoding arguments or dispatching a call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Argument payload could not be parsed as a JSON array.
    #[error("malformed argument payload: {message}")]
    MalformedArgs {
        /// Description of the parse failure.
        message: String,
        /// Underlying parser error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Function name is in neither registry.
    #[error("unknown function name: {name}")]
    UnknownOperation {
        /// The offending name, echoed back for the caller.
        name: String,
    },

    /// Argument count does not match the operation's declared arity.
    #[error("{name} takes exactly {expected} arguments, got {actual}")]
    ArityMismatch {
        /// Wire name of the target operation.
        name: &'static str,
        /// Declared arity.
        expected: usize,
        /// Number of arguments actually supplied.
        actual: usize,
    },

    /// A positional argument could not be narrowed to its declared kind.
    #[error("{name}: argument {position} must be a {expected}")]
    TypeMismatch {
        /// Wire name of the target operation.
        name: &'static str,
        /// Zero-based argument position.
        position: usize,
        /// Kind the operation's signature declares at that position.
        expected: ValueKind,
    },

    /// The operation itself failed after validation succeeded.
    #[error(transparent)]
    Operation(#[from] FetchError),

    /// A return value could not be converted into a wire value.
    #[error("failed to serialize return value: {0}")]
    SerializeValue(#[from] serde_json::Error),
}

impl DispatchError {
    /// Creates a malformed-payload error from a parser error.
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::MalformedArgs {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates a malformed-payload error with a custom message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedArgs {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an unknown-operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Creates an arity mismatch error.
    pub fn arity_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(name: &'static str, position: usize, expected: ValueKind) -> Self {
        Self::TypeMismatch {
            name,
            position,
            expected,
        }
    }
}
