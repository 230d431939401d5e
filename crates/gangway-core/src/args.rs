//! Wire argument decoding and narrowing.
//!
//! Arguments arrive from the host as a single JSON-array string of mixed-type
//! elements. Decoding stops at the dynamic level: elements stay
//! [`serde_json::Value`] until the dispatcher narrows each position against
//! the target operation's signature.

use std::fmt;

use serde_json::Value;

use crate::dispatch::ArgOp;
use crate::errors::DispatchError;

/// Dynamic kinds a wire-decoded value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// UTF-8 text.
    String,
    /// Floating-point-capable number; JSON does not distinguish integrals.
    Number,
    /// True or false.
    Boolean,
    /// Explicit null.
    Null,
    /// Ordered list of dynamic values.
    List,
    /// Keyed mapping from strings to dynamic values.
    Map,
}

impl ValueKind {
    /// Classifies a decoded value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
        }
    }

    /// Returns the kind name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes a wire payload into an ordered sequence of dynamic values.
///
/// The payload must be a syntactically valid JSON array at the top level.
/// No per-element coercion happens here; elements remain dynamically typed
/// until consumed by the dispatcher.
///
/// # Errors
///
/// Returns `DispatchError::MalformedArgs` if the payload is not valid JSON
/// or its top level is not an array.
pub fn decode_args(payload: &str) -> Result<Vec<Value>, DispatchError> {
    let decoded: Value = serde_json::from_str(payload).map_err(DispatchError::from_json_error)?;
    match decoded {
        Value::Array(items) => Ok(items),
        other => Err(DispatchError::malformed(format!(
            "expected a JSON array, got {}",
            ValueKind::of(&other)
        ))),
    }
}

/// Narrows a dynamic value to text.
pub(crate) fn narrow_str<'a>(
    value: &'a Value,
    name: &'static str,
    position: usize,
) -> Result<&'a str, DispatchError> {
    value
        .as_str()
        .ok_or_else(|| DispatchError::type_mismatch(name, position, ValueKind::String))
}

/// Narrows a dynamic value to a number.
///
/// JSON-decoded numerics are always floating-point-capable; integral
/// consumers must truncate explicitly. A numeric string is not a number.
pub(crate) fn narrow_number(
    value: &Value,
    name: &'static str,
    position: usize,
) -> Result<f64, DispatchError> {
    value
        .as_f64()
        .ok_or_else(|| DispatchError::type_mismatch(name, position, ValueKind::Number))
}

/// Parsed arguments for the `DoHTTPRequest` operation.
#[derive(Debug, Clone)]
pub struct HttpRequestArgs {
    /// Target of the outbound GET.
    pub url: String,
    /// Requested retry count; accepted for wire compatibility, not honoured.
    pub retry_count: f64,
}

impl HttpRequestArgs {
    /// Parses and narrows the positional argument list.
    ///
    /// # Errors
    ///
    /// Returns `ArityMismatch` when the list is not exactly two elements,
    /// `TypeMismatch` when position 0 is not a string or position 1 is not
    /// a number.
    pub fn parse(args: &[Value]) -> Result<Self, DispatchError> {
        let op = ArgOp::DoHttpRequest;
        let [url, retry_count] = args else {
            return Err(DispatchError::arity_mismatch(
                op.name(),
                op.signature().len(),
                args.len(),
            ));
        };
        let url = narrow_str(url, op.name(), 0)?.to_owned();
        let retry_count = narrow_number(retry_count, op.name(), 1)?;
        Ok(Self { url, retry_count })
    }
}
