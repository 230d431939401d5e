//! Function-name dispatch for bridge calls.
//!
//! The bridge keeps two disjoint registries: zero-argument operations served
//! by [`Bridge::call`] and argument-taking operations served by
//! [`Bridge::call_with_args`]. The split keeps arity handling local and
//! explicit instead of funnelling every call through one variadic path.
//! Both registries are fixed at compile time; nothing is registered or
//! removed at runtime.

use serde_json::Value;
use tracing::debug;

use crate::args::{HttpRequestArgs, ValueKind};
use crate::errors::DispatchError;
use crate::fetch::{Fetch, UreqFetcher};
use crate::ops;

/// Tracing target for dispatch decisions.
const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Zero-argument operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullaryOp {
    /// `GetPublicIP`: echo the caller's public address.
    GetPublicIp,
}

impl NullaryOp {
    /// Looks up a wire name in the zero-argument registry.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "GetPublicIP" => Some(Self::GetPublicIp),
            _ => None,
        }
    }

    /// Returns the wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GetPublicIp => "GetPublicIP",
        }
    }
}

/// Argument-taking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgOp {
    /// `DoHTTPRequest`: one outbound GET, body returned as text.
    DoHttpRequest,
}

impl ArgOp {
    /// Looks up a wire name in the argument-taking registry.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "DoHTTPRequest" => Some(Self::DoHttpRequest),
            _ => None,
        }
    }

    /// Returns the wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DoHttpRequest => "DoHTTPRequest",
        }
    }

    /// Declared per-position parameter kinds.
    pub fn signature(self) -> &'static [ValueKind] {
        match self {
            Self::DoHttpRequest => &[ValueKind::String, ValueKind::Number],
        }
    }
}

/// Stateless dispatcher owning the outbound fetch collaborator.
///
/// The operation set is fixed at compile time and the bridge holds no
/// mutable fields, so a single instance can serve overlapping host calls
/// without locking.
pub struct Bridge {
    fetch: Box<dyn Fetch + Send + Sync>,
}

impl Bridge {
    /// Creates a bridge over the given fetch collaborator.
    pub fn new(fetch: Box<dyn Fetch + Send + Sync>) -> Self {
        Self { fetch }
    }

    /// Creates a bridge wired to the production `ureq`-backed fetcher.
    pub fn with_default_fetcher() -> Self {
        Self::new(Box::new(UreqFetcher::new()))
    }

    /// Dispatches a zero-argument operation by wire name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` when the name is not in the zero-argument
    /// registry, or the operation's own failure unchanged.
    pub fn call(&self, name: &str) -> Result<Value, DispatchError> {
        let Some(op) = NullaryOp::lookup(name) else {
            return Err(DispatchError::unknown_operation(name));
        };
        debug!(target: DISPATCH_TARGET, operation = op.name(), "dispatching call");
        match op {
            NullaryOp::GetPublicIp => {
                let ip = ops::get_public_ip(self.fetch.as_ref())?;
                Ok(Value::String(ip))
            }
        }
    }

    /// Dispatches an argument-taking operation by wire name.
    ///
    /// Arguments are matched positionally against the operation's declared
    /// signature: count first, then per-position narrowing, then invocation.
    /// Validation failures short-circuit before the operation runs.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` for names outside the argument-taking
    /// registry, `ArityMismatch` or `TypeMismatch` when validation fails,
    /// or the operation's own failure unchanged.
    pub fn call_with_args(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        let Some(op) = ArgOp::lookup(name) else {
            return Err(DispatchError::unknown_operation(name));
        };
        debug!(
            target: DISPATCH_TARGET,
            operation = op.name(),
            argc = args.len(),
            "dispatching call with args"
        );
        match op {
            ArgOp::DoHttpRequest => {
                let parsed = HttpRequestArgs::parse(args)?;
                let response =
                    ops::do_http_request(self.fetch.as_ref(), &parsed.url, parsed.retry_count)?;
                Ok(serde_json::to_value(response)?)
            }
        }
    }
}
