//! Typed dispatch core for the gangway mobile bridge.
//!
//! The mobile host addresses this library through a string-keyed call
//! surface: a function name plus, optionally, a JSON array of loosely typed
//! arguments. This crate implements everything between that wire form and
//! the concrete backend operations:
//!
//! - [`decode_args`] parses the argument payload into dynamic values,
//! - [`Bridge`] looks the name up in one of two fixed registries, validates
//!   arity and per-position kinds, and invokes the matched operation,
//! - [`ReturnEnvelope`] carries the outcome back as a single wire string:
//!
//! ```json
//! { "return_value": { "body": "..." }, "error": null }
//! ```
//!
//! Every failure mode short of envelope encoding itself is rendered into the
//! envelope's error slot; nothing propagates to the host as a fault. The
//! C-ABI exports live in the `gangway-mobile` crate.

mod args;
mod dispatch;
mod envelope;
mod errors;
mod fetch;
mod ops;

pub use args::{HttpRequestArgs, ValueKind, decode_args};
pub use dispatch::{ArgOp, Bridge, NullaryOp};
pub use envelope::ReturnEnvelope;
pub use errors::DispatchError;
pub use fetch::{Fetch, FetchError, UreqFetcher};
pub use ops::{HttpResponseBody, PUBLIC_IP_ENDPOINT, do_http_request, get_public_ip};
