//! C-ABI boundary crate for the gangway bridge.
//!
//! This crate owns everything that touches the foreign-call convention: the
//! exported entry points, the string ownership handoff, and telemetry
//! bootstrap. Dispatch semantics live in `gangway-core`; this layer only
//! converts between C strings and the typed call surface.
//!
//! Hosts drive the library through five exports:
//!
//! - `gangway_api_version`: ABI coordination,
//! - `gangway_init`: install telemetry (idempotent),
//! - `gangway_call` / `gangway_call_with_args`: dispatch by name, receiving
//!   the serialized result envelope,
//! - `gangway_string_free`: return every non-NULL result buffer.

mod ffi;
mod telemetry;

pub use ffi::{
    gangway_api_version, gangway_call, gangway_call_with_args, gangway_init, gangway_string_free,
};
pub use telemetry::{LOG_FILTER_ENV, TelemetryError};
