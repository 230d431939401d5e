//! C-compatible entry points exposed to the mobile host shells.
//!
//! Ownership contract: every non-NULL string returned by [`gangway_call`]
//! and [`gangway_call_with_args`] is allocated here and must be released by
//! passing it back to [`gangway_string_free`] exactly once. The library
//! never frees a string it has handed out, and never returns a partially
//! written buffer: when an envelope cannot be produced the result is NULL,
//! not a corrupt string.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use once_cell::sync::Lazy;
use tracing::warn;

use gangway_core::{Bridge, ReturnEnvelope, decode_args};

use crate::telemetry;

/// Tracing target for boundary crossings.
const FFI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::ffi");

/// ABI version reported to hosts for coordination.
const API_VERSION: u32 = 1;

/// Process-wide bridge wired to the production fetcher.
///
/// Holds no mutable state: the operation set is fixed at compile time and
/// the fetcher is read-only, so the instance is immutable by construction
/// and safe to share across overlapping host calls.
static BRIDGE: Lazy<Bridge> = Lazy::new(Bridge::with_default_fetcher);

/// Reports the ABI version hosts should coordinate against.
#[unsafe(no_mangle)]
pub extern "C" fn gangway_api_version() -> u32 {
    API_VERSION
}

/// Initialises telemetry. Safe to call more than once; later calls are
/// no-ops.
#[unsafe(no_mangle)]
pub extern "C" fn gangway_init() {
    // A subscriber installed by the host process wins; there is no error
    // channel this early in the library's life, so the failure is dropped.
    let _ = telemetry::initialise();
}

/// Dispatches a zero-argument operation by name.
///
/// Returns a heap-allocated envelope string, or NULL when no usable
/// envelope could be produced.
///
/// # Safety
///
/// `func_name` must be NULL or a valid NUL-terminated C string that stays
/// readable for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gangway_call(func_name: *const c_char) -> *mut c_char {
    let name = match unsafe { read_c_str(func_name, "function name") } {
        Ok(name) => name,
        Err(envelope) => return envelope_to_raw(&envelope),
    };
    envelope_to_raw(&ReturnEnvelope::from_outcome(BRIDGE.call(name)))
}

/// Dispatches an argument-taking operation by name.
///
/// `args_json` must hold a JSON array; its elements are matched positionally
/// against the operation's declared parameter kinds. Returns the same
/// envelope contract as [`gangway_call`].
///
/// # Safety
///
/// Both pointers must each be NULL or valid NUL-terminated C strings that
/// stay readable for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gangway_call_with_args(
    func_name: *const c_char,
    args_json: *const c_char,
) -> *mut c_char {
    let name = match unsafe { read_c_str(func_name, "function name") } {
        Ok(name) => name,
        Err(envelope) => return envelope_to_raw(&envelope),
    };
    let payload = match unsafe { read_c_str(args_json, "argument payload") } {
        Ok(payload) => payload,
        Err(envelope) => return envelope_to_raw(&envelope),
    };
    let outcome = decode_args(payload).and_then(|args| BRIDGE.call_with_args(name, &args));
    envelope_to_raw(&ReturnEnvelope::from_outcome(outcome))
}

/// Releases a string previously returned by the call exports.
///
/// NULL is accepted and ignored.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer obtained from [`gangway_call`] or
/// [`gangway_call_with_args`] that has not been freed before.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gangway_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}

/// Reads a borrowed C string, reporting failures as error envelopes.
///
/// # Safety
///
/// `ptr` must be NULL or a valid NUL-terminated C string.
unsafe fn read_c_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, ReturnEnvelope> {
    if ptr.is_null() {
        return Err(ReturnEnvelope::failure(format!("{what} pointer is NULL")));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| ReturnEnvelope::failure(format!("{what} is not valid UTF-8")))
}

/// Converts an envelope into a host-owned C string, NULL when impossible.
fn envelope_to_raw(envelope: &ReturnEnvelope) -> *mut c_char {
    let Some(text) = envelope.encode() else {
        return ptr::null_mut();
    };
    match CString::new(text) {
        Ok(cstring) => cstring.into_raw(),
        Err(error) => {
            // JSON encoding escapes control characters, so an interior NUL
            // here means the envelope is not safe to hand across.
            warn!(target: FFI_TARGET, %error, "envelope contained an interior NUL");
            ptr::null_mut()
        }
    }
}
