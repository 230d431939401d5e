//! Structured telemetry initialisation for the boundary crate.
//!
//! The host shells have no natural place to configure Rust logging, so the
//! boundary exposes a single idempotent initialisation hook. The filter comes
//! from the `GANGWAY_LOG` environment variable, falling back to `info`.

use std::io;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Environment variable holding the tracing filter expression.
pub const LOG_FILTER_ENV: &str = "GANGWAY_LOG";

/// Errors encountered while configuring telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: the first invocation installs the global
/// subscriber; later ones detect the existing registration and return
/// without touching global state.
///
/// # Errors
///
/// Returns `TelemetryError::Subscriber` when another subscriber was already
/// installed outside this guard, e.g. by the host process.
pub fn initialise() -> Result<(), TelemetryError> {
    TELEMETRY_GUARD.get_or_try_init(install_subscriber).copied()
}

fn install_subscriber() -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        // Host log sinks are not terminals; never emit colour codes.
        .with_ansi(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
