use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for binaries and tests.
///
/// Honors `RUST_LOG`; defaults to debug-level output for the stowage crates.
/// Calling this more than once is harmless.
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "stowage=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
