use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at process startup.
/// Uses JSON format with env-filter (`RUST_LOG` env var).
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}

/// Initialize compact tracing routed through libtest's captured output.
///
/// Call at the top of a test to see `debug!` events from request doubles
/// with `RUST_LOG=portcullis_testing=debug`. Idempotent like [`init_tracing`].
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().compact().with_test_writer())
        .try_init();
}
