use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber, honoring `RUST_LOG` and defaulting
/// to `info` when unset. Safe to call once per process; later calls are
/// ignored.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
