use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// Filtering comes from `RUST_LOG` (default `warn`). Output goes to stderr so
/// stdout only ever carries results.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second call (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
