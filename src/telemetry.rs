use tracing_subscriber::EnvFilter;

/// Logs go to stderr, filtered by `RUST_LOG` and quiet (`warn`) by default,
/// so they never mix with the phone book's own output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
