use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `logging.level`. Output goes to stderr so that
/// widget trees printed on stdout stay machine-readable. A second call is
/// a no-op.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();
}
