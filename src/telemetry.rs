use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Installs the global `tracing` subscriber.
///
/// Log lines go to stderr so that reports on stdout stay machine readable.
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is true.
pub fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let default_filter = if verbose { "school_fees=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
