use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `quire_babel=trace`.
pub const LOG_ENV: &str = "QUIRE_LOG";

/// Install the stderr subscriber.
///
/// `QUIRE_LOG` wins when set; otherwise only warnings are shown, or debug
/// events with `--verbose`. Returns false if a subscriber was already set.
pub fn init(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .is_ok()
}
