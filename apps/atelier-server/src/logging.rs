//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the default
/// filter. Noisy dependencies are capped below `trace` verbosity.
pub fn init(verbose: u8) {
    let default_directives = match verbose {
        0 => "info,sqlx=warn,sea_orm=warn",
        1 => "debug,sqlx=info,sea_orm=info,hyper=info",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // try_init: keep the first subscriber when called more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
