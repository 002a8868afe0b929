// src/logging.rs

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::LogFormat;

/// Installs the global subscriber, writing to stdout.
///
/// `RUST_LOG` overrides `level` when it is set and valid.
pub fn init(format: LogFormat, level: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    }
}
