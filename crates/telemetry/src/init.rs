// Path: crates/telemetry/src/init.rs
use kvorder_types::config::{LogConfig, LogFormat};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Builds the filter used when `RUST_LOG` is unset.
pub fn fallback_filter(level: &str) -> Result<EnvFilter, anyhow::Error> {
    Ok(EnvFilter::try_new(level)?)
}

/// Initializes the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr so
/// that command results on stdout stay machine-readable.
pub fn init_tracing(config: &LogConfig) -> Result<(), anyhow::Error> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => fallback_filter(&config.level)?,
    };

    let (json_layer, compact_layer) = match config.format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            ),
            None,
        ),
        LogFormat::Compact => (
            None,
            Some(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            ),
        ),
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(json_layer)
        .with(compact_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_filter_accepts_directives() {
        assert!(fallback_filter("info").is_ok());
        assert!(fallback_filter("kvorder=debug,warn").is_ok());
    }

    #[test]
    fn test_fallback_filter_rejects_bad_level() {
        assert!(fallback_filter("kvorder=loud").is_err());
    }
}
