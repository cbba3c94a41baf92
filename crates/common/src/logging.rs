//! Logging and tracing initialization.

use std::sync::Arc;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// Honors `RUST_LOG` over the configured level, and writes to the
/// configured log file when one is set (falling back to stderr if the
/// file cannot be created).
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match (&config.file, config.json) {
        (Some(path), json) => match std::fs::File::create(path) {
            Ok(file) => {
                let writer = Arc::new(file);
                if json {
                    let subscriber = builder.json().with_writer(writer).finish();
                    tracing::subscriber::set_global_default(subscriber).ok();
                } else {
                    let subscriber = builder.with_writer(writer).finish();
                    tracing::subscriber::set_global_default(subscriber).ok();
                }
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {e}", path.display());
                let subscriber = builder.finish();
                tracing::subscriber::set_global_default(subscriber).ok();
            }
        },
        (None, true) => {
            let subscriber = builder.json().finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (None, false) => {
            let subscriber = builder.finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
