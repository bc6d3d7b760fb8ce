//! Tracing subscriber setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(level: &str) -> String {
    format!("library_catalog_server={},tower_http=debug,sqlx=warn", level)
}

/// `json` selects structured output; anything else uses the pretty formatter
fn wants_json(config: &LoggingConfig) -> bool {
    config.format.eq_ignore_ascii_case("json")
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.level).into());

    let json = wants_json(config);
    let stdout_json = json.then(|| fmt::layer().json());
    let stdout_pretty = (!json).then(|| fmt::layer().pretty());

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "library-catalog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_json)
        .with(stdout_pretty)
        .with(file_layer)
        .init();

    guard
}
