//! File-based logging module for emel0-site
//!
//! The terminal belongs to the page renderer, so tracing output goes to a
//! daily-rotated file instead of stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "emel0-site";
const DEFAULT_FILTER: &str = "emel0_site=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/emel0-site.YYYY-MM-DD`. `RUST_LOG` overrides
/// the default filter.
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The writer thread must outlive every span, i.e. the whole process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Log the outcome of a gateway query
#[macro_export]
macro_rules! log_query_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(rows) => tracing::info!(operation = $operation, rows = rows.len(), "Query succeeded"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Query failed"),
        }
    };
}
