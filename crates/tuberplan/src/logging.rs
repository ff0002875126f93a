//! File logging for the CLI.
//!
//! Logs go to a daily-rotated file under the data directory so terminal
//! output stays clean for reports and CSV piping. The level comes from the
//! `--log-level` flag unless `RUST_LOG` overrides it.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{data_dir}/tuberplan.log.*`.
///
/// The returned guard flushes the writer on drop; hold it for the life of
/// the process.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let file_appender = tracing_appender::rolling::daily(data_dir, "tuberplan.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
