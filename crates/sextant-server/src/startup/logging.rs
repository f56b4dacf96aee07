//! Logging startup
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` (honoring
//! `RUST_LOG`, default `info`), a stdout fmt layer, and, when a log
//! directory is configured, a daily-rolling `sextant.log` file layer. The
//! returned guard must be held for the lifetime of the process so buffered
//! file output is flushed on shutdown.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Initialize logging for the server process
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer();

    match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "sextant.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            Registry::default()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();

            Some(guard)
        }
        None => {
            Registry::default().with(env_filter).with(stdout_layer).init();

            None
        }
    }
}
