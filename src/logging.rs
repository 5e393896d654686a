//! Structured logging for the demo binary.
//!
//! The terminal belongs to the TUI while a session runs, so events only go to
//! a daily-rolling file under `<data dir>/logs/spotlight.log`. Filtering
//! follows `RUST_LOG` and defaults to `info`:
//!
//! - `RUST_LOG=debug` logs panel layout passes and breakpoint changes
//! - `RUST_LOG=spotlight_core=trace` adds every marshalled panel command

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

const LOG_FILE: &str = "spotlight.log";

/// Install the file subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let logs_dir = app_dirs::ensure_logs_dir()?;
	let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
	let (writer, guard) = tracing_appender::non_blocking(file_appender);

	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_line_number(true)
		.with_filter(filter);

	tracing_subscriber::registry().with(file_layer).try_init()?;
	Ok(guard)
}
