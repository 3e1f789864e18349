// ============================================================
// Layer 5 — Logging Context
// ============================================================
// Owns the process-wide logging setup:
//
//   - creates the log directory on startup
//   - opens logs/Data_injection.log in append mode
//   - installs one subscriber with two output layers,
//     stdout and the log file, both using the same line format
//
// Every line looks like:
//
//   2024-05-01 12:30:00 - spam_ingest::data::loader - DEBUG - Data loaded from ...
//
// The returned LogContext is a guard: main holds it for the
// whole run, and dropping it syncs the log file so the tail
// of the run reaches disk before the process exits.
//
// Crate targets log at debug by default; RUST_LOG can widen
// or narrow the filter for any target.
//
// Reference: tracing-subscriber crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

/// File the pipeline logs into, inside the log directory.
pub const LOG_FILE_NAME: &str = "Data_injection.log";

/// Directory the log file lives in, relative to the working dir.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Timestamp layout used at the start of every log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Line format ──────────────────────────────────────────────────────────────

/// The `<timestamp> - <target> - <level> - ` prefix of a log line.
fn line_prefix(timestamp: &str, target: &str, level: &Level) -> String {
    format!("{} - {} - {} - ", timestamp, target, level)
}

/// Event formatter producing the dash-separated line layout
/// shared by the console and the file sink.
struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta      = event.metadata();
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        write!(writer, "{}", line_prefix(&timestamp, meta.target(), meta.level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── LogContext ───────────────────────────────────────────────────────────────

/// Process-wide logging guard. Initialise once in main and keep
/// it alive until shutdown.
pub struct LogContext {
    log_file: Arc<File>,
}

impl LogContext {
    /// Create the log directory, open the append-mode log file,
    /// and install the global subscriber.
    pub fn init(log_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = log_dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory '{}'", dir.display()))?;

        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Cannot open log file '{}'", path.display()))?;
        let log_file = Arc::new(file);

        tracing_subscriber::registry()
            .with(
                EnvFilter::from_default_env()
                    .add_directive("spam_ingest=debug".parse().unwrap()),
            )
            .with(fmt::layer().event_format(PipeFormat).with_writer(io::stdout))
            .with(
                fmt::layer()
                    .event_format(PipeFormat)
                    .with_ansi(false)
                    .with_writer(Arc::clone(&log_file)),
            )
            .try_init()
            .context("Cannot install the global tracing subscriber")?;

        Ok(Self { log_file })
    }
}

impl Drop for LogContext {
    fn drop(&mut self) {
        // push the tail of the log to disk before the handle closes
        let _ = self.log_file.sync_all();
    }
}
