//! Diagnostic logging.
//!
//! The terminal is in raw mode while the editor runs, so logs go to a file
//! instead of the console: `<cache dir>/textquill/logs/textquill.log`, rotated
//! daily.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=textquill::input=trace` - every dispatched key
//!
//! The default level is `info`.

use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Directory the log files are written to.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|mut path| {
        path.push("textquill");
        path.push("logs");
        path
    })
}

/// Installs the global tracing subscriber.
///
/// If the log directory cannot be created nothing is logged; the editor
/// still starts.
pub fn init() {
    let Some(dir) = log_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(dir, "textquill.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_app_specific() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("textquill/logs"));
        }
    }
}
