//! Tracing setup: console on stderr plus a rolling log file in the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Log file name prefix (`trnt.<date>.log`).
pub(crate) const LOG_FILE_PREFIX: &str = "trnt";

/// Log file name suffix.
pub(crate) const LOG_FILE_SUFFIX: &str = "log";

/// Rotated log files kept on disk.
pub(crate) const MAX_LOG_FILES: usize = 5;

/// Picks the console level from the verbosity flags.
/// `RUST_LOG`, when set, still wins inside [`init_tracing`].
pub(crate) fn resolve_default_log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber once per process.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run. File logging is skipped (with a warning) when the log directory
/// cannot be prepared.
pub(crate) fn init_tracing(default_level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let mut file_error = None;
    let (file_layer, guard) = match log_dir.map(build_file_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            file_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some(e) = file_error {
        warn!(error = %e, "File logging disabled");
    }
    guard
}

fn build_file_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)?;
    Ok(appender)
}

/// Log files in `log_dir`, oldest first (dated names sort chronologically).
pub(crate) fn collect_log_files(log_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let prefix = format!("{LOG_FILE_PREFIX}.");
    let suffix = format!(".{LOG_FILE_SUFFIX}");
    let mut files = Vec::new();
    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(&prefix) && name.ends_with(&suffix) && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_level_from_flags() {
        assert_eq!(resolve_default_log_level(0, false), "info");
        assert_eq!(resolve_default_log_level(1, false), "debug");
        assert_eq!(resolve_default_log_level(5, false), "trace");
        assert_eq!(resolve_default_log_level(0, true), "error");
    }

    #[test]
    fn test_collect_log_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("trnt.2026-10-19.log"), "b").unwrap();
        fs::write(temp.path().join("trnt.2026-10-18.log"), "a").unwrap();
        fs::write(temp.path().join("other.log"), "x").unwrap();
        fs::write(temp.path().join("trnt.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("trnt.dir.log")).unwrap();

        let files = collect_log_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["trnt.2026-10-18.log", "trnt.2026-10-19.log"]);
    }

    #[test]
    fn test_collect_log_files_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(collect_log_files(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_build_file_appender_creates_dir() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("logs");
        build_file_appender(&log_dir).unwrap();
        assert!(log_dir.is_dir());
    }
}
