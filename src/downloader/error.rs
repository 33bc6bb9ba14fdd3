//! Error types for the external downloader.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that can occur while running the download client.
#[derive(Debug, Error)]
pub enum DownloaderError {
    /// The client process could not be started or waited on.
    #[error(
        "failed to run downloader '{program}': {source}\n  Suggestion: Install transmission-cli or set `downloader` in the config file"
    )]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloaderError {
    /// Returns the shared category for this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Downloader
    }
}
