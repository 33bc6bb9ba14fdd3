//! External download client.
//!
//! The tool never downloads torrent data itself. It starts an external client
//! with the magnet link and waits for the process to exit. [`Downloader`] is
//! the seam; [`TransmissionCli`] is the default implementation.

mod error;
mod transmission;

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

pub use error::DownloaderError;
pub use transmission::{DEFAULT_DOWNLOADER_PROGRAM, TransmissionCli};

/// What the downloader should do once the torrent completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Run the stop hook so the client exits after this torrent.
    StopWhenDone,
    /// Leave the client running (seeding) after completion.
    KeepRunning,
}

/// Exit status of a finished downloader process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloaderExit {
    /// Process exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl DownloaderExit {
    /// True when the process exited with status 0.
    #[must_use]
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for DownloaderExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Starts a download of one magnet link and waits for it to finish.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Runs the client on `magnet_link`. When `on_completion` is set, the
    /// client runs that script once the torrent completes.
    ///
    /// # Errors
    ///
    /// Returns [`DownloaderError`] when the process cannot be started or waited on.
    async fn start_download(
        &self,
        magnet_link: &str,
        on_completion: Option<&Path>,
    ) -> Result<DownloaderExit, DownloaderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downloader_exit_success_only_on_zero() {
        assert!(DownloaderExit { code: Some(0) }.success());
        assert!(!DownloaderExit { code: Some(1) }.success());
        assert!(!DownloaderExit { code: None }.success());
    }

    #[test]
    fn test_downloader_exit_display() {
        assert_eq!(DownloaderExit { code: Some(2) }.to_string(), "exit status 2");
        assert_eq!(DownloaderExit { code: None }.to_string(), "terminated by signal");
    }
}
