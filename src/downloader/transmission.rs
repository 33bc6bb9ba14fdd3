//! `transmission-cli` process wrapper.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::{Downloader, DownloaderError, DownloaderExit};

/// Program started when no other downloader is configured.
pub const DEFAULT_DOWNLOADER_PROGRAM: &str = "transmission-cli";

/// Runs `transmission-cli [-f <hook>] <magnet>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct TransmissionCli {
    program: PathBuf,
}

impl Default for TransmissionCli {
    fn default() -> Self {
        Self::new(DEFAULT_DOWNLOADER_PROGRAM)
    }
}

impl TransmissionCli {
    /// Uses `program` (name on `PATH` or explicit path) as the client binary.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command-line arguments for one download.
    #[must_use]
    pub fn build_args(magnet_link: &str, on_completion: Option<&Path>) -> Vec<OsString> {
        let mut args = Vec::with_capacity(3);
        if let Some(hook) = on_completion {
            args.push(OsString::from("-f"));
            args.push(hook.as_os_str().to_os_string());
        }
        args.push(OsString::from(magnet_link));
        args
    }
}

#[async_trait]
impl Downloader for TransmissionCli {
    fn name(&self) -> &str {
        DEFAULT_DOWNLOADER_PROGRAM
    }

    #[instrument(skip(self, magnet_link), fields(program = %self.program.display()))]
    async fn start_download(
        &self,
        magnet_link: &str,
        on_completion: Option<&Path>,
    ) -> Result<DownloaderExit, DownloaderError> {
        if let Some(hook) = on_completion
            && !hook.exists()
        {
            warn!(hook = %hook.display(), "Stop hook script not found; downloader may keep running");
        }

        let args = Self::build_args(magnet_link, on_completion);
        debug!(?args, "Starting downloader");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .await
            .map_err(|source| DownloaderError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        Ok(DownloaderExit {
            code: status.code(),
        })
    }
}
