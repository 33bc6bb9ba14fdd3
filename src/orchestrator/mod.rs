//! Routes a user's choice to an immediate download or the shopping list.
//!
//! A search session is a small state machine:
//!
//! 1. Presenting: print every result and the prompt, read one line.
//! 2. `d <rank>`: start the downloader (stop hook enabled) and end the session.
//! 3. `s <rank>`: store the result in the shopping list and end the session.
//! 4. `q`: end the session.
//! 5. Anything else: log the problem and go back to 1.
//!
//! The loop is bounded by `max_prompt_attempts` (0 means unbounded) so piped,
//! non-interactive input cannot spin forever.

mod choice;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, instrument, warn};

pub use choice::{Choice, ChoiceError, parse_choice};
pub use error::OrchestratorError;

use crate::api::{SearchClient, SearchResults};
use crate::downloader::{CompletionPolicy, Downloader, DownloaderExit};
use crate::error::ErrorCategory;
use crate::shopping_list::ShoppingList;

/// Default cap on consecutive invalid prompt answers.
pub const DEFAULT_MAX_PROMPT_ATTEMPTS: u32 = 10;

/// Prompt shown after the result list.
pub const PROMPT: &str = "download/store/quit ? (d [index], s [index], q) ";

/// Result type for orchestration.
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Where a download request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadSource {
    /// Stored entry; removed from the list once the downloader exits.
    ShoppingList(u64),
    /// Search result or raw magnet link; nothing to clean up.
    Direct,
}

/// How a search session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The search returned nothing, so no prompt was shown.
    NoResults,
    /// Result `rank` was downloaded.
    Downloaded {
        /// Rank of the chosen result.
        rank: usize,
        /// Downloader exit status.
        exit: DownloaderExit,
    },
    /// Result `rank` was stored under `id`.
    Stored {
        /// Rank of the chosen result.
        rank: usize,
        /// Shopping-list id assigned to it.
        id: u64,
    },
    /// The user quit.
    Quit,
}

/// Drives search sessions and shopping-list downloads.
pub struct DownloadOrchestrator<'a> {
    shopping_list: &'a ShoppingList,
    downloader: &'a dyn Downloader,
    stop_hook: Option<PathBuf>,
    max_prompt_attempts: u32,
}

impl<'a> DownloadOrchestrator<'a> {
    /// Creates an orchestrator with no stop hook and the default prompt cap.
    #[must_use]
    pub fn new(shopping_list: &'a ShoppingList, downloader: &'a dyn Downloader) -> Self {
        Self {
            shopping_list,
            downloader,
            stop_hook: None,
            max_prompt_attempts: DEFAULT_MAX_PROMPT_ATTEMPTS,
        }
    }

    /// Script the downloader runs on completion under [`CompletionPolicy::StopWhenDone`].
    #[must_use]
    pub fn with_stop_hook(mut self, stop_hook: impl Into<PathBuf>) -> Self {
        self.stop_hook = Some(stop_hook.into());
        self
    }

    /// Caps consecutive invalid answers; `0` disables the cap.
    #[must_use]
    pub fn with_max_prompt_attempts(mut self, max_prompt_attempts: u32) -> Self {
        self.max_prompt_attempts = max_prompt_attempts;
        self
    }

    /// Searches `query` and runs one interactive session over the results.
    ///
    /// # Errors
    ///
    /// Returns the search error unchanged, or any session error.
    pub async fn search_and_choose<R, W>(
        &self,
        search: &SearchClient,
        query: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let results = search.search(query).await?;
        if results.is_empty() {
            writeln!(output, "No results for '{query}'").map_err(OrchestratorError::Terminal)?;
            return Ok(SessionOutcome::NoResults);
        }
        self.choose(&results, input, output).await
    }

    /// Presents `results` and acts on the first valid answer.
    ///
    /// # Errors
    ///
    /// [`OrchestratorError::InputClosed`] at end of input,
    /// [`OrchestratorError::TooManyInvalidChoices`] when the cap is hit, and
    /// download or shopping-list errors from the chosen action.
    pub async fn choose<R, W>(
        &self,
        results: &SearchResults,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut invalid_attempts: u32 = 0;
        loop {
            present(results, output).map_err(OrchestratorError::Terminal)?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .await
                .map_err(OrchestratorError::Terminal)?;
            if read == 0 {
                return Err(OrchestratorError::InputClosed);
            }

            match parse_choice(&line) {
                Ok(Choice::Quit) => return Ok(SessionOutcome::Quit),
                Ok(Choice::Download(rank)) => {
                    if let Some(result) = results.get(rank) {
                        let exit = self
                            .download_torrent(
                                DownloadSource::Direct,
                                &result.display_name,
                                &result.magnet_link,
                                CompletionPolicy::StopWhenDone,
                                output,
                            )
                            .await?;
                        return Ok(SessionOutcome::Downloaded { rank, exit });
                    }
                    error!(category = %ErrorCategory::Input, rank, "Invalid input: index does not exist");
                }
                Ok(Choice::Store(rank)) => {
                    if let Some(result) = results.get(rank) {
                        let id = self
                            .shopping_list
                            .add(&result.display_name, &result.magnet_link)?;
                        writeln!(output, "{} added to shopping list", result.display_name)
                            .map_err(OrchestratorError::Terminal)?;
                        return Ok(SessionOutcome::Stored { rank, id });
                    }
                    error!(category = %ErrorCategory::Input, rank, "Invalid input: index does not exist");
                }
                Err(e) => {
                    error!(category = %ErrorCategory::Input, "{e}");
                }
            }

            if record_invalid_attempt(&mut invalid_attempts, self.max_prompt_attempts) {
                return Err(OrchestratorError::TooManyInvalidChoices(invalid_attempts));
            }
        }
    }

    /// Runs the downloader on one magnet link and waits for it to exit.
    ///
    /// Shopping-list sources are removed from the list afterwards; a missing id
    /// at that point is logged and ignored. A non-zero exit is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the downloader cannot be run or the list cannot be updated.
    #[instrument(skip(self, magnet_link, output), fields(downloader = self.downloader.name()))]
    pub async fn download_torrent<W: Write>(
        &self,
        source: DownloadSource,
        name: &str,
        magnet_link: &str,
        policy: CompletionPolicy,
        output: &mut W,
    ) -> Result<DownloaderExit> {
        info!(name, "Download requested");
        info!(magnet_link, "Magnet link");
        writeln!(output, "Starting download {name}").map_err(OrchestratorError::Terminal)?;
        output.flush().map_err(OrchestratorError::Terminal)?;

        let hook = match policy {
            CompletionPolicy::StopWhenDone => self.stop_hook_path(),
            CompletionPolicy::KeepRunning => None,
        };
        let exit = self.downloader.start_download(magnet_link, hook).await?;
        if !exit.success() {
            warn!(%exit, name, "Downloader exited unsuccessfully");
        }

        if let DownloadSource::ShoppingList(id) = source {
            match self.shopping_list.remove(id) {
                Ok(_) => {}
                Err(e) if e.is_not_found() => {
                    error!(category = %e.category(), id, "{e}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(exit)
    }

    /// Downloads one stored entry with the stop hook, then removes it.
    ///
    /// # Errors
    ///
    /// [`crate::ShoppingListError::NotFound`] (wrapped) if `id` is not stored,
    /// or any download error.
    pub async fn download_entry<W: Write>(
        &self,
        id: u64,
        output: &mut W,
    ) -> Result<DownloaderExit> {
        let entry = self.shopping_list.get(id)?;
        self.download_torrent(
            DownloadSource::ShoppingList(entry.id),
            &entry.name,
            &entry.magnet_link,
            CompletionPolicy::StopWhenDone,
            output,
        )
        .await
    }

    /// Downloads a raw magnet link with the stop hook.
    ///
    /// # Errors
    ///
    /// Returns an error if the downloader cannot be run.
    pub async fn download_magnet<W: Write>(
        &self,
        magnet_link: &str,
        output: &mut W,
    ) -> Result<DownloaderExit> {
        self.download_torrent(
            DownloadSource::Direct,
            magnet_link,
            magnet_link,
            CompletionPolicy::StopWhenDone,
            output,
        )
        .await
    }

    /// Downloads every stored entry in id order, keeping the downloader
    /// running between items, and returns how many were attempted.
    ///
    /// # Errors
    ///
    /// Stops at the first downloader or persistence error.
    pub async fn download_all<W: Write>(&self, output: &mut W) -> Result<usize> {
        let entries = self.shopping_list.entries()?;
        info!(count = entries.len(), "Starting download shopping list");

        for entry in &entries {
            self.download_torrent(
                DownloadSource::ShoppingList(entry.id),
                &entry.name,
                &entry.magnet_link,
                CompletionPolicy::KeepRunning,
                output,
            )
            .await?;
        }

        info!(count = entries.len(), "All items in shopping list downloaded");
        Ok(entries.len())
    }

    fn stop_hook_path(&self) -> Option<&Path> {
        if self.stop_hook.is_none() {
            warn!("No stop hook configured; downloader will keep running after completion");
        }
        self.stop_hook.as_deref()
    }
}

/// Counts one rejected answer and reports whether the cap is reached.
/// A cap of `0` never triggers; the counter saturates instead of overflowing.
fn record_invalid_attempt(invalid_attempts: &mut u32, max_prompt_attempts: u32) -> bool {
    *invalid_attempts = invalid_attempts.saturating_add(1);
    max_prompt_attempts != 0 && *invalid_attempts >= max_prompt_attempts
}

fn present<W: Write>(results: &SearchResults, output: &mut W) -> std::io::Result<()> {
    for (rank, result) in results.iter() {
        writeln!(output, "{rank} : {}", result.display_name)?;
    }
    write!(output, "{PROMPT}")?;
    output.flush()
}
