//! Error types for download orchestration.

use thiserror::Error;

use crate::api::ApiError;
use crate::downloader::DownloaderError;
use crate::error::ErrorCategory;
use crate::shopping_list::ShoppingListError;

/// Errors that end a search session or a download run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Token or search request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Shopping-list read or write failed.
    #[error(transparent)]
    ShoppingList(#[from] ShoppingListError),

    /// Download client could not be run.
    #[error(transparent)]
    Downloader(#[from] DownloaderError),

    /// Input reached end-of-file before a valid choice.
    #[error("input closed before a choice was made")]
    InputClosed,

    /// Too many invalid choices in a row.
    #[error("no valid choice after {0} attempts")]
    TooManyInvalidChoices(u32),

    /// Prompt could not be read or written.
    #[error("terminal IO error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl OrchestratorError {
    /// Returns the shared category for this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api(e) => e.category(),
            Self::ShoppingList(e) => e.category(),
            Self::Downloader(e) => e.category(),
            Self::InputClosed | Self::TooManyInvalidChoices(_) | Self::Terminal(_) => {
                ErrorCategory::Input
            }
        }
    }
}
