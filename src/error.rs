//! Error categories shared across modules.
//!
//! Every library error type maps onto one [`ErrorCategory`]. The binary logs
//! the category next to the message and uses it to pick an exit status.

use std::fmt;

use crate::api::ApiError;
use crate::downloader::DownloaderError;
use crate::orchestrator::OrchestratorError;
use crate::shopping_list::ShoppingListError;

/// Structured classification for every failure the tool can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport or connection failure talking to the remote API.
    Network,
    /// Malformed or unexpected API response, including API-reported errors.
    Protocol,
    /// Referenced shopping-list id is absent.
    NotFound,
    /// Shopping-list document unreadable, unwritable or corrupt.
    Persistence,
    /// External download client could not be started.
    Downloader,
    /// Interactive input closed or exhausted.
    Input,
    /// Invalid configuration.
    Config,
    /// Anything not classified above.
    App,
}

impl ErrorCategory {
    /// Returns the stable label used in log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Protocol => "protocol",
            Self::NotFound => "not_found",
            Self::Persistence => "persistence",
            Self::Downloader => "downloader",
            Self::Input => "input",
            Self::Config => "config",
            Self::App => "app",
        }
    }

    /// Returns true when the condition is reported and the run carries on.
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Finds the category of the first library error in an error chain.
///
/// Falls back to [`ErrorCategory::App`] when the chain holds no library error.
#[must_use]
pub fn categorize(error: &(dyn std::error::Error + 'static)) -> ErrorCategory {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(e) = err.downcast_ref::<OrchestratorError>() {
            return e.category();
        }
        if let Some(e) = err.downcast_ref::<ApiError>() {
            return e.category();
        }
        if let Some(e) = err.downcast_ref::<ShoppingListError>() {
            return e.category();
        }
        if let Some(e) = err.downcast_ref::<DownloaderError>() {
            return e.category();
        }
        current = err.source();
    }
    ErrorCategory::App
}
