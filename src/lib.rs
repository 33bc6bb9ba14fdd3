//! trnt core library
//!
//! Searches a torrent index over its token-scoped JSON API and keeps a
//! persisted shopping list of torrents chosen for later download.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - Token acquisition and search against the remote index
//! - [`shopping_list`] - JSON-backed list of pending downloads
//! - [`downloader`] - External download client invocation
//! - [`orchestrator`] - Interactive choice and download routing
//! - [`error`] - Error categories shared by every module

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod downloader;
pub mod error;
pub mod orchestrator;
pub mod shopping_list;
mod user_agent;

// Re-export commonly used types
pub use api::{
    ApiClient, ApiConfig, ApiError, DEFAULT_APP_ID, DEFAULT_BASE_URL, DEFAULT_SEARCH_DELAY,
    SearchClient, SearchResult, SearchResults, Token, TokenProvider,
};
pub use downloader::{
    CompletionPolicy, DEFAULT_DOWNLOADER_PROGRAM, Downloader, DownloaderError, DownloaderExit,
    TransmissionCli,
};
pub use error::{ErrorCategory, categorize};
pub use orchestrator::{
    Choice, ChoiceError, DEFAULT_MAX_PROMPT_ATTEMPTS, DownloadOrchestrator, DownloadSource,
    OrchestratorError, SessionOutcome, parse_choice,
};
pub use shopping_list::{
    SHOPPING_LIST_FILE_NAME, ShoppingList, ShoppingListEntry, ShoppingListError,
};
pub use user_agent::default_api_user_agent;
