//! Client for the torrent index JSON API.
//!
//! The API is a two-step protocol: a short-lived token is requested first,
//! then a search is issued scoped to that token.
//!
//! # Overview
//!
//! - [`ApiClient`] - Shared HTTP client and query construction
//! - [`TokenProvider`] - Fetches a fresh token
//! - [`SearchClient`] - Fetches a token, waits the courtesy delay, searches
//! - [`SearchResults`] - Ranked results in API order
//!
//! # Example
//!
//! ```no_run
//! use trnt_core::api::{ApiConfig, SearchClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let search = SearchClient::from_config(ApiConfig::default())?;
//! let results = search.search("The.Office.S02").await?;
//! for (rank, result) in results.iter() {
//!     println!("{rank} : {}", result.display_name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod search;
mod token;
mod types;

use std::time::Duration;

pub use client::ApiClient;
pub use error::ApiError;
pub use search::SearchClient;
pub use token::TokenProvider;
pub use types::{SearchResult, SearchResults, Token};

/// Public endpoint of the torrent index API.
pub const DEFAULT_BASE_URL: &str = "https://torrentapi.org/pubapi_v2.php";

/// Application id sent with every request.
pub const DEFAULT_APP_ID: &str = "trnt";

/// Pause between token issuance and the search request.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Default HTTP connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Endpoint every request is sent to (token and search share it).
    pub base_url: String,
    /// Value of the `app_id` query parameter.
    pub app_id: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Delay between receiving a token and searching with it.
    pub search_delay: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub read_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            user_agent: crate::default_api_user_agent(),
            search_delay: DEFAULT_SEARCH_DELAY,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }
}
