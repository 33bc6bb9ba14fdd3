//! Token-scoped torrent search.

use tracing::{debug, error, info, instrument};

use super::types::{SearchResponse, SearchResults};
use super::{ApiClient, ApiConfig, ApiError, TokenProvider};

/// Searches the torrent index, newest token per call.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: ApiClient,
}

impl SearchClient {
    /// Creates a search client over an existing API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Builds the API client from `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the API client cannot be built.
    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        ApiClient::new(config).map(Self::new)
    }

    /// Fetches a token, waits the configured delay, then searches `query`
    /// sorted by seeders.
    ///
    /// An empty `torrent_results` array is an empty result set, not an error.
    ///
    /// # Errors
    ///
    /// Fails fast on any token error, transport error, malformed body, or an
    /// `error_code` payload ([`ApiError::Api`]). No partial results are returned.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let token = match TokenProvider::new(&self.client).fetch_token().await {
            Ok(token) => token,
            Err(e) => {
                error!(category = %e.category(), error = %e, "Error getting token");
                return Err(e);
            }
        };

        let delay = self.client.config().search_delay;
        if !delay.is_zero() {
            debug!(delay = ?delay, "Waiting before search");
            tokio::time::sleep(delay).await;
        }

        let app_id = self.client.config().app_id.as_str();
        let response: SearchResponse = self
            .client
            .get_json(&[
                ("app_id", app_id),
                ("token", token.as_str()),
                ("mode", "search"),
                ("search_string", query),
                ("sort", "seeders"),
            ])
            .await?;

        let results = normalize_results(&self.client, response)?;
        info!(results = results.len(), "Search complete");
        Ok(results)
    }
}

fn normalize_results(
    client: &ApiClient,
    response: SearchResponse,
) -> Result<SearchResults, ApiError> {
    if let Some(code) = response.error_code {
        let message = response
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        error!(error_code = code, error = %message, "Search rejected by API");
        return Err(ApiError::Api { code, message });
    }

    let Some(torrents) = response.torrent_results else {
        return Err(client.protocol_error("missing `torrent_results` field"));
    };

    Ok(torrents.into_iter().map(Into::into).collect())
}
