//! Token acquisition.

use tracing::{debug, instrument};

use super::types::{Token, TokenResponse};
use super::{ApiClient, ApiError};

/// Fetches short-lived search tokens.
///
/// Tokens are not cached: each search session asks for a new one. No retry
/// is performed here; callers decide.
#[derive(Debug, Clone, Copy)]
pub struct TokenProvider<'a> {
    client: &'a ApiClient,
}

impl<'a> TokenProvider<'a> {
    /// Creates a provider over the given client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Requests `?app_id=<id>&get_token=get_token` and extracts `token`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] on transport failure; [`ApiError::Http`] or
    /// [`ApiError::Protocol`] when the response is not a JSON object with a
    /// non-empty `token` field.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_token(&self) -> Result<Token, ApiError> {
        let app_id = self.client.config().app_id.as_str();
        let response: TokenResponse = self
            .client
            .get_json(&[("app_id", app_id), ("get_token", "get_token")])
            .await?;

        match response.token {
            Some(token) if !token.is_empty() => {
                debug!(token = %token, "Got token");
                Ok(Token::new(token))
            }
            Some(_) => Err(self.client.protocol_error("empty `token` field")),
            None => Err(self.client.protocol_error("missing `token` field")),
        }
    }
}
