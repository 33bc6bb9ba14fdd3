//! Shared HTTP client for API requests.
//!
//! Centralizes timeouts, User-Agent and query construction so token and
//! search requests stay consistent.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::{ApiConfig, ApiError};

/// HTTP client bound to one API endpoint.
///
/// Created once per invocation and reused for the token and search requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    config: ApiConfig,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when `config.base_url` does not parse,
    /// or [`ApiError::Client`] when the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Endpoint without query string, safe to log (never contains a token).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds the request URL for the given query parameters.
    pub(crate) fn request_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(params);
        url
    }

    /// Sends one GET with `params` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] on transport failure, [`ApiError::Http`] on a
    /// non-success status and [`ApiError::Protocol`] when the body is not the
    /// expected JSON.
    #[instrument(level = "debug", skip(self, params), fields(endpoint = %self.endpoint()))]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.request_url(params);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                endpoint: self.endpoint().to_string(),
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "API response received");
        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                self.protocol_error(format!("invalid JSON: {source}"))
            } else {
                self.network_error(source)
            }
        })
    }

    pub(crate) fn protocol_error(&self, reason: impl Into<String>) -> ApiError {
        ApiError::Protocol {
            endpoint: self.endpoint().to_string(),
            reason: reason.into(),
        }
    }

    fn network_error(&self, source: reqwest::Error) -> ApiError {
        ApiError::Network {
            endpoint: self.endpoint().to_string(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unparseable_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let err = ApiClient::new(config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_request_url_appends_encoded_params() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        let url = client.request_url(&[
            ("app_id", "trnt"),
            ("mode", "search"),
            ("search_string", "The Office S02&x"),
        ]);
        assert_eq!(url.path(), "/pubapi_v2.php");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("app_id".to_string(), "trnt".to_string()),
                ("mode".to_string(), "search".to_string()),
                ("search_string".to_string(), "The Office S02&x".to_string()),
            ]
        );
    }

    #[test]
    fn test_endpoint_has_no_query_string() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(client.endpoint(), "https://torrentapi.org/pubapi_v2.php");
        let _ = client.request_url(&[("token", "secret")]);
        assert!(!client.endpoint().contains("secret"));
    }
}
