//! Error types for the API client.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that can occur while talking to the torrent index.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS resolution, connection refused, TLS, timeout).
    #[error("network error requesting {endpoint}: {source}")]
    Network {
        /// Endpoint the request was sent to (without query string).
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status.
    #[error("HTTP {status} from {endpoint}")]
    Http {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body was not the JSON shape the protocol expects.
    #[error("unexpected response from {endpoint}: {reason}")]
    Protocol {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// What was wrong with the body.
        reason: String,
    },

    /// The API answered with an `error_code` payload.
    #[error("API error {code}: {message}")]
    Api {
        /// Value of the `error_code` field.
        code: i64,
        /// Value of the `error` field.
        message: String,
    },

    /// Configured base URL cannot be parsed.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Returns the shared category for this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } => ErrorCategory::Network,
            Self::Http { .. } | Self::Protocol { .. } | Self::Api { .. } => {
                ErrorCategory::Protocol
            }
            Self::InvalidBaseUrl { .. } | Self::Client(_) => ErrorCategory::Config,
        }
    }

    /// Returns the API-reported error code, when the API rejected the request.
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_code_and_text() {
        let err = ApiError::Api {
            code: 20,
            message: "No results found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("No results found"));
        assert_eq!(err.api_code(), Some(20));
        assert_eq!(err.category(), ErrorCategory::Protocol);
    }

    #[test]
    fn test_protocol_and_http_errors_are_protocol_category() {
        let protocol = ApiError::Protocol {
            endpoint: "https://example.test/api".to_string(),
            reason: "missing `token` field".to_string(),
        };
        let http = ApiError::Http {
            endpoint: "https://example.test/api".to_string(),
            status: 503,
        };
        assert_eq!(protocol.category(), ErrorCategory::Protocol);
        assert_eq!(http.category(), ErrorCategory::Protocol);
        assert!(http.to_string().contains("503"));
        assert_eq!(http.api_code(), None);
    }

    #[test]
    fn test_invalid_base_url_is_config_category() {
        let err = ApiError::InvalidBaseUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.to_string().contains("not a url"));
    }
}
