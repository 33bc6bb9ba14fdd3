//! Wire payloads and normalized result types.

use serde::Deserialize;

/// Short-lived credential returned by the token request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One search hit, normalized from the API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Release name shown to the user (`filename` in the payload).
    pub display_name: String,
    /// Magnet link handed to the downloader (`download` in the payload).
    pub magnet_link: String,
}

/// Search hits keyed by zero-based rank, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    results: Vec<SearchResult>,
}

impl SearchResults {
    /// Wraps results already in rank order.
    #[must_use]
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Number of results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the search matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Looks a result up by rank.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&SearchResult> {
        self.results.get(rank)
    }

    /// Iterates `(rank, result)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SearchResult)> {
        self.results.iter().enumerate()
    }
}

impl FromIterator<SearchResult> for SearchResults {
    fn from_iter<I: IntoIterator<Item = SearchResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub(crate) torrent_results: Option<Vec<RawTorrent>>,
    pub(crate) error_code: Option<i64>,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTorrent {
    pub(crate) filename: String,
    pub(crate) download: String,
}

impl From<RawTorrent> for SearchResult {
    fn from(raw: RawTorrent) -> Self {
        Self {
            display_name: raw.filename,
            magnet_link: raw.download,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_ignores_extra_fields() {
        let body = r#"{"torrent_results":[{"filename":"A","category":"TV","download":"magnet:?xt=a"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let torrents = parsed.torrent_results.unwrap();
        assert_eq!(torrents.len(), 1);
        assert_eq!(torrents[0].filename, "A");
        assert!(parsed.error_code.is_none());
    }

    #[test]
    fn test_search_response_error_payload() {
        let body = r#"{"error":"No results found","error_code":20}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error_code, Some(20));
        assert_eq!(parsed.error.as_deref(), Some("No results found"));
        assert!(parsed.torrent_results.is_none());
    }

    #[test]
    fn test_search_results_iter_yields_ranks_in_order() {
        let results: SearchResults = ["first", "second"]
            .into_iter()
            .map(|name| SearchResult {
                display_name: name.to_string(),
                magnet_link: format!("magnet:?dn={name}"),
            })
            .collect();
        let ranks: Vec<(usize, &str)> = results
            .iter()
            .map(|(rank, r)| (rank, r.display_name.as_str()))
            .collect();
        assert_eq!(ranks, vec![(0, "first"), (1, "second")]);
        assert!(results.get(2).is_none());
    }
}
