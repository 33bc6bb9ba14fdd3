//! Shared User-Agent string for requests to the torrent index.

/// Default User-Agent for API requests: `trnt/<version>`.
#[must_use]
pub fn default_api_user_agent() -> String {
    format!("trnt/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_user_agent_is_name_and_version() {
        let ua = default_api_user_agent();
        assert_eq!(ua, format!("trnt/{}", env!("CARGO_PKG_VERSION")));
        assert!(!ua.contains("http"), "UA must not advertise a project URL");
    }
}
