//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// TOML-backed file configuration for trnt defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Torrent index API endpoint.
    pub base_url: Option<String>,
    /// `app_id` sent with every request.
    pub app_id: Option<String>,
    /// User-Agent header for API requests.
    pub user_agent: Option<String>,
    /// Pause between token and search requests in milliseconds.
    pub search_delay_ms: Option<u64>,
    /// API client connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// API client read timeout in seconds.
    pub read_timeout_secs: Option<u64>,
    /// Directory for the shopping list, stop hook and logs.
    pub data_dir: Option<PathBuf>,
    /// Download client program.
    pub downloader: Option<PathBuf>,
    /// Script the download client runs on completion (relative to `data_dir`).
    pub stop_hook: Option<PathBuf>,
    /// Cap on invalid answers at the result prompt (0 = unbounded).
    pub max_prompt_attempts: Option<u32>,
}

impl FileConfig {
    /// Validates config values against runtime constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = self.base_url.as_deref() {
            let parsed = url::Url::parse(base_url).with_context(|| {
                format!("Invalid config value for `base_url`: '{base_url}'")
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                bail!(
                    "Invalid config value for `base_url`: '{base_url}'. Expected an http or https URL"
                );
            }
        }

        if let Some(app_id) = self.app_id.as_deref()
            && app_id.trim().is_empty()
        {
            bail!("Invalid config value for `app_id`: must not be empty");
        }

        if let Some(delay) = self.search_delay_ms
            && delay > 60_000
        {
            bail!("Invalid config value for `search_delay_ms`: {delay}. Expected range: 0..=60000");
        }

        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;

        if let Some(attempts) = self.max_prompt_attempts
            && attempts > 1_000
        {
            bail!(
                "Invalid config value for `max_prompt_attempts`: {attempts}. Expected range: 0..=1000"
            );
        }

        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/trnt/config.toml`
/// 2. `$HOME/.config/trnt/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home).join("trnt").join("config.toml"));
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("trnt")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let config = match path.as_deref() {
        Some(path_ref) if path_ref.exists() => Some(load_file_config(path_ref)?),
        _ => None,
    };
    Ok(LoadedConfig { path, config })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_is_default() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            # torrent index
            base_url = "http://127.0.0.1:8080/pubapi_v2.php"
            app_id = "trnt"
            user_agent = "trnt"
            search_delay_ms = 0
            connect_timeout_secs = 5
            read_timeout_secs = 20
            data_dir = "/var/lib/trnt"
            downloader = "/usr/bin/transmission-cli"
            stop_hook = "hooks/stop.sh"
            max_prompt_attempts = 0
        "#;
        let config = parse_config_str(raw).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://127.0.0.1:8080/pubapi_v2.php")
        );
        assert_eq!(config.search_delay_ms, Some(0));
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/trnt")));
        assert_eq!(config.stop_hook, Some(PathBuf::from("hooks/stop.sh")));
        assert_eq!(config.max_prompt_attempts, Some(0));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = parse_config_str("concurrency = 4").unwrap_err();
        assert!(format!("{err:#}").contains("concurrency"));
    }

    #[test]
    fn test_parse_rejects_bad_base_url() {
        let err = parse_config_str(r#"base_url = "not a url""#).unwrap_err();
        assert!(format!("{err:#}").contains("base_url"));

        let err = parse_config_str(r#"base_url = "ftp://example.com/api""#).unwrap_err();
        assert!(format!("{err:#}").contains("http or https"));
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert!(parse_config_str("search_delay_ms = 60001").is_err());
        assert!(parse_config_str("connect_timeout_secs = 0").is_err());
        assert!(parse_config_str("read_timeout_secs = 3601").is_err());
        assert!(parse_config_str("max_prompt_attempts = 1001").is_err());
        assert!(parse_config_str(r#"app_id = "  ""#).is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert!(parse_config_str(r#"search_delay_ms = "fast""#).is_err());
    }
}
