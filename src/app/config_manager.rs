//! Configuration lifecycle: load file config, merge CLI, resolve data paths.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use trnt_core::{
    ApiConfig, DEFAULT_DOWNLOADER_PROGRAM, DEFAULT_MAX_PROMPT_ATTEMPTS, SHOPPING_LIST_FILE_NAME,
};

use crate::app_config::{FileConfig, load_default_file_config};
use crate::cli::Args;

/// Stop hook file name inside the data directory.
pub(crate) const STOP_HOOK_FILE_NAME: &str = "stop_transmission.sh";

/// Log directory name inside the data directory.
pub(crate) const LOG_DIR_NAME: &str = "logs";

/// Files and directories the run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataPaths {
    pub(crate) data_dir: PathBuf,
    pub(crate) shopping_list: PathBuf,
    pub(crate) stop_hook: PathBuf,
    pub(crate) log_dir: PathBuf,
}

impl DataPaths {
    fn new(data_dir: PathBuf, stop_hook: Option<&Path>) -> Self {
        let stop_hook = match stop_hook {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(STOP_HOOK_FILE_NAME),
        };
        Self {
            shopping_list: data_dir.join(SHOPPING_LIST_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            stop_hook,
            data_dir,
        }
    }
}

/// Resolved configuration bundle used to build the run context.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) api: ApiConfig,
    pub(crate) paths: DataPaths,
    pub(crate) downloader_program: PathBuf,
    pub(crate) max_prompt_attempts: u32,
    pub(crate) config_path: Option<PathBuf>,
}

/// Load file config and merge CLI overrides.
/// Single entry point that returns a resolved config bundle.
pub(crate) fn resolve_config(args: &Args) -> Result<ResolvedConfig> {
    let loaded = load_default_file_config()?;
    let mut resolved = merge_config(args, loaded.config.as_ref(), executable_dir)?;
    resolved.config_path = loaded.path;
    Ok(resolved)
}

fn merge_config(
    args: &Args,
    file: Option<&FileConfig>,
    default_data_dir: impl FnOnce() -> Result<PathBuf>,
) -> Result<ResolvedConfig> {
    let file = file.cloned().unwrap_or_default();
    let defaults = ApiConfig::default();

    let api = ApiConfig {
        base_url: file.base_url.unwrap_or(defaults.base_url),
        app_id: file.app_id.unwrap_or(defaults.app_id),
        user_agent: file.user_agent.unwrap_or(defaults.user_agent),
        search_delay: file
            .search_delay_ms
            .map_or(defaults.search_delay, Duration::from_millis),
        connect_timeout: file
            .connect_timeout_secs
            .map_or(defaults.connect_timeout, Duration::from_secs),
        read_timeout: file
            .read_timeout_secs
            .map_or(defaults.read_timeout, Duration::from_secs),
    };

    let data_dir = match args.data_dir.clone().or(file.data_dir) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    Ok(ResolvedConfig {
        api,
        paths: DataPaths::new(data_dir, file.stop_hook.as_deref()),
        downloader_program: file
            .downloader
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOADER_PROGRAM)),
        max_prompt_attempts: file
            .max_prompt_attempts
            .unwrap_or(DEFAULT_MAX_PROMPT_ATTEMPTS),
        config_path: None,
    })
}

/// Directory containing the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the trnt executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["trnt", "-l"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn fixed_dir() -> Result<PathBuf> {
        Ok(PathBuf::from("/opt/trnt"))
    }

    #[test]
    fn test_merge_without_file_uses_defaults() {
        let resolved = merge_config(&args(&[]), None, fixed_dir).unwrap();
        assert_eq!(resolved.api, ApiConfig::default());
        assert_eq!(resolved.max_prompt_attempts, DEFAULT_MAX_PROMPT_ATTEMPTS);
        assert_eq!(
            resolved.downloader_program,
            PathBuf::from("transmission-cli")
        );
        assert_eq!(
            resolved.paths.shopping_list,
            PathBuf::from("/opt/trnt/shopping_list.json")
        );
        assert_eq!(
            resolved.paths.stop_hook,
            PathBuf::from("/opt/trnt/stop_transmission.sh")
        );
        assert_eq!(resolved.paths.log_dir, PathBuf::from("/opt/trnt/logs"));
    }

    #[test]
    fn test_merge_file_values_override_defaults() {
        let file = FileConfig {
            base_url: Some("http://127.0.0.1:9/api".to_string()),
            search_delay_ms: Some(0),
            read_timeout_secs: Some(5),
            data_dir: Some(PathBuf::from("/srv/trnt")),
            stop_hook: Some(PathBuf::from("hooks/stop.sh")),
            max_prompt_attempts: Some(3),
            ..FileConfig::default()
        };
        let resolved = merge_config(&args(&[]), Some(&file), fixed_dir).unwrap();
        assert_eq!(resolved.api.base_url, "http://127.0.0.1:9/api");
        assert_eq!(resolved.api.search_delay, Duration::ZERO);
        assert_eq!(resolved.api.read_timeout, Duration::from_secs(5));
        assert_eq!(resolved.paths.data_dir, PathBuf::from("/srv/trnt"));
        assert_eq!(
            resolved.paths.stop_hook,
            PathBuf::from("/srv/trnt/hooks/stop.sh")
        );
        assert_eq!(resolved.max_prompt_attempts, 3);
    }

    #[test]
    fn test_merge_cli_data_dir_wins_over_file() {
        let file = FileConfig {
            data_dir: Some(PathBuf::from("/srv/trnt")),
            stop_hook: Some(PathBuf::from("/etc/trnt/stop.sh")),
            ..FileConfig::default()
        };
        let resolved =
            merge_config(&args(&["--data-dir", "/tmp/list"]), Some(&file), fixed_dir).unwrap();
        assert_eq!(resolved.paths.data_dir, PathBuf::from("/tmp/list"));
        assert_eq!(resolved.paths.stop_hook, PathBuf::from("/etc/trnt/stop.sh"));
    }

    #[test]
    fn test_merge_propagates_data_dir_failure() {
        let result = merge_config(&args(&[]), None, || anyhow::bail!("no exe"));
        assert!(result.is_err());
    }

    #[test]
    fn test_executable_dir_exists() {
        assert!(executable_dir().unwrap().is_dir());
    }
}
