//! Shared runtime context built after CLI/config handling.

use trnt_core::{ApiError, DownloadOrchestrator, SearchClient, ShoppingList, TransmissionCli};

use crate::app::config_manager::ResolvedConfig;

/// Holds the collaborators every command needs so handlers take one argument.
pub(crate) struct RunContext {
    pub(crate) config: ResolvedConfig,
    pub(crate) shopping_list: ShoppingList,
    pub(crate) downloader: TransmissionCli,
}

impl RunContext {
    pub(crate) fn new(config: ResolvedConfig) -> Self {
        let shopping_list = ShoppingList::new(config.paths.shopping_list.clone());
        let downloader = TransmissionCli::new(config.downloader_program.clone());
        Self {
            config,
            shopping_list,
            downloader,
        }
    }

    /// Orchestrator wired to this run's shopping list, downloader and stop hook.
    pub(crate) fn orchestrator(&self) -> DownloadOrchestrator<'_> {
        DownloadOrchestrator::new(&self.shopping_list, &self.downloader)
            .with_stop_hook(self.config.paths.stop_hook.clone())
            .with_max_prompt_attempts(self.config.max_prompt_attempts)
    }

    /// Search client built from the resolved API settings.
    pub(crate) fn search_client(&self) -> Result<SearchClient, ApiError> {
        SearchClient::from_config(self.config.api.clone())
    }
}
