//! CLI command routing: runs the one action selected on the command line.

use anyhow::Result;

use crate::app::context::RunContext;
use crate::cli::Action;
use crate::{ProcessExit, commands};

/// Runs `action` and returns the exit outcome.
pub(crate) async fn dispatch(ctx: &RunContext, action: Action) -> Result<ProcessExit> {
    match action {
        Action::Search(query) => commands::run_search_command(ctx, &query).await,
        Action::List => commands::run_list_command(ctx),
        Action::Download(id) => commands::run_download_command(ctx, id).await,
        Action::DownloadAll => commands::run_download_all_command(ctx).await,
        Action::Remove(id) => commands::run_remove_command(ctx, id),
        Action::Clear => commands::run_clear_command(ctx),
        Action::Magnet(link) => commands::run_magnet_command(ctx, &link).await,
        Action::Logs => commands::run_logs_command(ctx),
    }
}
