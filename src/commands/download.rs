//! Download command handlers: one stored entry, the whole list, a raw magnet link.

use anyhow::{Context, Result};
use tracing::info;

use crate::ProcessExit;
use crate::app::context::RunContext;

pub async fn run_download_command(ctx: &RunContext, id: u64) -> Result<ProcessExit> {
    let exit = ctx
        .orchestrator()
        .download_entry(id, &mut std::io::stdout())
        .await
        .with_context(|| format!("Failed to download shopping-list entry {id}"))?;
    info!(id, %exit, "Download finished");
    Ok(ProcessExit::Success)
}

pub async fn run_download_all_command(ctx: &RunContext) -> Result<ProcessExit> {
    let count = ctx
        .orchestrator()
        .download_all(&mut std::io::stdout())
        .await
        .context("Failed to download shopping list")?;
    if count == 0 {
        println!("Shopping list is empty");
    }
    Ok(ProcessExit::Success)
}

pub async fn run_magnet_command(ctx: &RunContext, magnet_link: &str) -> Result<ProcessExit> {
    let exit = ctx
        .orchestrator()
        .download_magnet(magnet_link, &mut std::io::stdout())
        .await
        .context("Failed to download magnet link")?;
    info!(%exit, "Download finished");
    Ok(ProcessExit::Success)
}
