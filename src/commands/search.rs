//! Search command handler: one interactive session over the results.

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::info;
use trnt_core::SessionOutcome;

use crate::ProcessExit;
use crate::app::context::RunContext;

pub async fn run_search_command(ctx: &RunContext, query: &str) -> Result<ProcessExit> {
    info!(query, "Searching");
    let search = ctx.search_client()?;
    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();

    let outcome = ctx
        .orchestrator()
        .search_and_choose(&search, query, &mut input, &mut output)
        .await
        .with_context(|| format!("Search session for '{query}' failed"))?;

    match outcome {
        SessionOutcome::NoResults => info!(query, "No results"),
        SessionOutcome::Downloaded { rank, exit } => info!(rank, %exit, "Download finished"),
        SessionOutcome::Stored { rank, id } => info!(rank, id, "Stored for later"),
        SessionOutcome::Quit => info!("Quit without choosing"),
    }
    Ok(ProcessExit::Success)
}
