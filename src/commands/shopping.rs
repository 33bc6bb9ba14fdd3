//! Shopping-list command handlers: list, remove, clear.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::ProcessExit;
use crate::app::context::RunContext;

pub fn run_list_command(ctx: &RunContext) -> Result<ProcessExit> {
    let entries = ctx
        .shopping_list
        .list()
        .context("Failed to read shopping list")?;

    if entries.is_empty() {
        println!("Shopping list is empty");
        return Ok(ProcessExit::Success);
    }
    for (id, name) in entries {
        println!("{id} {name}");
    }
    Ok(ProcessExit::Success)
}

/// Removing an id that is not stored is reported but does not fail the run.
pub fn run_remove_command(ctx: &RunContext, id: u64) -> Result<ProcessExit> {
    match ctx.shopping_list.remove(id) {
        Ok(entry) => {
            println!("Removed {} {}", entry.id, entry.name);
            Ok(ProcessExit::Success)
        }
        Err(e) if e.is_not_found() => {
            error!(category = %e.category(), id, "{e}");
            Ok(ProcessExit::Success)
        }
        Err(e) => Err(e).context("Failed to update shopping list"),
    }
}

pub fn run_clear_command(ctx: &RunContext) -> Result<ProcessExit> {
    let removed = ctx
        .shopping_list
        .clear()
        .context("Failed to clear shopping list")?;
    info!(removed, "Shopping list cleared");
    println!("Shopping list cleared");
    Ok(ProcessExit::Success)
}
