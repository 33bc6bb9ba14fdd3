//! Logs command handler: prints the rotated log files, oldest first.

use std::fs;
use std::io::ErrorKind;

use anyhow::{Context, Result};

use crate::ProcessExit;
use crate::app::context::RunContext;
use crate::app::terminal::collect_log_files;

pub fn run_logs_command(ctx: &RunContext) -> Result<ProcessExit> {
    let log_dir = &ctx.config.paths.log_dir;
    let files = match collect_log_files(log_dir) {
        Ok(files) => files,
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", log_dir.display()));
        }
    };

    if files.is_empty() {
        println!("No logs yet in {}", log_dir.display());
        return Ok(ProcessExit::Success);
    }
    for file in files {
        let contents = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read log file {}", file.display()))?;
        println!("==> {} <==", file.display());
        print!("{contents}");
    }
    Ok(ProcessExit::Success)
}
