use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use crate::ProcessExit;
use crate::app::{command_dispatcher, config_manager, context, exit_handler, terminal};
use crate::cli::Args;

pub(crate) async fn run_trnt() -> Result<ProcessExit> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let resolved = config_manager::resolve_config(&args)?;

    let default_level = terminal::resolve_default_log_level(args.verbose, args.quiet);
    let _log_guard = terminal::init_tracing(default_level, Some(&resolved.paths.log_dir));

    debug!(?args, "CLI arguments parsed");
    debug!(
        config = ?resolved.config_path,
        data_dir = %resolved.paths.data_dir.display(),
        "Configuration resolved"
    );

    let ctx = context::RunContext::new(resolved);
    let action = args.action();

    let outcome = tokio::select! {
        result = command_dispatcher::dispatch(&ctx, action) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("Interrupted");
            warn!("Interrupted by user");
            return Ok(ProcessExit::Interrupted);
        }
    };

    match outcome {
        Ok(exit) => {
            debug!(?exit, "trnt finished");
            Ok(exit)
        }
        Err(error) => Ok(exit_handler::report_failure(&error)),
    }
}
