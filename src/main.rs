//! CLI entry point for trnt.

use std::process::ExitCode;

mod app;
mod app_config;
mod cli;
mod commands;

/// Process exit outcome for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Action completed.
    Success,
    /// Action failed; details were logged.
    Failure,
    /// Ctrl-C during the run.
    Interrupted,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::from(1),
            ProcessExit::Interrupted => ExitCode::from(130),
        }
    }
}

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Error: failed to start async runtime: {error}");
            return ProcessExit::Failure.into();
        }
    };

    let result = runtime.block_on(app::runtime::run_trnt());
    // A pending stdin read (interrupted prompt) cannot be cancelled; do not wait for it.
    runtime.shutdown_background();

    match result {
        Ok(exit) => exit.into(),
        Err(error) => {
            // Logging may not be initialized yet (e.g. invalid config file).
            eprintln!("Error: {error:#}");
            ProcessExit::Failure.into()
        }
    }
}
