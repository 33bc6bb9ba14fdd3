//! CLI command handlers.

mod download;
mod logs;
mod search;
mod shopping;

pub use download::{run_download_all_command, run_download_command, run_magnet_command};
pub use logs::run_logs_command;
pub use search::run_search_command;
pub use shopping::{run_clear_command, run_list_command, run_remove_command};
