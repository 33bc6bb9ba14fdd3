//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};

/// Search a torrent index, then download now or keep a shopping list for later.
///
/// Exactly one action per invocation.
#[derive(Parser, Debug)]
#[command(name = "trnt")]
#[command(version, about)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(false)
        .args(["search", "list", "download", "download_all", "remove", "clear", "magnet", "logs"])
))]
pub struct Args {
    /// Search the torrent index, then download (d) or store (s) a result
    #[arg(short = 's', long, value_name = "QUERY", value_parser = NonEmptyStringValueParser::new())]
    pub search: Option<String>,

    /// List torrents in the shopping list
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Download the shopping-list torrent with this id
    #[arg(short = 'd', long, value_name = "ID")]
    pub download: Option<u64>,

    /// Download all torrents in the shopping list
    #[arg(short = 'a', long, visible_alias = "dl")]
    pub download_all: bool,

    /// Remove the torrent with this id from the shopping list
    #[arg(short = 'r', long, value_name = "ID")]
    pub remove: Option<u64>,

    /// Empty the shopping list
    #[arg(long)]
    pub clear: bool,

    /// Download a torrent from a magnet link
    #[arg(long, value_name = "LINK", value_parser = NonEmptyStringValueParser::new())]
    pub magnet: Option<String>,

    /// Show logs
    #[arg(long)]
    pub logs: bool,

    /// Directory holding the shopping list, stop hook and logs (default: next to the executable)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// The single action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    List,
    Download(u64),
    DownloadAll,
    Remove(u64),
    Clear,
    Magnet(String),
    Logs,
}

impl Args {
    /// Returns the selected action. The `action` group guarantees exactly one is set.
    #[must_use]
    pub fn action(&self) -> Action {
        if let Some(query) = &self.search {
            Action::Search(query.clone())
        } else if let Some(id) = self.download {
            Action::Download(id)
        } else if let Some(id) = self.remove {
            Action::Remove(id)
        } else if let Some(link) = &self.magnet {
            Action::Magnet(link.clone())
        } else if self.download_all {
            Action::DownloadAll
        } else if self.clear {
            Action::Clear
        } else if self.logs {
            Action::Logs
        } else {
            Action::List
        }
    }
}
