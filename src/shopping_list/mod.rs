//! Shopping list of torrents kept for later download.
//!
//! The list is a single JSON document mapping string-encoded ids to entries:
//!
//! ```json
//! {"0": {"name": "Show.S01", "magnet": "magnet:?xt=...", "added": 1700000000}}
//! ```
//!
//! Every operation loads the whole document, works on the in-memory copy and,
//! for mutations, writes the complete new document back. The file on disk is
//! the only source of truth; nothing is cached between calls.
//!
//! New ids are `max(existing) + 1`, or `0` for an empty list. Ids freed by
//! removal are not reused unless they sit above the current maximum.
//!
//! There is no cross-process locking: two concurrent `trnt` processes against
//! the same document can lose updates.

mod entry;
mod error;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub use entry::ShoppingListEntry;
pub use error::ShoppingListError;

use entry::StoredEntry;
use tracing::{debug, info, instrument};

/// File name of the shopping-list document inside the data directory.
pub const SHOPPING_LIST_FILE_NAME: &str = "shopping_list.json";

/// Result type for shopping-list operations.
pub type Result<T> = std::result::Result<T, ShoppingListError>;

type Document = BTreeMap<u64, StoredEntry>;

/// Handle on the shopping-list document at a fixed path.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    path: PathBuf,
}

impl ShoppingList {
    /// Creates a handle; the document is not touched until an operation runs.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a handle on `shopping_list.json` inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SHOPPING_LIST_FILE_NAME))
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores a new entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the document cannot be read or written.
    #[instrument(skip(self, magnet_link))]
    pub fn add(&self, name: &str, magnet_link: &str) -> Result<u64> {
        let mut document = self.load()?;
        let id = next_id(&document)?;
        document.insert(
            id,
            StoredEntry {
                name: name.to_string(),
                magnet: magnet_link.to_string(),
                added: unix_now(),
            },
        );
        self.store(&document)?;
        info!(id, name, "Added to shopping list");
        Ok(id)
    }

    /// Returns `(id, name)` pairs sorted by id.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the document cannot be read.
    pub fn list(&self) -> Result<Vec<(u64, String)>> {
        Ok(self
            .load()?
            .into_iter()
            .map(|(id, stored)| (id, stored.name))
            .collect())
    }

    /// Returns every entry sorted by id.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the document cannot be read.
    pub fn entries(&self) -> Result<Vec<ShoppingListEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .map(|(id, stored)| stored.into_entry(id))
            .collect())
    }

    /// Looks up one entry.
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::NotFound`] if `id` is absent; persistence errors otherwise.
    pub fn get(&self, id: u64) -> Result<ShoppingListEntry> {
        self.load()?
            .remove(&id)
            .map(|stored| stored.into_entry(id))
            .ok_or(ShoppingListError::NotFound(id))
    }

    /// Deletes one entry and returns it.
    ///
    /// The document is left untouched when `id` is absent.
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::NotFound`] if `id` is absent; persistence errors otherwise.
    #[instrument(skip(self))]
    pub fn remove(&self, id: u64) -> Result<ShoppingListEntry> {
        let mut document = self.load()?;
        let stored = document
            .remove(&id)
            .ok_or(ShoppingListError::NotFound(id))?;
        self.store(&document)?;
        info!(id, name = %stored.name, "Removed from shopping list");
        Ok(stored.into_entry(id))
    }

    /// Removes every entry and returns how many there were.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the document cannot be read or written.
    pub fn clear(&self) -> Result<usize> {
        let removed = self.load()?.len();
        self.store(&Document::new())?;
        info!(removed, "Shopping list cleared");
        Ok(removed)
    }

    fn load(&self) -> Result<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No shopping list yet");
                return Ok(Document::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&raw).map_err(|source| ShoppingListError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the full document to a sibling temp file, then renames it over
    /// the target so readers only ever see a complete document.
    fn store(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let bytes = serde_json::to_vec_pretty(document).map_err(|source| {
            ShoppingListError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.temp_path();
        let write_tmp = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()
        };
        write_tmp().map_err(|source| self.io_error(source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| self.io_error(source))?;
        debug!(entries = document.len(), "Shopping list written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> ShoppingListError {
        ShoppingListError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn next_id(document: &Document) -> Result<u64> {
    match document.keys().next_back() {
        None => Ok(0),
        Some(&max) => max
            .checked_add(1)
            .ok_or(ShoppingListError::IdSpaceExhausted(max)),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
        })
}
