//! Shopping-list entry and its on-disk shape.

use serde::{Deserialize, Serialize};

/// A torrent waiting in the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListEntry {
    /// Unique identifier within the list.
    pub id: u64,
    /// Release name as shown in search results.
    pub name: String,
    /// Magnet link passed to the downloader.
    pub magnet_link: String,
    /// Unix timestamp (seconds) of when the entry was stored.
    pub added_at: i64,
}

/// Value stored under each id key of the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredEntry {
    pub(crate) name: String,
    pub(crate) magnet: String,
    pub(crate) added: i64,
}

impl StoredEntry {
    pub(crate) fn into_entry(self, id: u64) -> ShoppingListEntry {
        ShoppingListEntry {
            id,
            name: self.name,
            magnet_link: self.magnet,
            added_at: self.added,
        }
    }
}
