//! Error types for shopping-list operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that can occur while reading or updating the shopping list.
#[derive(Debug, Error)]
pub enum ShoppingListError {
    /// Referenced id is not in the list.
    #[error(
        "torrent id {0} does not exist in the shopping list\n  Suggestion: Run `trnt --list` to see the stored ids"
    )]
    NotFound(u64),

    /// Document could not be read or written.
    #[error("IO error on shopping list {path}: {source}")]
    Io {
        /// Document path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Document exists but is not a valid id → entry mapping.
    #[error("shopping list {path} is corrupt: {source}")]
    Corrupt {
        /// Document path.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The largest id is already `u64::MAX`.
    #[error("no shopping list id left after {0}\n  Suggestion: Run `trnt --clear` to reset the list")]
    IdSpaceExhausted(u64),
}

impl ShoppingListError {
    /// Returns the shared category for this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Io { .. } | Self::Corrupt { .. } | Self::IdSpaceExhausted(_) => {
                ErrorCategory::Persistence
            }
        }
    }

    /// Returns true for the recoverable missing-id condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_and_category() {
        let err = ShoppingListError::NotFound(42);
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("Suggestion"));
        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn test_io_error_is_persistence() {
        let err = ShoppingListError::Io {
            path: PathBuf::from("/tmp/shopping_list.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::Persistence);
        assert!(err.to_string().contains("shopping_list.json"));
    }
}
