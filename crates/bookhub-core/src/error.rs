//! Catalog error handling
//!
//! Typed errors for catalog construction and mutation. Only `NotFound`
//! can occur at runtime once a catalog exists, and callers are free to
//! ignore it.

use thiserror::Error;

use crate::models::ItemId;

/// Errors that can occur while building or mutating a catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No item with this id exists in the catalog
    #[error("No item with id {0}")]
    NotFound(ItemId),

    /// Two seed items share the same id
    #[error("Duplicate item id {0}")]
    DuplicateId(ItemId),

    /// Rating is outside the 0.0-5.0 range (or NaN)
    #[error("Rating {rating} for item {id} is outside 0.0-5.0")]
    InvalidRating { id: ItemId, rating: f32 },

    /// An item must carry at least one genre
    #[error("Item {0} has no genres")]
    EmptyGenres(ItemId),

    /// Kind selector did not name a known kind
    #[error("Unknown kind '{0}'. Use 'all', 'book' or 'manga'.")]
    UnknownKind(String),

    /// Status string did not name a known status
    #[error("Unknown status '{0}'. Use 'ongoing' or 'completed'.")]
    UnknownStatus(String),

    #[error("Unknown text size '{0}'. Use 'small', 'medium' or 'large'.")]
    UnknownTextSize(String),

    #[error("Unknown manga direction '{0}'. Use 'right_to_left' or 'left_to_right'.")]
    UnknownMangaDirection(String),
}

impl CatalogError {
    /// Whether the caller can safely ignore this error
    ///
    /// Toggling a missing id is the only error the rendering surfaces
    /// can trigger, and they only present ids taken from the catalog.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_ignorable() {
        assert!(CatalogError::NotFound(ItemId(9)).is_ignorable());
        assert!(!CatalogError::DuplicateId(ItemId(1)).is_ignorable());
        assert!(!CatalogError::EmptyGenres(ItemId(1)).is_ignorable());
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::InvalidRating {
            id: ItemId(4),
            rating: 7.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("7.5"));
        assert!(msg.contains("item 4"));

        let err = CatalogError::UnknownKind("comic".to_string());
        assert!(err.to_string().contains("'comic'"));

        let err = CatalogError::UnknownTextSize("huge".to_string());
        assert!(err.to_string().contains("'huge'"));
    }
}
