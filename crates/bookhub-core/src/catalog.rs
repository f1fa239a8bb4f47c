//! The catalog store
//!
//! `Catalog` holds the authoritative list of library items for a session.
//! Items live in an id-indexed map so toggles are O(1); a separate order
//! list keeps the display order of the seed.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = Catalog::seeded()?;
//!
//! // Mutate
//! catalog.toggle_like(ItemId(3))?;
//!
//! // Derive views (re-derive after every mutation)
//! let view = ViewConfig::parse("", "All", "book")?;
//! let books = catalog.filter(&view);
//! let liked = catalog.liked();
//! ```

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{ItemId, LibraryItem};
use crate::seed;
use crate::view::ViewConfig;

/// Counts shown on the profile and collection surfaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub liked: usize,
    pub bookmarked: usize,
}

/// In-memory catalog of library items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Items by id
    items: HashMap<ItemId, LibraryItem>,
    /// Display order
    order: Vec<ItemId>,
}

impl Catalog {
    /// Build a catalog from items in display order
    ///
    /// Fails if two items share an id.
    pub fn new(items: impl IntoIterator<Item = LibraryItem>) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        for item in items {
            if catalog.items.contains_key(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            catalog.order.push(item.id);
            catalog.items.insert(item.id, item);
        }
        debug!("Catalog built with {} items", catalog.len());
        Ok(catalog)
    }

    /// Build the catalog every session starts from
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(seed::items()?)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get an item by id
    pub fn get(&self, id: ItemId) -> Option<&LibraryItem> {
        self.items.get(&id)
    }

    /// All items in display order
    pub fn items(&self) -> Vec<&LibraryItem> {
        self.iter().collect()
    }

    fn iter(&self) -> impl Iterator<Item = &LibraryItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    // ==================== Mutations ====================

    /// Flip `bookmarked` on one item and return the updated item
    pub fn toggle_bookmark(&mut self, id: ItemId) -> CatalogResult<&LibraryItem> {
        let item = self.item_mut(id)?;
        item.bookmarked = !item.bookmarked;
        debug!(id = %id, bookmarked = item.bookmarked, "Toggled bookmark");
        Ok(item)
    }

    /// Flip `liked` on one item and return the updated item
    pub fn toggle_like(&mut self, id: ItemId) -> CatalogResult<&LibraryItem> {
        let item = self.item_mut(id)?;
        item.liked = !item.liked;
        debug!(id = %id, liked = item.liked, "Toggled like");
        Ok(item)
    }

    fn item_mut(&mut self, id: ItemId) -> CatalogResult<&mut LibraryItem> {
        self.items.get_mut(&id).ok_or_else(|| {
            warn!(id = %id, "Toggle ignored: no such item");
            CatalogError::NotFound(id)
        })
    }

    // ==================== Views ====================

    /// Items matching the view, in display order
    pub fn filter(&self, view: &ViewConfig) -> Vec<&LibraryItem> {
        self.iter().filter(|item| view.matches(item)).collect()
    }

    /// Liked items, in display order
    pub fn liked(&self) -> Vec<&LibraryItem> {
        self.iter().filter(|item| item.liked).collect()
    }

    /// Bookmarked items, in display order
    pub fn bookmarked(&self) -> Vec<&LibraryItem> {
        self.iter().filter(|item| item.bookmarked).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        self.iter().fold(
            CatalogStats {
                total: self.len(),
                ..CatalogStats::default()
            },
            |mut stats, item| {
                stats.liked += usize::from(item.liked);
                stats.bookmarked += usize::from(item.bookmarked);
                stats
            },
        )
    }

    /// Distinct genres present in the catalog, in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for genre in self.iter().flat_map(|item| item.genres.iter()) {
            if !genres.contains(&genre.as_str()) {
                genres.push(genre);
            }
        }
        genres
    }

    /// Number of items carrying the genre
    pub fn genre_count(&self, genre: &str) -> usize {
        self.iter().filter(|item| item.has_genre(genre)).count()
    }
}
