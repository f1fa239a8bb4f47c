//! Shared catalog handle
//!
//! For embedders with more than one client. Every mutation is a single
//! read-modify-write under one lock, so concurrent toggles never lose
//! updates and the last toggle wins. Views are returned as owned clones.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::{Catalog, CatalogStats};
use crate::error::CatalogResult;
use crate::models::{ItemId, LibraryItem};
use crate::view::ViewConfig;

/// Cloneable, thread-safe handle to one catalog
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    // A toggle cannot leave an item half-written, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn toggle_bookmark(&self, id: ItemId) -> CatalogResult<LibraryItem> {
        self.lock().toggle_bookmark(id).cloned()
    }

    pub fn toggle_like(&self, id: ItemId) -> CatalogResult<LibraryItem> {
        self.lock().toggle_like(id).cloned()
    }

    pub fn get(&self, id: ItemId) -> Option<LibraryItem> {
        self.lock().get(id).cloned()
    }

    pub fn filter(&self, view: &ViewConfig) -> Vec<LibraryItem> {
        self.lock().filter(view).into_iter().cloned().collect()
    }

    pub fn liked(&self) -> Vec<LibraryItem> {
        self.lock().liked().into_iter().cloned().collect()
    }

    pub fn bookmarked(&self) -> Vec<LibraryItem> {
        self.lock().bookmarked().into_iter().cloned().collect()
    }

    pub fn stats(&self) -> CatalogStats {
        self.lock().stats()
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedCatalog::new(Catalog::seeded().unwrap());
        let other = shared.clone();

        let updated = other.toggle_bookmark(ItemId(2)).unwrap();
        assert!(updated.bookmarked);
        assert!(shared.get(ItemId(2)).unwrap().bookmarked);
        assert_eq!(shared.bookmarked().len(), 4);
    }

    #[test]
    fn test_missing_id() {
        let shared = SharedCatalog::new(Catalog::seeded().unwrap());
        assert!(shared.toggle_like(ItemId(42)).is_err());
        assert!(shared.get(ItemId(42)).is_none());
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let shared = SharedCatalog::new(Catalog::seeded().unwrap());
        let before = shared.get(ItemId(1)).unwrap().liked;

        // 8 threads x 25 toggles = 200 flips: an even count restores the flag
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        handle.toggle_like(ItemId(1)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.get(ItemId(1)).unwrap().liked, before);
        assert_eq!(shared.stats().liked, shared.liked().len());
    }

    #[test]
    fn test_filter_returns_owned_snapshot() {
        let shared = SharedCatalog::from(Catalog::seeded().unwrap());
        let snapshot = shared.filter(&ViewConfig::default());
        shared.toggle_bookmark(ItemId(3)).unwrap();

        // The snapshot is not affected by later mutations
        assert!(snapshot[2].bookmarked);
        assert!(!shared.get(ItemId(3)).unwrap().bookmarked);
    }
}
