//! BookHub Core Library
//!
//! This crate provides the core of BookHub, a personal library browser for
//! books and manga.
//!
//! # Architecture
//!
//! - **Catalog**: the in-memory item collection, the only source of truth
//!
//! Rendering surfaces keep their own `ViewConfig` (search text, genre,
//! kind) and re-derive views from the catalog after every mutation.
//!
//! # Quick Start
//!
//! ```text
//! let mut catalog = Catalog::seeded()?;
//!
//! // Toggle flags
//! catalog.toggle_bookmark(ItemId(3))?;
//!
//! // Query views
//! let view = ViewConfig::parse("one piece", "All", "all")?;
//! let hits = catalog.filter(&view);
//! let liked = catalog.liked();
//! ```
//!
//! # Modules
//!
//! - `catalog`: the catalog store (main entry point)
//! - `models`: library items and their value types
//! - `view`: the view configuration passed into `Catalog::filter`
//! - `shared`: thread-safe catalog handle
//! - `seed`: the fixed seed entries and genre list
//! - `profile`: profile summary
//! - `reading`: read screen placeholders and preferences
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod profile;
pub mod reading;
pub mod seed;
pub mod shared;
pub mod view;

pub use catalog::{Catalog, CatalogStats};
pub use config::{Config, ProfileConfig, ReadingConfig};
pub use error::{CatalogError, CatalogResult};
pub use models::{CoverRef, ItemId, Kind, LibraryItem, Status};
pub use profile::ProfileSummary;
pub use reading::{MangaDirection, ReadingPlaceholder, TextSize};
pub use shared::SharedCatalog;
pub use view::{GenreFilter, KindFilter, ViewConfig};
