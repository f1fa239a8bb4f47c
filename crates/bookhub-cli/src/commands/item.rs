//! Item command handlers

use anyhow::{Context, Result};

use bookhub_core::{Catalog, ItemId, ViewConfig};

use crate::output::Output;

/// List items matching the query, genre and kind selectors
pub fn list(
    catalog: &Catalog,
    query: Option<String>,
    genre: String,
    kind: String,
    output: &Output,
) -> Result<()> {
    let view = ViewConfig::parse(query.as_deref().unwrap_or(""), &genre, &kind)
        .context("Invalid filter")?;
    output.print_items(&catalog.filter(&view))
}

/// Show a single item
pub fn show(catalog: &Catalog, id: u32, output: &Output) -> Result<()> {
    let item = catalog
        .get(ItemId(id))
        .ok_or_else(|| anyhow::anyhow!("Item not found: {}", id))?;

    output.print_item(item)
}

/// List liked items
pub fn liked(catalog: &Catalog, output: &Output) -> Result<()> {
    output.print_items(&catalog.liked())
}

/// List bookmarked items
pub fn bookmarks(catalog: &Catalog, output: &Output) -> Result<()> {
    output.print_items(&catalog.bookmarked())
}
