//! Genre command handler

use anyhow::Result;

use bookhub_core::{seed, Catalog, GenreFilter};

use crate::output::{GenreCount, Output};

/// List the genre selector entries with the number of items in each
pub fn list(catalog: &Catalog, output: &Output) -> Result<()> {
    output.print_genres(&genre_counts(catalog))
}

fn genre_counts(catalog: &Catalog) -> Vec<GenreCount> {
    seed::GENRES
        .iter()
        .map(|&name| {
            let count = match GenreFilter::from(name) {
                GenreFilter::All => catalog.len(),
                GenreFilter::Only(genre) => catalog.genre_count(&genre),
            };
            GenreCount {
                name: name.to_string(),
                count,
            }
        })
        .collect()
}
