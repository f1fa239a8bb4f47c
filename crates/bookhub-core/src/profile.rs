//! Profile summary
//!
//! What the profile surface shows: who the reader is and the catalog counts.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::CatalogStats;
use crate::config::ProfileConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    /// Avatar fallback: first letters of the first two words
    pub initials: String,
    pub reader_since: i32,
    pub stats: CatalogStats,
    pub favorite_genres: Vec<String>,
}

impl ProfileSummary {
    pub fn new(profile: &ProfileConfig, stats: CatalogStats) -> Self {
        Self {
            name: profile.name.clone(),
            initials: initials(&profile.name),
            reader_since: profile.reader_since,
            stats,
            favorite_genres: profile.favorite_genres.clone(),
        }
    }

    /// "Читатель с 2020 года"
    pub fn reader_since_label(&self) -> String {
        format!("Читатель с {} года", self.reader_since)
    }

    /// Whole years since `reader_since`, never negative
    pub fn years_reading(&self, today: NaiveDate) -> u32 {
        u32::try_from(today.year() - self.reader_since).unwrap_or(0)
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
