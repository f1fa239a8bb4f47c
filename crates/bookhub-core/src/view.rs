//! View configuration
//!
//! The search text, genre selector and kind selector are owned by the
//! rendering layer and passed into `Catalog::filter`. The catalog itself
//! never holds selection state.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{Kind, LibraryItem};

/// Sentinels accepted for "every genre"
const GENRE_ALL: [&str; 3] = ["all", "все", ""];

/// Single-select genre filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn matches(&self, item: &LibraryItem) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => item.has_genre(genre),
        }
    }

    /// Display label, with the "All" sentinel rendered as in the genre list
    pub fn label(&self) -> &str {
        match self {
            GenreFilter::All => crate::seed::ALL_GENRES,
            GenreFilter::Only(genre) => genre,
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if GENRE_ALL.contains(&trimmed.to_lowercase().as_str()) {
            GenreFilter::All
        } else {
            GenreFilter::Only(trimmed.to_string())
        }
    }
}

/// Kind filter: everything, or one exact kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindFilter {
    #[default]
    All,
    Only(Kind),
}

impl KindFilter {
    pub fn matches(&self, item: &LibraryItem) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kind) => item.kind == *kind,
        }
    }

    /// Rotate All -> Book -> Manga -> All
    pub fn cycle(self) -> Self {
        match self {
            KindFilter::All => KindFilter::Only(Kind::Book),
            KindFilter::Only(Kind::Book) => KindFilter::Only(Kind::Manga),
            KindFilter::Only(Kind::Manga) => KindFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "Все",
            KindFilter::Only(Kind::Book) => "Книги",
            KindFilter::Only(Kind::Manga) => "Манга",
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.to_lowercase() == "все" {
            return Ok(KindFilter::All);
        }
        trimmed.parse::<Kind>().map(KindFilter::Only)
    }
}

/// Everything a rendering surface needs to ask the catalog for a view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Free text, matched case-insensitively against title or author
    pub query: String,
    pub genre: GenreFilter,
    pub kind: KindFilter,
}

impl ViewConfig {
    pub fn new(query: impl Into<String>, genre: GenreFilter, kind: KindFilter) -> Self {
        Self {
            query: query.into(),
            genre,
            kind,
        }
    }

    /// Build from the three raw selector strings
    pub fn parse(query: &str, genre: &str, kind: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(query, GenreFilter::from(genre), kind.parse()?))
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_genre(mut self, genre: GenreFilter) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    /// True when the view shows the whole catalog
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.genre == GenreFilter::All && self.kind == KindFilter::All
    }

    /// Combined predicate: query AND genre AND kind
    pub fn matches(&self, item: &LibraryItem) -> bool {
        self.matches_query(item) && self.genre.matches(item) && self.kind.matches(item)
    }

    fn matches_query(&self, item: &LibraryItem) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.title.to_lowercase().contains(&needle) || item.author.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berserk() -> LibraryItem {
        LibraryItem::builder(4, "Берсерк", "Кэнтаро Миура", Kind::Manga)
            .genres(["Темное фэнтези", "Сэйнэн"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_genre_sentinels() {
        assert_eq!(GenreFilter::from("All"), GenreFilter::All);
        assert_eq!(GenreFilter::from("all"), GenreFilter::All);
        assert_eq!(GenreFilter::from("Все"), GenreFilter::All);
        assert_eq!(GenreFilter::from(""), GenreFilter::All);
        assert_eq!(
            GenreFilter::from(" Сэйнэн "),
            GenreFilter::Only("Сэйнэн".to_string())
        );
    }

    #[test]
    fn test_kind_filter_parse() {
        assert_eq!("all".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!("ALL".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!("Все".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!(
            "book".parse::<KindFilter>().unwrap(),
            KindFilter::Only(Kind::Book)
        );
        assert!("comic".parse::<KindFilter>().is_err());
    }

    #[test]
    fn test_kind_filter_cycle() {
        let kind = KindFilter::All.cycle();
        assert_eq!(kind, KindFilter::Only(Kind::Book));
        let kind = kind.cycle();
        assert_eq!(kind, KindFilter::Only(Kind::Manga));
        assert_eq!(kind.cycle(), KindFilter::All);
    }

    #[test]
    fn test_query_matches_title_or_author_ignoring_case() {
        let item = berserk();
        assert!(ViewConfig::default().with_query("БЕРСЕРК").matches(&item));
        assert!(ViewConfig::default().with_query("миура").matches(&item));
        assert!(ViewConfig::default().with_query("серк").matches(&item));
        assert!(!ViewConfig::default().with_query("Ода").matches(&item));
    }

    #[test]
    fn test_predicates_are_anded() {
        let item = berserk();
        let view = ViewConfig::parse("берсерк", "Сэйнэн", "manga").unwrap();
        assert!(view.matches(&item));

        let view = ViewConfig::parse("берсерк", "Сэйнэн", "book").unwrap();
        assert!(!view.matches(&item));

        let view = ViewConfig::parse("берсерк", "Роман", "all").unwrap();
        assert!(!view.matches(&item));
    }

    #[test]
    fn test_query_whitespace_is_literal() {
        let item = berserk();
        // Padding is part of the needle, not stripped
        assert!(!ViewConfig::default().with_query(" берсерк ").matches(&item));
        assert!(!ViewConfig::default().with_query("миура  ").matches(&item));
        // A lone space matches "Кэнтаро Миура"
        assert!(ViewConfig::default().with_query(" ").matches(&item));
        assert!(ViewConfig::default().with_query("о М").matches(&item));
    }

    #[test]
    fn test_is_default() {
        assert!(ViewConfig::default().is_default());
        assert!(!ViewConfig::default().with_query("  ").is_default());
        assert!(!ViewConfig::default().with_kind(KindFilter::Only(Kind::Book)).is_default());
    }
}
