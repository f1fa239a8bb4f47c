//! Data models for BookHub
//!
//! Defines the catalog entry (`LibraryItem`) and its value types.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Glyph shown for items whose cover is an image, on surfaces that only draw text
const IMAGE_COVER_GLYPH: &str = "📖";

/// Prefix marking a cover as an image resource rather than a glyph
const IMAGE_PREFIX: &str = "/img/";

/// Unique, immutable identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Book vs manga classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Book,
    Manga,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Book => "book",
            Kind::Manga => "manga",
        }
    }

    /// Display label used by the rendering surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Book => "Книга",
            Kind::Manga => "Манга",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Kind::Book),
            "manga" => Ok(Kind::Manga),
            _ => Err(CatalogError::UnknownKind(value.trim().to_string())),
        }
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ongoing,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ongoing => "ongoing",
            Status::Completed => "completed",
        }
    }

    /// Display label used by the rendering surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ongoing => "Онгоинг",
            Status::Completed => "Завершён",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ongoing" => Ok(Status::Ongoing),
            "completed" => Ok(Status::Completed),
            _ => Err(CatalogError::UnknownStatus(value.trim().to_string())),
        }
    }
}

/// Cover of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverRef {
    /// Image resource locator
    Image(String),
    /// Inline glyph fallback
    Glyph(String),
}

impl CoverRef {
    /// Classify a raw cover string: `/img/...` is an image, anything else a glyph
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with(IMAGE_PREFIX) {
            CoverRef::Image(raw)
        } else {
            CoverRef::Glyph(raw)
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, CoverRef::Image(_))
    }

    /// Glyph to draw on text-only surfaces
    pub fn glyph(&self) -> &str {
        match self {
            CoverRef::Image(_) => IMAGE_COVER_GLYPH,
            CoverRef::Glyph(glyph) => glyph,
        }
    }
}

impl Default for CoverRef {
    fn default() -> Self {
        CoverRef::Glyph(IMAGE_COVER_GLYPH.to_string())
    }
}

/// A catalog entry: one book or manga
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryItem {
    /// Unique identifier, fixed at creation
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub kind: Kind,
    /// Score in 0.0-5.0
    pub rating: f32,
    /// Number of chapters
    pub unit_count: u32,
    pub status: Status,
    /// Ordered set of genre tags, in display order
    pub genres: Vec<String>,
    pub bookmarked: bool,
    pub liked: bool,
    pub cover: CoverRef,
    pub description: String,
}

impl LibraryItem {
    /// Start building an item with the required fields
    pub fn builder(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: Kind,
    ) -> ItemBuilder {
        ItemBuilder {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            kind,
            rating: 0.0,
            unit_count: 0,
            status: Status::Ongoing,
            genres: Vec::new(),
            bookmarked: false,
            liked: false,
            cover: CoverRef::default(),
            description: String::new(),
        }
    }

    /// Exact genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Builder for `LibraryItem`
///
/// `build()` enforces the rating range and non-empty genres.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: ItemId,
    title: String,
    author: String,
    kind: Kind,
    rating: f32,
    unit_count: u32,
    status: Status,
    genres: Vec<String>,
    bookmarked: bool,
    liked: bool,
    cover: CoverRef,
    description: String,
}

impl ItemBuilder {
    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn unit_count(mut self, unit_count: u32) -> Self {
        self.unit_count = unit_count;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Add a genre (duplicates are ignored, first occurrence keeps its place)
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
        self
    }

    pub fn genres<I, S>(self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        genres.into_iter().fold(self, |builder, g| builder.genre(g))
    }

    pub fn bookmarked(mut self, bookmarked: bool) -> Self {
        self.bookmarked = bookmarked;
        self
    }

    pub fn liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    pub fn cover(mut self, cover: CoverRef) -> Self {
        self.cover = cover;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn build(self) -> CatalogResult<LibraryItem> {
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::InvalidRating {
                id: self.id,
                rating: self.rating,
            });
        }
        if self.genres.is_empty() {
            return Err(CatalogError::EmptyGenres(self.id));
        }

        Ok(LibraryItem {
            id: self.id,
            title: self.title,
            author: self.author,
            kind: self.kind,
            rating: self.rating,
            unit_count: self.unit_count,
            status: self.status,
            genres: self.genres,
            bookmarked: self.bookmarked,
            liked: self.liked,
            cover: self.cover,
            description: self.description,
        })
    }
}
