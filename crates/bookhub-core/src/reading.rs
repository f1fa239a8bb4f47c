//! Reading placeholders
//!
//! The book and manga read screens show a fixed title with a chapter
//! counter that can be stepped back and forth. There is no text or image
//! pipeline behind them.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::Kind;

/// Text size preference for the book reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl TextSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
        }
    }
}

impl std::fmt::Display for TextSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextSize {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(TextSize::Small),
            "medium" => Ok(TextSize::Medium),
            "large" => Ok(TextSize::Large),
            _ => Err(CatalogError::UnknownTextSize(value.to_string())),
        }
    }
}

/// Page order for the manga reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangaDirection {
    #[default]
    RightToLeft,
    LeftToRight,
}

impl MangaDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MangaDirection::RightToLeft => "right_to_left",
            MangaDirection::LeftToRight => "left_to_right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MangaDirection::RightToLeft => "Справа налево",
            MangaDirection::LeftToRight => "Слева направо",
        }
    }
}

impl std::fmt::Display for MangaDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MangaDirection {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "right_to_left" | "rtl" => Ok(MangaDirection::RightToLeft),
            "left_to_right" | "ltr" => Ok(MangaDirection::LeftToRight),
            _ => Err(CatalogError::UnknownMangaDirection(value.to_string())),
        }
    }
}

/// A static read screen with a steppable chapter counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingPlaceholder {
    pub title: String,
    pub glyph: String,
    pub kind: Kind,
    /// Current chapter, 1-based
    pub position: u32,
    pub total: u32,
    /// Series still running: the total is shown with a trailing "+"
    pub open_ended: bool,
    pub excerpt: Option<String>,
}

impl ReadingPlaceholder {
    pub fn book_demo() -> Self {
        Self {
            title: "Война и мир".to_string(),
            glyph: "📚".to_string(),
            kind: Kind::Book,
            position: 3,
            total: 15,
            open_ended: false,
            excerpt: Some(
                "\"Ну, князь, Генуя и Лукка стали не больше как фамильными поместьями Бонапартов. \
                 Нет, я вперед говорю вам, если вы мне не скажете, что у нас война, \
                 если вы еще позволите себе защищать все гадости, все ужасы этого Антихриста...\""
                    .to_string(),
            ),
        }
    }

    pub fn manga_demo() -> Self {
        Self {
            title: "One Piece".to_string(),
            glyph: "🏴‍☠️".to_string(),
            kind: Kind::Manga,
            position: 1098,
            total: 1100,
            open_ended: true,
            excerpt: None,
        }
    }

    /// Step forward one chapter (stops at the last)
    pub fn next(&mut self) {
        if self.position < self.total {
            self.position += 1;
        }
    }

    /// Step back one chapter (stops at the first)
    pub fn prev(&mut self) {
        if self.position > 1 {
            self.position -= 1;
        }
    }

    pub fn progress_label(&self) -> String {
        let suffix = if self.open_ended { "+" } else { "" };
        format!("Глава {} из {}{}", self.position, self.total, suffix)
    }

    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.position as f32 / self.total as f32) * 100.0
        }
    }
}
