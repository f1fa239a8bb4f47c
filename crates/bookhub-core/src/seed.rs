//! Seed catalog
//!
//! The fixed set of entries every session starts from, and the genre list
//! offered by the genre selector.

use crate::error::CatalogResult;
use crate::models::{CoverRef, Kind, LibraryItem, Status};

/// Label of the "every genre" entry in the genre selector
pub const ALL_GENRES: &str = "Все";

/// Genre selector entries, in display order
pub const GENRES: [&str; 9] = [
    ALL_GENRES,
    "Классика",
    "Фантастика",
    "Приключения",
    "Сёнэн",
    "Сэйнэн",
    "Антиутопия",
    "Роман",
    "Темное фэнтези",
];

/// The seed entries, in display order
pub fn items() -> CatalogResult<Vec<LibraryItem>> {
    Ok(vec![
        LibraryItem::builder(1, "Война и мир", "Лев Толстой", Kind::Book)
            .rating(4.8)
            .unit_count(15)
            .status(Status::Completed)
            .genres(["Классика", "Роман"])
            .bookmarked(true)
            .liked(true)
            .cover(CoverRef::parse("/img/dfe1d18b-8e26-47e9-a51c-cd2231420223.jpg"))
            .description("Эпический роман о русском обществе во времена наполеоновских войн")
            .build()?,
        LibraryItem::builder(2, "One Piece", "Эйитиро Ода", Kind::Manga)
            .rating(4.9)
            .unit_count(1100)
            .status(Status::Ongoing)
            .genres(["Приключения", "Сёнэн"])
            .bookmarked(false)
            .liked(true)
            .cover(CoverRef::parse("/img/01c56fd7-e285-4a95-a352-8aa38a4ac241.jpg"))
            .description("История о пирате Луффи и его команде в поисках легендарного сокровища")
            .build()?,
        LibraryItem::builder(3, "1984", "Джордж Оруэлл", Kind::Book)
            .rating(4.7)
            .unit_count(24)
            .status(Status::Completed)
            .genres(["Антиутопия", "Фантастика"])
            .bookmarked(true)
            .liked(false)
            .cover(CoverRef::parse("/img/36b74c88-4115-4afe-b7f6-a13e8529fdbe.jpg"))
            .description("Антиутопический роман о тотальном контроле и наблюдении")
            .build()?,
        LibraryItem::builder(4, "Берсерк", "Кэнтаро Миура", Kind::Manga)
            .rating(4.9)
            .unit_count(364)
            .status(Status::Ongoing)
            .genres(["Темное фэнтези", "Сэйнэн"])
            .bookmarked(true)
            .liked(true)
            .cover(CoverRef::parse("⚔️"))
            .description("Мрачная история мечника Гатса в жестоком фэнтезийном мире")
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    #[test]
    fn test_seed_entries_are_valid() {
        assert_eq!(items().unwrap().len(), 4);
    }

    #[test]
    fn test_seed_order_and_flags() {
        let items = items().unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3), ItemId(4)]);

        let one_piece = &items[1];
        assert_eq!(one_piece.title, "One Piece");
        assert_eq!(one_piece.kind, Kind::Manga);
        assert!(one_piece.liked);
        assert!(!one_piece.bookmarked);
        assert_eq!(one_piece.genres, vec!["Приключения", "Сёнэн"]);
    }

    #[test]
    fn test_only_berserk_uses_a_glyph_cover() {
        let glyphs: Vec<_> = items()
            .unwrap()
            .into_iter()
            .filter(|i| !i.cover.is_image())
            .map(|i| i.id)
            .collect();
        assert_eq!(glyphs, vec![ItemId(4)]);
    }

    #[test]
    fn test_every_seed_genre_is_selectable() {
        for item in items().unwrap() {
            for genre in &item.genres {
                assert!(GENRES.contains(&genre.as_str()), "missing {}", genre);
            }
        }
        assert_eq!(GENRES[0], ALL_GENRES);
    }
}
