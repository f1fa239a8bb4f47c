//! Application state and logic
//!
//! `App` holds only selection state. The catalog is owned by the event loop
//! and passed in; every view is re-derived from it after each mutation.

use bookhub_core::{
    seed, Catalog, CatalogError, Config, GenreFilter, ItemId, Kind, KindFilter, LibraryItem,
    ReadingPlaceholder, ViewConfig,
};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Search text input (after pressing /)
    Search,
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Profile,
    Collections,
    Reading,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Profile, Tab::Collections, Tab::Reading];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Главная",
            Tab::Profile => "Профиль",
            Tab::Collections => "Коллекции",
            Tab::Reading => "Чтение",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Profile => 1,
            Tab::Collections => 2,
            Tab::Reading => 3,
        }
    }
}

/// Which pane of the home screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Filters,
    Items,
    Detail,
}

impl ActivePane {
    /// Move to the next pane (wrapping)
    pub fn next(self) -> Self {
        match self {
            ActivePane::Filters => ActivePane::Items,
            ActivePane::Items => ActivePane::Detail,
            ActivePane::Detail => ActivePane::Filters,
        }
    }

    /// Move to the previous pane (wrapping)
    pub fn prev(self) -> Self {
        match self {
            ActivePane::Filters => ActivePane::Detail,
            ActivePane::Items => ActivePane::Filters,
            ActivePane::Detail => ActivePane::Items,
        }
    }
}

/// Which list of the collections screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionList {
    Liked,
    Bookmarked,
}

impl CollectionList {
    pub fn toggle(self) -> Self {
        match self {
            CollectionList::Liked => CollectionList::Bookmarked,
            CollectionList::Bookmarked => CollectionList::Liked,
        }
    }
}

/// Entries of the filters pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEntry {
    Kind(KindFilter),
    Genre(GenreFilter),
}

impl FilterEntry {
    pub fn label(&self) -> &str {
        match self {
            FilterEntry::Kind(kind) => kind.label(),
            FilterEntry::Genre(genre) => genre.label(),
        }
    }
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Current screen
    pub tab: Tab,
    /// Which home pane has focus
    pub active_pane: ActivePane,
    /// Kind and genre selectors
    pub filters: Vec<FilterEntry>,
    /// Highlighted entry in the filters pane
    pub filter_index: usize,
    /// Search text, genre and kind currently applied
    pub view: ViewConfig,
    /// Ids of the items the home list shows, in catalog order
    pub visible: Vec<ItemId>,
    /// Selected row in the home list
    pub item_index: usize,
    /// Search input buffer
    pub search_input: String,
    /// Cursor position in the search input, in characters
    pub search_cursor: usize,
    /// Query to restore when search is cancelled
    search_saved: String,
    /// Focused list on the collections screen
    pub collection_focus: CollectionList,
    pub liked_index: usize,
    pub bookmarked_index: usize,
    /// Focused placeholder on the reading screen
    pub reading_focus: Kind,
    pub book_reader: ReadingPlaceholder,
    pub manga_reader: ReadingPlaceholder,
    /// Scroll offset for detail pane
    pub detail_scroll: u16,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<std::time::Instant>,
    /// Whether help overlay is visible
    pub show_help: bool,
    pub dark_mode: bool,
    /// Preferences shown on the profile and reading screens
    pub config: Config,
}

impl App {
    /// Create a new app showing the whole catalog
    pub fn new(catalog: &Catalog, config: Config) -> Self {
        let mut filters = vec![
            FilterEntry::Kind(KindFilter::All),
            FilterEntry::Kind(KindFilter::Only(Kind::Book)),
            FilterEntry::Kind(KindFilter::Only(Kind::Manga)),
        ];
        filters.extend(
            seed::GENRES
                .iter()
                .map(|&genre| FilterEntry::Genre(GenreFilter::from(genre))),
        );

        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            tab: Tab::Home,
            active_pane: ActivePane::Items,
            filters,
            filter_index: 0,
            view: ViewConfig::default(),
            visible: Vec::new(),
            item_index: 0,
            search_input: String::new(),
            search_cursor: 0,
            search_saved: String::new(),
            collection_focus: CollectionList::Liked,
            liked_index: 0,
            bookmarked_index: 0,
            reading_focus: Kind::Book,
            book_reader: ReadingPlaceholder::book_demo(),
            manga_reader: ReadingPlaceholder::manga_demo(),
            detail_scroll: 0,
            status_message: None,
            status_message_time: None,
            show_help: false,
            dark_mode: config.dark_mode,
            config,
        };
        app.refresh(catalog);
        app
    }

    /// Re-derive every view from the catalog
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.visible = catalog.filter(&self.view).iter().map(|item| item.id).collect();
        self.item_index = clamp_index(self.item_index, self.visible.len());
        self.liked_index = clamp_index(self.liked_index, catalog.liked().len());
        self.bookmarked_index = clamp_index(self.bookmarked_index, catalog.bookmarked().len());
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(std::time::Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > std::time::Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.status_message = None;
    }

    pub fn current_filter(&self) -> Option<&FilterEntry> {
        self.filters.get(self.filter_index)
    }

    /// Whether a filters pane entry is the one currently applied
    pub fn is_filter_active(&self, entry: &FilterEntry) -> bool {
        match entry {
            FilterEntry::Kind(kind) => *kind == self.view.kind,
            FilterEntry::Genre(genre) => *genre == self.view.genre,
        }
    }

    /// Id of the item the user is pointing at on the current screen
    pub fn selected_id(&self, catalog: &Catalog) -> Option<ItemId> {
        match self.tab {
            Tab::Home => self.visible.get(self.item_index).copied(),
            Tab::Collections => {
                let (items, index) = match self.collection_focus {
                    CollectionList::Liked => (catalog.liked(), self.liked_index),
                    CollectionList::Bookmarked => (catalog.bookmarked(), self.bookmarked_index),
                };
                items.get(index).map(|item| item.id)
            }
            Tab::Profile | Tab::Reading => None,
        }
    }

    /// Item selected in the home list
    pub fn current_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a LibraryItem> {
        self.visible
            .get(self.item_index)
            .and_then(|id| catalog.get(*id))
    }

    // ==================== Navigation ====================

    /// Move selection up on the current screen
    pub fn move_up(&mut self) {
        match self.tab {
            Tab::Home => match self.active_pane {
                ActivePane::Filters => {
                    self.filter_index = self.filter_index.saturating_sub(1);
                }
                ActivePane::Items => {
                    if self.item_index > 0 {
                        self.item_index -= 1;
                        self.detail_scroll = 0;
                    }
                }
                ActivePane::Detail => {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                }
            },
            Tab::Collections => match self.collection_focus {
                CollectionList::Liked => self.liked_index = self.liked_index.saturating_sub(1),
                CollectionList::Bookmarked => {
                    self.bookmarked_index = self.bookmarked_index.saturating_sub(1)
                }
            },
            Tab::Profile | Tab::Reading => {}
        }
    }

    /// Move selection down on the current screen
    pub fn move_down(&mut self, catalog: &Catalog) {
        match self.tab {
            Tab::Home => match self.active_pane {
                ActivePane::Filters => {
                    if self.filter_index + 1 < self.filters.len() {
                        self.filter_index += 1;
                    }
                }
                ActivePane::Items => {
                    if self.item_index + 1 < self.visible.len() {
                        self.item_index += 1;
                        self.detail_scroll = 0;
                    }
                }
                ActivePane::Detail => {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                }
            },
            Tab::Collections => match self.collection_focus {
                CollectionList::Liked => {
                    if self.liked_index + 1 < catalog.liked().len() {
                        self.liked_index += 1;
                    }
                }
                CollectionList::Bookmarked => {
                    if self.bookmarked_index + 1 < catalog.bookmarked().len() {
                        self.bookmarked_index += 1;
                    }
                }
            },
            Tab::Profile | Tab::Reading => {}
        }
    }

    /// Move focus forward within the current screen
    pub fn next_pane(&mut self) {
        match self.tab {
            Tab::Home => self.active_pane = self.active_pane.next(),
            Tab::Collections => self.collection_focus = self.collection_focus.toggle(),
            Tab::Reading => self.toggle_reading_focus(),
            Tab::Profile => {}
        }
    }

    /// Move focus backward within the current screen
    pub fn prev_pane(&mut self) {
        match self.tab {
            Tab::Home => self.active_pane = self.active_pane.prev(),
            Tab::Collections => self.collection_focus = self.collection_focus.toggle(),
            Tab::Reading => self.toggle_reading_focus(),
            Tab::Profile => {}
        }
    }

    fn toggle_reading_focus(&mut self) {
        self.reading_focus = match self.reading_focus {
            Kind::Book => Kind::Manga,
            Kind::Manga => Kind::Book,
        };
    }

    /// Handle Enter on the home screen
    pub fn handle_enter(&mut self, catalog: &Catalog) {
        if self.tab != Tab::Home {
            return;
        }
        match self.active_pane {
            ActivePane::Filters => {
                self.apply_filter(catalog);
                // Auto-switch to Items pane after selecting a filter
                self.active_pane = ActivePane::Items;
            }
            ActivePane::Items => {
                self.active_pane = ActivePane::Detail;
            }
            ActivePane::Detail => {}
        }
    }

    /// Apply the highlighted kind or genre selector
    pub fn apply_filter(&mut self, catalog: &Catalog) {
        match self.current_filter().cloned() {
            Some(FilterEntry::Kind(kind)) => self.view.kind = kind,
            Some(FilterEntry::Genre(genre)) => self.view.genre = genre,
            None => return,
        }
        self.item_index = 0;
        self.refresh(catalog);
    }

    /// Step the kind selector All -> Book -> Manga
    pub fn cycle_kind(&mut self, catalog: &Catalog) {
        self.view.kind = self.view.kind.cycle();
        self.item_index = 0;
        self.refresh(catalog);
        self.set_status(format!("Тип: {}", self.view.kind.label()));
    }

    /// Reset search, genre and kind
    pub fn clear_filters(&mut self, catalog: &Catalog) {
        self.view = ViewConfig::default();
        self.search_input.clear();
        self.search_cursor = 0;
        self.refresh(catalog);
    }

    /// Step the focused reading placeholder
    pub fn reading_next(&mut self) {
        self.focused_reader_mut().next();
    }

    pub fn reading_prev(&mut self) {
        self.focused_reader_mut().prev();
    }

    fn focused_reader_mut(&mut self) -> &mut ReadingPlaceholder {
        match self.reading_focus {
            Kind::Book => &mut self.book_reader,
            Kind::Manga => &mut self.manga_reader,
        }
    }

    // ==================== Mutations ====================

    /// Toggle bookmark on the selected item
    pub fn toggle_bookmark(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        let Some(id) = self.selected_id(catalog) else {
            return Ok(());
        };
        let item = catalog.toggle_bookmark(id)?;
        let message = if item.bookmarked {
            format!("'{}' добавлено в закладки", item.title)
        } else {
            format!("'{}' убрано из закладок", item.title)
        };
        self.set_status(message);
        self.refresh(catalog);
        Ok(())
    }

    /// Toggle like on the selected item
    pub fn toggle_like(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        let Some(id) = self.selected_id(catalog) else {
            return Ok(());
        };
        let item = catalog.toggle_like(id)?;
        let message = if item.liked {
            format!("'{}' понравилось", item.title)
        } else {
            format!("'{}' больше не в понравившихся", item.title)
        };
        self.set_status(message);
        self.refresh(catalog);
        Ok(())
    }

    // ==================== Search input ====================

    /// Enter search mode, editing the current query
    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_saved = self.view.query.clone();
        self.search_input = self.view.query.clone();
        self.search_cursor = self.search_input.chars().count();
    }

    /// Keep the typed query and return to normal mode
    pub fn confirm_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Restore the query from before search mode
    pub fn cancel_search(&mut self, catalog: &Catalog) {
        self.input_mode = InputMode::Normal;
        self.search_input = self.search_saved.clone();
        self.search_cursor = self.search_input.chars().count();
        self.view.query = self.search_saved.clone();
        self.refresh(catalog);
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, catalog: &Catalog, c: char) {
        let at = byte_offset(&self.search_input, self.search_cursor);
        self.search_input.insert(at, c);
        self.search_cursor += 1;
        self.apply_search(catalog);
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self, catalog: &Catalog) {
        if self.search_cursor > 0 {
            self.search_cursor -= 1;
            let at = byte_offset(&self.search_input, self.search_cursor);
            self.search_input.remove(at);
            self.apply_search(catalog);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.search_cursor < self.search_input.chars().count() {
            self.search_cursor += 1;
        }
    }

    /// Live filtering while typing
    fn apply_search(&mut self, catalog: &Catalog) {
        self.view.query = self.search_input.clone();
        self.item_index = 0;
        self.refresh(catalog);
    }
}

/// Clamp a list selection to the list bounds
fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Byte offset of the `chars`-th character
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, App) {
        let catalog = Catalog::seeded().unwrap();
        let app = App::new(&catalog, Config::default());
        (catalog, app)
    }

    fn visible(app: &App) -> Vec<u32> {
        app.visible.iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_active_pane_next() {
        assert_eq!(ActivePane::Filters.next(), ActivePane::Items);
        assert_eq!(ActivePane::Items.next(), ActivePane::Detail);
        assert_eq!(ActivePane::Detail.next(), ActivePane::Filters);
    }

    #[test]
    fn test_active_pane_prev() {
        assert_eq!(ActivePane::Filters.prev(), ActivePane::Detail);
        assert_eq!(ActivePane::Items.prev(), ActivePane::Filters);
        assert_eq!(ActivePane::Detail.prev(), ActivePane::Items);
    }

    #[test]
    fn test_tab_indices() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_starts_with_whole_catalog() {
        let (_, app) = setup();
        assert_eq!(visible(&app), vec![1, 2, 3, 4]);
        assert!(app.view.is_default());
        assert_eq!(app.filters.len(), 3 + seed::GENRES.len());
    }

    #[test]
    fn test_apply_kind_and_genre_filters() {
        let (catalog, mut app) = setup();

        // "Книги"
        app.filter_index = 1;
        app.apply_filter(&catalog);
        assert_eq!(visible(&app), vec![1, 3]);

        // "Фантастика" on top of books
        app.filter_index = app
            .filters
            .iter()
            .position(|f| f.label() == "Фантастика")
            .unwrap();
        app.apply_filter(&catalog);
        assert_eq!(visible(&app), vec![3]);
        assert!(app.is_filter_active(&FilterEntry::Genre(GenreFilter::Only(
            "Фантастика".to_string()
        ))));

        app.clear_filters(&catalog);
        assert_eq!(visible(&app), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_enter_on_filter_moves_focus_to_items() {
        let (catalog, mut app) = setup();
        app.active_pane = ActivePane::Filters;
        app.filter_index = 2;
        app.handle_enter(&catalog);
        assert_eq!(app.active_pane, ActivePane::Items);
        assert_eq!(visible(&app), vec![2, 4]);
    }

    #[test]
    fn test_cycle_kind() {
        let (catalog, mut app) = setup();
        app.cycle_kind(&catalog);
        assert_eq!(visible(&app), vec![1, 3]);
        app.cycle_kind(&catalog);
        assert_eq!(visible(&app), vec![2, 4]);
        app.cycle_kind(&catalog);
        assert_eq!(visible(&app), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_filters_live_with_cyrillic_input() {
        let (catalog, mut app) = setup();
        app.enter_search_mode();
        for c in "берс".chars() {
            app.insert_char(&catalog, c);
        }
        assert_eq!(visible(&app), vec![4]);
        assert_eq!(app.search_cursor, 4);

        // Edit in the middle of a multi-byte string
        app.cursor_left();
        app.cursor_left();
        app.delete_char(&catalog);
        assert_eq!(app.search_input, "брс");
        assert!(app.visible.is_empty());

        app.confirm_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.view.query, "брс");
    }

    #[test]
    fn test_cancel_search_restores_previous_query() {
        let (catalog, mut app) = setup();
        app.enter_search_mode();
        app.insert_char(&catalog, '1');
        app.confirm_search();
        assert_eq!(visible(&app), vec![3]);

        app.enter_search_mode();
        app.insert_char(&catalog, 'x');
        assert!(app.visible.is_empty());
        app.cancel_search(&catalog);
        assert_eq!(app.view.query, "1");
        assert_eq!(visible(&app), vec![3]);
    }

    #[test]
    fn test_toggle_bookmark_on_selected_item() {
        let (mut catalog, mut app) = setup();
        app.item_index = 2; // 1984
        app.toggle_bookmark(&mut catalog).unwrap();
        assert!(!catalog.get(ItemId(3)).unwrap().bookmarked);
        assert!(app.status_message.is_some());

        app.toggle_bookmark(&mut catalog).unwrap();
        assert!(catalog.get(ItemId(3)).unwrap().bookmarked);
    }

    #[test]
    fn test_toggle_like_in_collections_clamps_selection() {
        let (mut catalog, mut app) = setup();
        app.set_tab(Tab::Collections);
        app.collection_focus = CollectionList::Liked;

        // Liked: 1, 2, 4. Select the last and unlike it.
        app.move_down(&catalog);
        app.move_down(&catalog);
        assert_eq!(app.selected_id(&catalog), Some(ItemId(4)));
        app.toggle_like(&mut catalog).unwrap();

        assert_eq!(catalog.liked().len(), 2);
        assert_eq!(app.liked_index, 1);
        assert_eq!(app.selected_id(&catalog), Some(ItemId(2)));
    }

    #[test]
    fn test_toggle_with_empty_view_is_noop() {
        let (mut catalog, mut app) = setup();
        app.enter_search_mode();
        app.insert_char(&catalog, 'z');
        assert!(app.visible.is_empty());
        app.toggle_like(&mut catalog).unwrap();
        assert_eq!(catalog.liked().len(), 3);
    }

    #[test]
    fn test_reading_navigation_follows_focus() {
        let (_, mut app) = setup();
        app.set_tab(Tab::Reading);
        app.reading_next();
        assert_eq!(app.book_reader.position, 4);

        app.next_pane();
        assert_eq!(app.reading_focus, Kind::Manga);
        app.reading_prev();
        assert_eq!(app.manga_reader.position, 1097);
        assert_eq!(app.book_reader.position, 4);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("abc", 1), 1);
        assert_eq!(byte_offset("жук", 1), 2);
        assert_eq!(byte_offset("жук", 3), 6);
        assert_eq!(byte_offset("", 0), 0);
    }
}
