//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use bookhub_core::{Catalog, Kind, LibraryItem, ProfileSummary, ReadingPlaceholder};

use super::app::{ActivePane, App, CollectionList, InputMode, Tab};

/// Colors for the light and dark session themes
struct Theme {
    fg: Color,
    bg: Color,
    accent: Color,
}

impl Theme {
    fn for_app(app: &App) -> Self {
        if app.dark_mode {
            Self {
                fg: Color::Gray,
                bg: Color::Black,
                accent: Color::LightMagenta,
            }
        } else {
            Self {
                fg: Color::Reset,
                bg: Color::Reset,
                accent: Color::Blue,
            }
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    fn border(&self, active: bool) -> Style {
        if active {
            self.base().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            self.base()
        }
    }

    fn highlight(&self, active: bool) -> Style {
        if active {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, catalog: &Catalog) {
    let theme = Theme::for_app(app);
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // Header, body, status bar
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, &theme, outer_chunks[0]);

    match app.tab {
        Tab::Home => draw_home(frame, app, catalog, &theme, outer_chunks[1]),
        Tab::Profile => draw_profile(frame, app, catalog, &theme, outer_chunks[1]),
        Tab::Collections => draw_collections(frame, app, catalog, &theme, outer_chunks[1]),
        Tab::Reading => draw_reading(frame, app, &theme, outer_chunks[1]),
    }

    match app.input_mode {
        InputMode::Normal => draw_status_bar(frame, app, outer_chunks[2]),
        InputMode::Search => draw_search_input(frame, app, &theme, outer_chunks[2]),
    }

    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the tab bar
fn draw_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let block = Block::default()
        .title(" BookHub BETA ")
        .borders(Borders::ALL)
        .border_style(theme.border(false));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.tab.index())
        .style(theme.base())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

// ==================== Home ====================

fn draw_home(frame: &mut Frame, app: &App, catalog: &Catalog, theme: &Theme, area: Rect) {
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(45),
        ])
        .split(area);

    draw_filters_pane(frame, app, theme, pane_chunks[0]);
    draw_items_pane(frame, app, catalog, theme, pane_chunks[1]);
    draw_detail_pane(frame, app, catalog, theme, pane_chunks[2]);
}

/// Draw the filters pane (left)
fn draw_filters_pane(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let is_active = app.active_pane == ActivePane::Filters;

    let mut items: Vec<ListItem> = Vec::with_capacity(app.filters.len() + 2);
    for (i, filter) in app.filters.iter().enumerate() {
        // Kind selectors come first, genres after a separator
        if i == 3 {
            items.push(ListItem::new(Span::styled(
                "── Жанры ──",
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        let marker = if app.is_filter_active(filter) { "●" } else { " " };
        items.push(ListItem::new(format!("{} {}", marker, filter.label())));
    }

    let block = Block::default()
        .title(" Фильтры ")
        .borders(Borders::ALL)
        .border_style(theme.border(is_active));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight(is_active));

    // Account for the separator row
    let row = if app.filter_index >= 3 {
        app.filter_index + 1
    } else {
        app.filter_index
    };
    let mut state = ListState::default();
    state.select(Some(row));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the items pane (middle)
fn draw_items_pane(frame: &mut Frame, app: &App, catalog: &Catalog, theme: &Theme, area: Rect) {
    let is_active = app.active_pane == ActivePane::Items;
    let max_len = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|id| catalog.get(*id))
        .map(|item| item_entry(item, max_len))
        .collect();

    let title = format!(" Библиотека ({}) ", app.visible.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border(is_active));

    if items.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Ничего не найдено",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight(is_active));

    let mut state = ListState::default();
    state.select(Some(app.item_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Two-line list entry: cover and title, then author and flags
fn item_entry(item: &LibraryItem, max_len: usize) -> ListItem<'static> {
    let title = crate::output::truncate(
        &format!("{} {}", item.cover.glyph(), item.title),
        max_len,
    );
    let bookmark = if item.bookmarked { "🔖" } else { "" };
    let like = if item.liked { "♥" } else { "" };
    let meta = crate::output::truncate(
        &format!("{} · ★ {:.1} {}{}", item.author, item.rating, bookmark, like),
        max_len,
    );

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(meta, Style::default().add_modifier(Modifier::DIM))),
    ])
}

/// Draw the detail pane (right)
fn draw_detail_pane(frame: &mut Frame, app: &App, catalog: &Catalog, theme: &Theme, area: Rect) {
    let is_active = app.active_pane == ActivePane::Detail;

    let block = Block::default()
        .title(" Подробнее ")
        .borders(Borders::ALL)
        .border_style(theme.border(is_active));

    let content = match app.current_item(catalog) {
        Some(item) => detail_lines(item),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Выберите книгу",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn detail_lines(item: &LibraryItem) -> Vec<Line<'_>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let field = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, bold), Span::raw(value)])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", item.cover.glyph(), item.title),
            bold,
        )),
        Line::from(item.author.as_str()),
        Line::from(""),
        field("Тип: ", item.kind.label().to_string()),
        field("Статус: ", item.status.label().to_string()),
        field("Рейтинг: ", format!("★ {:.1}", item.rating)),
        field("Глав: ", item.unit_count.to_string()),
        field("Жанры: ", item.genres.join(", ")),
        Line::from(""),
        field(
            "Закладка: ",
            if item.bookmarked { "да" } else { "нет" }.to_string(),
        ),
        field(
            "Нравится: ",
            if item.liked { "да" } else { "нет" }.to_string(),
        ),
    ];

    if !item.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(item.description.as_str()));
    }

    lines
}

// ==================== Profile ====================

fn draw_profile(frame: &mut Frame, app: &App, catalog: &Catalog, theme: &Theme, area: Rect) {
    let profile = ProfileSummary::new(&app.config.profile, catalog.stats());
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.initials),
                Style::default()
                    .fg(Color::White)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(profile.name.clone(), bold),
        ]),
        Line::from(Span::styled(
            profile.reader_since_label(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Всего книг:   ", bold), Span::raw(profile.stats.total.to_string())]),
        Line::from(vec![Span::styled("Понравилось:  ", bold), Span::raw(profile.stats.liked.to_string())]),
        Line::from(vec![Span::styled("В закладках:  ", bold), Span::raw(profile.stats.bookmarked.to_string())]),
    ];

    if !profile.favorite_genres.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Любимые жанры", bold)));
        for genre in &profile.favorite_genres {
            lines.push(Line::from(format!("  • {}", genre)));
        }
    }

    let block = Block::default()
        .title(" Профиль ")
        .borders(Borders::ALL)
        .border_style(theme.border(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ==================== Collections ====================

fn draw_collections(
    frame: &mut Frame,
    app: &App,
    catalog: &Catalog,
    theme: &Theme,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_collection(
        frame,
        " ♥ Понравилось ",
        &catalog.liked(),
        app.liked_index,
        app.collection_focus == CollectionList::Liked,
        theme,
        chunks[0],
    );
    draw_collection(
        frame,
        " 🔖 Закладки ",
        &catalog.bookmarked(),
        app.bookmarked_index,
        app.collection_focus == CollectionList::Bookmarked,
        theme,
        chunks[1],
    );
}

fn draw_collection(
    frame: &mut Frame,
    title: &str,
    items: &[&LibraryItem],
    selected: usize,
    is_active: bool,
    theme: &Theme,
    area: Rect,
) {
    let max_len = area.width.saturating_sub(4) as usize;
    let entries: Vec<ListItem> = items.iter().map(|item| item_entry(item, max_len)).collect();

    let block = Block::default()
        .title(format!("{}({}) ", title, items.len()))
        .borders(Borders::ALL)
        .border_style(theme.border(is_active));

    if entries.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "Пусто",
            Style::default().add_modifier(Modifier::DIM),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let list = List::new(entries)
        .block(block)
        .highlight_style(theme.highlight(is_active));

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}

// ==================== Reading ====================

fn draw_reading(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(area);

    let readers = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_reader(
        frame,
        &app.book_reader,
        app.reading_focus == Kind::Book,
        theme,
        readers[0],
    );
    draw_reader(
        frame,
        &app.manga_reader,
        app.reading_focus == Kind::Manga,
        theme,
        readers[1],
    );

    let settings = format!(
        "Размер текста: {}  ·  Направление манги: {}",
        app.config.reading.text_size,
        app.config.reading.manga_direction.label()
    );
    frame.render_widget(
        Paragraph::new(settings).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[1],
    );
}

fn draw_reader(
    frame: &mut Frame,
    reader: &ReadingPlaceholder,
    is_active: bool,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} {} ", reader.glyph, reader.title))
        .borders(Borders::ALL)
        .border_style(theme.border(is_active));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent))
        .percent(reader.percent().clamp(0.0, 100.0) as u16)
        .label(reader.progress_label());
    frame.render_widget(gauge, chunks[0]);

    let body = match (&reader.excerpt, reader.kind) {
        (Some(excerpt), _) => excerpt.clone(),
        (None, Kind::Manga) => "[ страница манги ]".to_string(),
        (None, Kind::Book) => String::new(),
    };
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

// ==================== Bottom line ====================

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        match app.tab {
            Tab::Home => "/:поиск  b:закладка  f:нравится  c:тип  x:сброс  ?:помощь  q:выход",
            Tab::Profile => "1-4:вкладки  d:тема  ?:помощь  q:выход",
            Tab::Collections => "Tab:список  b:закладка  f:нравится  ?:помощь  q:выход",
            Tab::Reading => "n/p:глава  Tab:книга/манга  ?:помощь  q:выход",
        }
        .to_string()
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Draw search input at the bottom
fn draw_search_input(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let prefix = "/";

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(theme.accent)),
        Span::raw(app.search_input.as_str()),
        Span::styled(
            format!("  ({} найдено)", app.visible.len()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    // Position cursor
    let cursor_x = area.x + prefix.len() as u16 + app.search_cursor as u16;
    frame.set_cursor_position((cursor_x, area.y));
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered popup area
    let popup_width = 50.min(area.width.saturating_sub(4));
    let popup_height = 22.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Клавиши",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  1-4         Вкладки"),
        Line::from("  j/k, ↑/↓    Вверх/вниз"),
        Line::from("  Tab, S-Tab  Следующая/предыдущая панель"),
        Line::from("  Enter       Применить фильтр"),
        Line::from(""),
        Line::from("  /           Поиск по названию и автору"),
        Line::from("  c           Тип: все/книги/манга"),
        Line::from("  x           Сбросить фильтры"),
        Line::from("  b           Закладка"),
        Line::from("  f           Нравится"),
        Line::from("  n/p         Следующая/предыдущая глава"),
        Line::from("  d           Тёмная тема"),
        Line::from("  q           Выход"),
        Line::from(""),
        Line::from(Span::styled(
            "Нажмите любую клавишу",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Помощь ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
}
