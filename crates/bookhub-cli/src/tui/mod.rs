//! BookHub TUI
//!
//! Terminal user interface for browsing the library.
//!
//! ## Layout
//!
//! Four tabs:
//! - Home: filters (kind, genre), items list, detail pane
//! - Profile: reader summary and catalog statistics
//! - Collections: liked and bookmarked lists side by side
//! - Reading: book and manga reader placeholders
//!
//! ## Navigation
//!
//! - 1-4: Switch tabs
//! - j/k or ↑/↓: Move selection up/down
//! - Tab/Shift-Tab: Cycle focus
//! - Enter: Apply filter / open detail
//! - q: Quit
//!
//! ## Commands
//!
//! - /: Search title or author
//! - b: Toggle bookmark
//! - f: Toggle like
//! - c: Cycle kind filter
//! - x: Clear filters
//! - n/p: Next/previous page (Reading)
//! - d: Toggle dark mode
//! - ?: Help

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bookhub_core::{Catalog, CatalogError, Config};

use app::{App, InputMode, Tab};

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    // Initialize TUI logging (file-based, only if BOOKHUB_LOG is set)
    init_tui_logging(&config);

    let mut catalog = Catalog::seeded()?;
    let mut app = App::new(&catalog, config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app, &mut catalog);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    catalog: &mut Catalog,
) -> Result<()> {
    loop {
        app.check_status_timeout();

        terminal.draw(|frame| ui::draw(frame, app, catalog))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // If help is showing, any key dismisses it
                if app.show_help {
                    app.show_help = false;
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => handle_normal_mode(app, catalog, key.code, key.modifiers),
                    InputMode::Search => handle_search_mode(app, catalog, key.code),
                }
            }
        }

        if app.should_quit {
            info!("TUI exiting");
            break;
        }
    }

    Ok(())
}

/// Handle key events in normal mode
fn handle_normal_mode(app: &mut App, catalog: &mut Catalog, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Tabs
        KeyCode::Char('1') => app.set_tab(Tab::Home),
        KeyCode::Char('2') => app.set_tab(Tab::Profile),
        KeyCode::Char('3') => app.set_tab(Tab::Collections),
        KeyCode::Char('4') => app.set_tab(Tab::Reading),

        // Navigation
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(catalog),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.prev_pane(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.next_pane(),
        KeyCode::Enter => app.handle_enter(catalog),

        // Flags
        KeyCode::Char('b') => {
            if let Err(e) = app.toggle_bookmark(catalog) {
                report(app, e);
            }
        }
        KeyCode::Char('f') => {
            if let Err(e) = app.toggle_like(catalog) {
                report(app, e);
            }
        }

        // Filtering
        KeyCode::Char('/') if app.tab == Tab::Home => app.enter_search_mode(),
        KeyCode::Char('c') if app.tab == Tab::Home => app.cycle_kind(catalog),
        KeyCode::Char('x') if app.tab == Tab::Home => {
            app.clear_filters(catalog);
            app.set_status("Фильтры сброшены");
        }

        // Reading
        KeyCode::Char('n') if app.tab == Tab::Reading => app.reading_next(),
        KeyCode::Char('p') if app.tab == Tab::Reading => app.reading_prev(),

        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key events in search mode
fn handle_search_mode(app: &mut App, catalog: &Catalog, code: KeyCode) {
    match code {
        // Cancel search
        KeyCode::Esc => app.cancel_search(catalog),

        // Confirm search (stay in filtered view)
        KeyCode::Enter => app.confirm_search(),

        // Text input
        KeyCode::Char(c) => app.insert_char(catalog, c),
        KeyCode::Backspace => app.delete_char(catalog),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),

        _ => {}
    }
}

/// Show a catalog error in the status bar
fn report(app: &mut App, err: CatalogError) {
    if err.is_ignorable() {
        warn!("Ignoring: {}", err);
        app.set_status(format!("{}", err));
    } else {
        error!("Toggle failed: {}", err);
        app.set_status(format!("Ошибка: {}", err));
    }
}

/// Initialize logging for TUI mode
///
/// Only initializes if BOOKHUB_LOG environment variable is set.
/// Logs to file (config.log_file or default {data_dir}/debug.log).
fn init_tui_logging(config: &Config) {
    let Ok(log_level) = std::env::var("BOOKHUB_LOG") else {
        return;
    };

    if config.log_file.is_none() {
        if let Err(e) = config.ensure_data_dir() {
            eprintln!("Warning: {}", e);
            return;
        }
    }

    let log_path = config.log_path();
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "bookhub_core={},bookhub_cli={}",
        log_level, log_level
    ));

    // Initialize file-based logging (ignore error if already initialized)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookhub_core::ItemId;

    fn setup() -> (Catalog, App) {
        let catalog = Catalog::seeded().unwrap();
        let app = App::new(&catalog, Config::default());
        (catalog, app)
    }

    fn press(app: &mut App, catalog: &mut Catalog, code: KeyCode) {
        match app.input_mode {
            InputMode::Normal => handle_normal_mode(app, catalog, code, KeyModifiers::NONE),
            InputMode::Search => handle_search_mode(app, catalog, code),
        }
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let (mut catalog, mut app) = setup();
        press(&mut app, &mut catalog, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Collections);
        press(&mut app, &mut catalog, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Home);
    }

    #[test]
    fn test_search_typing_then_escape() {
        let (mut catalog, mut app) = setup();
        press(&mut app, &mut catalog, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "piece".chars() {
            press(&mut app, &mut catalog, KeyCode::Char(c));
        }
        assert_eq!(app.visible, vec![ItemId(2)]);
        assert!(!app.should_quit);

        press(&mut app, &mut catalog, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.visible.len(), 4);
    }

    #[test]
    fn test_like_key_toggles_selected_item() {
        let (mut catalog, mut app) = setup();
        press(&mut app, &mut catalog, KeyCode::Down);
        press(&mut app, &mut catalog, KeyCode::Char('f'));
        assert!(!catalog.get(ItemId(2)).unwrap().liked);
        press(&mut app, &mut catalog, KeyCode::Char('f'));
        assert!(catalog.get(ItemId(2)).unwrap().liked);
    }

    #[test]
    fn test_page_keys_only_on_reading_tab() {
        let (mut catalog, mut app) = setup();
        press(&mut app, &mut catalog, KeyCode::Char('n'));
        assert_eq!(app.book_reader.position, 3);

        press(&mut app, &mut catalog, KeyCode::Char('4'));
        press(&mut app, &mut catalog, KeyCode::Char('n'));
        assert_eq!(app.book_reader.position, 4);
    }

    #[test]
    fn test_dark_mode_and_quit() {
        let (mut catalog, mut app) = setup();
        press(&mut app, &mut catalog, KeyCode::Char('d'));
        assert!(app.dark_mode);
        press(&mut app, &mut catalog, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
