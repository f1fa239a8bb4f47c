//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::Result;
use serde::Serialize;

use bookhub_core::{LibraryItem, ProfileSummary};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// A genre selector entry with the number of items carrying it
#[derive(Debug, Clone, Serialize)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single item with all its fields
    pub fn print_item(&self, item: &LibraryItem) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", item.id);
                println!("Title:       {} {}", item.cover.glyph(), item.title);
                println!("Author:      {}", item.author);
                println!("Kind:        {}", item.kind.label());
                println!("Status:      {}", item.status.label());
                println!("Rating:      {:.1}", item.rating);
                println!("Chapters:    {}", item.unit_count);
                println!("Genres:      {}", item.genres.join(", "));
                println!("Flags:       {}", flags(item));
                if !item.description.is_empty() {
                    println!("Description: {}", item.description);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(item)?);
            }
            OutputFormat::Quiet => {
                println!("{}", item.id);
            }
        }
        Ok(())
    }

    /// Print a list of items, one per line
    pub fn print_items(&self, items: &[&LibraryItem]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if items.is_empty() {
                    println!("No items found.");
                    return Ok(());
                }
                for item in items {
                    println!(
                        "{:>3} | {} | {} | {} | {:.1} | {}",
                        item.id,
                        pad(&truncate(&item.title, 24), 24),
                        pad(&truncate(&item.author, 20), 20),
                        pad(item.kind.label(), 5),
                        item.rating,
                        flags(item)
                    );
                }
                println!("\n{} item(s)", items.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(items)?);
            }
            OutputFormat::Quiet => {
                for item in items {
                    println!("{}", item.id);
                }
            }
        }
        Ok(())
    }

    /// Print the genre selector with usage counts
    pub fn print_genres(&self, genres: &[GenreCount]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                for genre in genres {
                    println!("{} ({})", genre.name, genre.count);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(genres)?);
            }
            OutputFormat::Quiet => {
                for genre in genres {
                    println!("{}", genre.name);
                }
            }
        }
        Ok(())
    }

    /// Print the profile summary
    pub fn print_profile(&self, profile: &ProfileSummary, years_reading: u32) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("[{}] {}", profile.initials, profile.name);
                println!("{} ({} y.)", profile.reader_since_label(), years_reading);
                println!();
                println!("Всего книг:   {}", profile.stats.total);
                println!("Понравилось:  {}", profile.stats.liked);
                println!("В закладках:  {}", profile.stats.bookmarked);
                if !profile.favorite_genres.is_empty() {
                    println!();
                    println!("Любимые жанры: {}", profile.favorite_genres.join(", "));
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(profile)?);
            }
            OutputFormat::Quiet => {
                println!(
                    "{} {} {}",
                    profile.stats.total, profile.stats.liked, profile.stats.bookmarked
                );
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Bookmark and like markers for one item
fn flags(item: &LibraryItem) -> String {
    let bookmark = if item.bookmarked { "🔖" } else { "  " };
    let like = if item.liked { "♥" } else { " " };
    format!("{}{}", bookmark, like)
}

/// Truncate a string to max characters, adding "..." if truncated
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Right-pad with spaces to `width` characters
fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
