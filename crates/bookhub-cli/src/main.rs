//! BookHub CLI
//!
//! Command-line interface for BookHub - browse a library of books and manga.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bookhub_core::{Catalog, Config};

mod commands;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "bookhub")]
#[command(about = "BookHub - browse your books and manga")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// List items, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Search title or author (case-insensitive)
        #[arg(short = 's', long)]
        query: Option<String>,
        /// Genre to show ("All" for every genre)
        #[arg(short, long, default_value = "All")]
        genre: String,
        /// Kind to show: all, book or manga
        #[arg(short, long, default_value = "all")]
        kind: String,
    },
    /// Show item details
    Show {
        /// Item ID
        id: u32,
    },
    /// List liked items
    Liked,
    /// List bookmarked items
    Bookmarks,
    /// List genres with item counts
    Genres,
    /// Show the reader profile
    Profile,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (dark_mode, profile.name, reading.text_size, ...)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Commands that don't need the catalog
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;

    // Handle TUI (default when no command given)
    let Some(command) = cli.command else {
        return tui::run(config);
    };
    if matches!(command, Commands::Tui) {
        return tui::run(config);
    }

    init_cli_logging();

    let catalog = Catalog::seeded().context("Failed to build catalog")?;
    debug!("Catalog ready with {} items", catalog.len());

    match command {
        Commands::Tui | Commands::Config { .. } => unreachable!(), // Handled above
        Commands::List { query, genre, kind } => {
            commands::item::list(&catalog, query, genre, kind, &output)
        }
        Commands::Show { id } => commands::item::show(&catalog, id, &output),
        Commands::Liked => commands::item::liked(&catalog, &output),
        Commands::Bookmarks => commands::item::bookmarks(&catalog, &output),
        Commands::Genres => commands::genre::list(&catalog, &output),
        Commands::Profile => commands::profile::show(&catalog, &config, &output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize logging for one-shot commands
///
/// Only initializes if BOOKHUB_LOG environment variable is set.
/// Logs to stderr so stdout stays clean for --json and --quiet.
fn init_cli_logging() {
    let Ok(log_level) = std::env::var("BOOKHUB_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "bookhub_core={},bookhub_cli={}",
        log_level, log_level
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["bookhub", "list"]).unwrap();
        match cli.command {
            Some(Commands::List { query, genre, kind }) => {
                assert!(query.is_none());
                assert_eq!(genre, "All");
                assert_eq!(kind, "all");
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bookhub", "liked", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Liked)));
    }

    #[test]
    fn test_no_command_means_tui() {
        let cli = Cli::try_parse_from(["bookhub"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["bookhub", "show", "abc"]).is_err());
        let cli = Cli::try_parse_from(["bookhub", "show", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { id: 3 })));
    }
}
