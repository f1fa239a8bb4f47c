//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use bookhub_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:                {}", config.data_dir.display());
            println!(
                "  log_file:                {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  dark_mode:               {}", config.dark_mode);
            println!("  profile.name:            {}", config.profile.name);
            println!("  profile.reader_since:    {}", config.profile.reader_since);
            println!(
                "  profile.favorite_genres: {}",
                config.profile.favorite_genres.join(", ")
            );
            println!("  reading.text_size:       {}", config.reading.text_size);
            println!("  reading.manga_direction: {}", config.reading.manga_direction);
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    // Save to the CLI-specified path or default
    match config_path {
        Some(path) => config.save_to_path(path),
        None => config.save(),
    }
    .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply one `key = value` assignment to the config
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            config.data_dir = value.into();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        "dark_mode" => {
            config.dark_mode = value
                .parse()
                .context("Invalid value for dark_mode. Use 'true' or 'false'.")?;
        }
        "profile.name" => {
            config.profile.name = value.trim().to_string();
        }
        "profile.reader_since" => {
            config.profile.reader_since = value
                .trim()
                .parse()
                .context("Invalid value for profile.reader_since. Use a year, e.g. 2020.")?;
        }
        "profile.favorite_genres" => {
            config.profile.favorite_genres = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        "reading.text_size" => {
            config.reading.text_size = value
                .parse()
                .context("Invalid value for reading.text_size")?;
        }
        "reading.manga_direction" => {
            config.reading.manga_direction = value
                .parse()
                .context("Invalid value for reading.manga_direction")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, log_file, dark_mode, profile.name, \
                 profile.reader_since, profile.favorite_genres, \
                 reading.text_size, reading.manga_direction",
                key
            );
        }
    }
    Ok(())
}
