//! # vtypes-cli — Value Type Inspector
//!
//! Command handlers behind the `vtypes` binary. Argument structs use clap
//! derive; handlers return an exit code and leave all domain logic to the
//! library crates.
//!
//! ## Subcommands
//!
//! - `row-version`: build a row version from bytes, text, a number or
//!   ticks, and print its encodings
//! - `money`: bind and format an amount under any culture
//! - `regions`: list the currency groups of the region index

pub mod money;
pub mod regions;
pub mod row_version;

use std::path::Path;

use vtypes_core::{ConfigError, Settings};

/// Settings for one invocation: environment, then the settings file, then
/// a culture given on the command line.
pub fn resolve_settings(config: Option<&Path>, culture: Option<&str>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::from_env();
    if let Some(path) = config {
        settings = settings.merge(Settings::load(path)?);
    }
    if let Some(culture) = culture {
        settings = settings.merge(Settings {
            culture: Some(culture.to_string()),
            log_filter: None,
        });
    }
    Ok(settings)
}
