//! # Settings
//!
//! Process-level settings for hosts embedding the vtypes crates. Settings
//! come from a YAML file, from the environment, or both (file values win).
//!
//! ```yaml
//! culture: fr-FR
//! log_filter: vtypes_money=debug
//! ```
//!
//! [`Settings::apply()`] installs the configured culture as the process
//! default ambient culture (see [`crate::ambient`]).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ambient;
use crate::error::ConfigError;

/// Environment variable naming the default culture directly (BCP 47 style,
/// e.g. `en-US`). Takes precedence over the POSIX locale variables.
pub const CULTURE_ENV_VAR: &str = "VTYPES_CULTURE";

/// POSIX locale variables consulted in priority order.
const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Process-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default ambient culture name (e.g. `en-US`).
    pub culture: Option<String>,
    /// `tracing` filter directive used by binaries when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Parse settings from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Settings derived from the process environment.
    pub fn from_env() -> Self {
        Self {
            culture: culture_from_env(),
            log_filter: None,
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: Settings) -> Self {
        Self {
            culture: other.culture.or(self.culture),
            log_filter: other.log_filter.or(self.log_filter),
        }
    }

    /// Install the configured culture as the process default. A `None`
    /// culture leaves the current default untouched.
    pub fn apply(&self) {
        if let Some(culture) = &self.culture {
            ambient::set_process_culture(Some(culture.clone()));
        }
    }
}

/// Culture name implied by the process environment, if any.
pub fn culture_from_env() -> Option<String> {
    culture_from_vars(|name| std::env::var(name).ok())
}

/// Culture name implied by a set of environment variables.
///
/// `VTYPES_CULTURE` is taken verbatim. Otherwise the first non-empty POSIX
/// locale variable is converted with [`posix_locale_to_culture()`].
pub fn culture_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(culture) = lookup(CULTURE_ENV_VAR) {
        return Some(culture.trim().to_string());
    }
    POSIX_LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| posix_locale_to_culture(&value))
}

/// Convert a POSIX locale (`en_US.UTF-8@euro`) into a culture name (`en-US`).
///
/// The `C` and `POSIX` locales map to `None`.
pub fn posix_locale_to_culture(locale: &str) -> Option<String> {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
