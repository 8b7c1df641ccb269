//! Application configuration.
//!
//! Loaded from `<config dir>/email-composer/config.json` when present, then
//! overridden from the environment. Precedence: env vars > config file > defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Mock endpoint serving the customer list.
pub const DEFAULT_LOOKUP_URL: &str =
    "https://686547495b5d8d0339808f5d.mockapi.io/spitogatos/api/customer-email-lookup";

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light palette.
    Light,
    /// Dark palette.
    #[default]
    Dark,
}

impl ThemePreference {
    /// Parses a preference name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Configuration for the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Customer lookup endpoint.
    pub lookup_url: String,
    /// Quiet period before a search term triggers a lookup, in milliseconds.
    pub debounce_ms: u64,
    /// Simulated delivery latency on submit, in milliseconds.
    pub submit_delay_ms: u64,
    /// HTTP request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// How long a toast stays on screen, in seconds.
    pub toast_duration_secs: u64,
    /// Color scheme.
    pub theme: ThemePreference,
    /// Mirror toasts as desktop notifications.
    pub desktop_notifications: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            debounce_ms: 300,
            submit_delay_ms: 1000,
            request_timeout_secs: 10,
            toast_duration_secs: 4,
            theme: ThemePreference::default(),
            desktop_notifications: false,
        }
    }
}

impl ComposerConfig {
    /// Loads configuration from the default path with environment overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the merged result fails [`ComposerConfig::validate`].
    pub fn load() -> Result<Self> {
        Self::load_with(Self::default_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Loads `path` (if any), applies overrides from `env`, then validates the
    /// merged result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the merged result is invalid.
    pub fn load_with(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Reads a specific file, without env overrides or validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                info!(path = %path.display(), "Loading config from file");
                Ok(serde_json::from_str(&contents)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `<config dir>/email-composer/config.json`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("email-composer").join("config.json"))
    }

    /// Applies environment variable overrides.
    ///
    /// Takes a resolver function so tests don't have to mutate the process
    /// environment.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(url) = env("EMAIL_COMPOSER_LOOKUP_URL")
            && !url.trim().is_empty()
        {
            self.lookup_url = url;
        }
        if let Some(ms) = parse_override(&env, "EMAIL_COMPOSER_DEBOUNCE_MS") {
            self.debounce_ms = ms;
        }
        if let Some(ms) = parse_override(&env, "EMAIL_COMPOSER_SUBMIT_DELAY_MS") {
            self.submit_delay_ms = ms;
        }
        if let Some(theme) = env("EMAIL_COMPOSER_THEME") {
            match ThemePreference::parse(&theme) {
                Some(theme) => self.theme = theme,
                None => warn!(value = %theme, "Ignoring unknown EMAIL_COMPOSER_THEME"),
            }
        }
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the lookup URL is not an http(s) URL or
    /// the request timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let url = self.lookup_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "lookup_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Debounce interval.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Simulated submit latency.
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Toast display duration.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

fn parse_override(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring non-numeric override");
            None
        }
    }
}
