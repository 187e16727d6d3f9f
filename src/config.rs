//! Page settings emitted by the server as a JSON block.
//!
//! The templates may render
//! `<script type="application/json" id="portal-ui-config">{...}</script>`
//! carrying translated strings and endpoint overrides. Every field is
//! optional; anything absent takes the default below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_FALLBACK_TIMEZONE, DEFAULT_FILE_NAME_MAX_LEN, DEFAULT_NO_FILE_CHOSEN, DEFAULT_PLACEHOLDER_COLOR,
    DEFAULT_SELECTED_COLOR, DEFAULT_TIMEZONE_ENDPOINT,
};
use crate::error::Result;
use crate::plural::Language;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Path the browser timezone is reported to.
    pub timezone_endpoint: String,
    /// Zone reported when the browser cannot resolve a valid one.
    pub fallback_timezone: String,
    /// Characters of the avatar file name shown before truncation.
    pub file_name_max_len: usize,
    /// Text shown when no avatar file is selected.
    pub no_file_chosen: String,
    /// Gender select color while no value is chosen.
    pub placeholder_color: String,
    /// Gender select color once a value is chosen.
    pub selected_color: String,
    /// Language whose plural rule is used for an unsupported `data-lang`.
    #[serde(deserialize_with = "deserialize_language")]
    pub fallback_language: Language,
    /// Minimum console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: log::Level,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            timezone_endpoint: DEFAULT_TIMEZONE_ENDPOINT.to_owned(),
            fallback_timezone: DEFAULT_FALLBACK_TIMEZONE.to_owned(),
            file_name_max_len: DEFAULT_FILE_NAME_MAX_LEN,
            no_file_chosen: DEFAULT_NO_FILE_CHOSEN.to_owned(),
            placeholder_color: DEFAULT_PLACEHOLDER_COLOR.to_owned(),
            selected_color: DEFAULT_SELECTED_COLOR.to_owned(),
            fallback_language: Language::En,
            log_level: log::Level::Info,
        }
    }
}

impl PageConfig {
    /// Parse a config block.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::UiError::Config`] if the text is not a JSON
    /// object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the config block if one is present, falling back to defaults
    /// when it is absent, blank, or malformed.
    #[must_use]
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                log::warn!("{e}; using default page config");
                Self::default()
            }),
        }
    }
}

fn deserialize_language<'de, D>(deserializer: D) -> std::result::Result<Language, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<log::Level, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
