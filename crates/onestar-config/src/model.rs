//! Typed settings document, command-line overrides, and the resolved run
//! configuration.
//!
//! # Design
//! - The settings document mirrors the YAML file; every key is optional.
//! - [`RunConfig`] is immutable once resolved and is the only value the
//!   pipeline reads.
//! - Precedence is override, then settings file, then built-in default.

use serde::Deserialize;
use url::Url;

use crate::defaults::{DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_SECTION};
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{numeric_level_name, validate_host, validate_port, validate_section};

/// Settings document as read from `.onestar-settings.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsFile {
    /// Media server host name or address.
    pub host: Option<String>,
    /// Media server port.
    pub port: Option<u16>,
    /// Library section identifier.
    pub section: Option<SectionSetting>,
    /// Whether matching items are deleted instead of flagged.
    pub delete: Option<bool>,
    /// Show titles exempt from deletion.
    pub shows: Option<Vec<String>>,
    /// Whether the containing directory is deleted instead of the file.
    pub delete_dir: Option<bool>,
    /// Log filter, either a name or a numeric level.
    pub logging_level: Option<LogLevelSetting>,
    /// Log output format (`pretty` or `json`).
    pub log_format: Option<String>,
}

/// Section identifiers are written either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SectionSetting {
    /// Numeric section key, e.g. `section: 1`.
    Number(u64),
    /// Textual section key, e.g. `section: "1"`.
    Text(String),
}

impl SectionSetting {
    /// Render the section as it appears in the endpoint path.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.trim().to_string(),
        }
    }
}

/// Log level written either as a filter name or as a numeric level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LogLevelSetting {
    /// Numeric level where lower is more verbose (5 trace, 10 debug, 20 info).
    Numeric(u32),
    /// Filter name or directive understood by the log filter.
    Name(String),
}

impl LogLevelSetting {
    /// Translate the setting into a log filter directive.
    #[must_use]
    pub fn to_filter(&self) -> String {
        match self {
            Self::Numeric(level) => numeric_level_name(*level).to_string(),
            Self::Name(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    DEFAULT_LOG_LEVEL.to_string()
                } else if trimmed.eq_ignore_ascii_case("testing") {
                    "info".to_string()
                } else {
                    trimmed.to_ascii_lowercase()
                }
            }
        }
    }
}

/// Values supplied on the command line or through `ONESTAR_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Host override.
    pub host: Option<String>,
    /// Port override.
    pub port: Option<u16>,
    /// Section override.
    pub section: Option<String>,
    /// Delete-enabled override.
    pub delete: Option<bool>,
    /// Allow-list override; replaces the settings file list entirely.
    pub shows: Option<Vec<String>>,
    /// Delete-whole-directory override.
    pub delete_dir: Option<bool>,
}

/// Titles exempt from deletion regardless of rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    titles: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from show titles, keeping them verbatim.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|entry| entry == title)
    }

    /// `true` when nothing is exempt and every one-star item is a candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Human-readable rendering used in the startup log.
    ///
    /// Names are reduced to ASCII letters, digits, and spaces. Entries that
    /// end up empty are shown as `(None Listed)` and are not counted.
    #[must_use]
    pub fn summary(&self) -> AllowListSummary {
        let mut listed = 0usize;
        let rendered = self
            .titles
            .iter()
            .map(|title| {
                let cleaned: String = title
                    .chars()
                    .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ' ')
                    .collect();
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    "(None Listed)".to_string()
                } else {
                    listed += 1;
                    cleaned.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        AllowListSummary { listed, rendered }
    }
}

/// Output of [`AllowList::summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListSummary {
    /// Number of entries with a usable name.
    pub listed: usize,
    /// Entries joined by ` | `.
    pub rendered: String,
}

/// Fully resolved, validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Media server host name or address.
    pub host: String,
    /// Media server port.
    pub port: u16,
    /// Library section identifier.
    pub section: String,
    /// Delete matching items; when `false` they are only flagged.
    pub delete_enabled: bool,
    /// Titles exempt from deletion.
    pub allow_list: AllowList,
    /// Delete the containing directory instead of the media file.
    pub delete_directories: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            section: DEFAULT_SECTION.to_string(),
            delete_enabled: false,
            allow_list: AllowList::default(),
            delete_directories: false,
        }
    }
}

impl RunConfig {
    /// Merge overrides over the settings document over the defaults, then
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when host, port, or section are
    /// unusable.
    pub fn resolve(file: &SettingsFile, overrides: &SettingsOverrides) -> ConfigResult<Self> {
        let defaults = Self::default();

        let host = overrides
            .host
            .clone()
            .or_else(|| file.host.clone())
            .map_or(defaults.host, |host| host.trim().to_string());
        let port = overrides.port.or(file.port).unwrap_or(defaults.port);
        let section = overrides
            .section
            .as_ref()
            .map(|section| section.trim().to_string())
            .or_else(|| file.section.as_ref().map(SectionSetting::to_path_segment))
            .unwrap_or(defaults.section);
        let shows = overrides
            .shows
            .clone()
            .or_else(|| file.shows.clone())
            .unwrap_or_default();

        validate_host(&host)?;
        validate_port(port)?;
        validate_section(&section)?;

        Ok(Self {
            host,
            port,
            section,
            delete_enabled: overrides.delete.or(file.delete).unwrap_or(false),
            allow_list: AllowList::new(shows),
            delete_directories: overrides.delete_dir.or(file.delete_dir).unwrap_or(false),
        })
    }

    /// URL of the section's recently viewed listing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Endpoint`] if the assembled URL does not parse.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let value = format!(
            "http://{host}:{}/library/sections/{}/recentlyViewed",
            self.port, self.section
        );
        Url::parse(&value).map_err(|source| ConfigError::Endpoint { value, source })
    }
}
