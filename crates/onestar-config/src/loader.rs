//! Settings file discovery.
//!
//! # Design
//! - Locations are tried in order; the first readable file wins and files are
//!   never merged.
//! - Unreadable locations are reported back to the caller instead of logged
//!   here, since the log subscriber is installed only after settings load.
//! - A readable file that fails to parse is fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::defaults::SETTINGS_FILE_NAME;
use crate::error::{ConfigError, ConfigResult};
use crate::model::SettingsFile;

/// Result of settings discovery.
#[derive(Debug, Default)]
pub struct LoadedSettings {
    /// Parsed document, or defaults when nothing was found.
    pub settings: SettingsFile,
    /// File the settings came from.
    pub source: Option<PathBuf>,
    /// Locations tried before `source` that could not be read.
    pub skipped: Vec<SkippedLocation>,
}

/// A candidate settings location that could not be read.
#[derive(Debug)]
pub struct SkippedLocation {
    /// Path that was tried.
    pub path: PathBuf,
    /// Why it could not be read.
    pub error: io::Error,
}

/// Candidate locations: the home directory first, then the working directory.
#[must_use]
pub fn settings_search_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(home) = home {
        paths.push(home.join(SETTINGS_FILE_NAME));
    }
    paths.push(PathBuf::from(SETTINGS_FILE_NAME));
    paths
}

/// Candidate locations for the current user.
#[must_use]
pub fn default_search_paths() -> Vec<PathBuf> {
    settings_search_paths(dirs::home_dir().as_deref())
}

/// Load the first readable settings file among `paths`.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when a readable file is not a valid
/// settings document.
pub fn discover_settings(paths: &[PathBuf]) -> ConfigResult<LoadedSettings> {
    let mut skipped = Vec::new();
    for path in paths {
        match fs::read_to_string(path) {
            Ok(text) => {
                return Ok(LoadedSettings {
                    settings: parse_settings(path, &text)?,
                    source: Some(path.clone()),
                    skipped,
                });
            }
            Err(error) => skipped.push(SkippedLocation {
                path: path.clone(),
                error,
            }),
        }
    }

    Ok(LoadedSettings {
        settings: SettingsFile::default(),
        source: None,
        skipped,
    })
}

/// Load an explicitly requested settings file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not a valid settings document.
pub fn load_settings_file(path: &Path) -> ConfigResult<LoadedSettings> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSettings {
        settings: parse_settings(path, &text)?,
        source: Some(path.to_path_buf()),
        skipped: Vec::new(),
    })
}

fn parse_settings(path: &Path, text: &str) -> ConfigResult<SettingsFile> {
    if text.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogLevelSetting, SectionSetting};
    use anyhow::Result;
    use tempfile::TempDir;

    fn temp_dir() -> Result<TempDir> {
        Ok(tempfile::Builder::new()
            .prefix("onestar-config-")
            .tempdir()?)
    }

    #[test]
    fn search_paths_prefer_home_directory() {
        let paths = settings_search_paths(Some(Path::new("/home/viewer")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/home/viewer/.onestar-settings.yml"),
                PathBuf::from(".onestar-settings.yml"),
            ]
        );
        assert_eq!(settings_search_paths(None).len(), 1);
    }

    #[test]
    fn first_readable_file_wins() -> Result<()> {
        let temp = temp_dir()?;
        let missing = temp.path().join("missing.yml");
        let first = temp.path().join("first.yml");
        let second = temp.path().join("second.yml");
        fs::write(
            &first,
            "host: nas\nport: 32401\nsection: 3\ndelete: true\nshows:\n  - Lost\nlogging_level: 10\n",
        )?;
        fs::write(&second, "host: ignored\n")?;

        let loaded = discover_settings(&[missing.clone(), first.clone(), second])?;
        assert_eq!(loaded.source.as_deref(), Some(first.as_path()));
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].path, missing);
        assert_eq!(loaded.skipped[0].error.kind(), io::ErrorKind::NotFound);

        let settings = loaded.settings;
        assert_eq!(settings.host.as_deref(), Some("nas"));
        assert_eq!(settings.port, Some(32_401));
        assert_eq!(settings.section, Some(SectionSetting::Number(3)));
        assert_eq!(settings.delete, Some(true));
        assert_eq!(settings.shows, Some(vec!["Lost".to_string()]));
        assert_eq!(settings.logging_level, Some(LogLevelSetting::Numeric(10)));
        Ok(())
    }

    #[test]
    fn nothing_found_falls_back_to_defaults() -> Result<()> {
        let temp = temp_dir()?;
        let loaded = discover_settings(&[temp.path().join("a.yml"), temp.path().join("b.yml")])?;
        assert!(loaded.source.is_none());
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.settings, SettingsFile::default());
        Ok(())
    }

    #[test]
    fn invalid_yaml_is_fatal() -> Result<()> {
        let temp = temp_dir()?;
        let path = temp.path().join("broken.yml");
        fs::write(&path, "port: [not, a, port\n")?;
        assert!(matches!(
            discover_settings(&[path]),
            Err(ConfigError::Parse { .. })
        ));
        Ok(())
    }

    #[test]
    fn empty_file_and_unknown_keys_are_accepted() -> Result<()> {
        let temp = temp_dir()?;
        let empty = temp.path().join("empty.yml");
        fs::write(&empty, "\n")?;
        assert_eq!(load_settings_file(&empty)?.settings, SettingsFile::default());

        let extra = temp.path().join("extra.yml");
        fs::write(&extra, "section: \"movies\"\nunused_key: 42\n")?;
        let settings = load_settings_file(&extra)?.settings;
        assert_eq!(
            settings.section,
            Some(SectionSetting::Text("movies".to_string()))
        );
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() -> Result<()> {
        let temp = temp_dir()?;
        assert!(matches!(
            load_settings_file(&temp.path().join("nope.yml")),
            Err(ConfigError::Io { .. })
        ));
        Ok(())
    }
}
