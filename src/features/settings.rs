//! Application settings persistence
//!
//! Display preferences and the optional seed catalog path, stored as JSON
//! in the platform config directory. The movie list itself is never saved.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Seed catalog settings
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Language code ("pt" or "en")
    #[serde(default = "default_language")]
    pub language: String,
}

/// Where the seed catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// JSON catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    Language::default().code().to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: default_language(),
        }
    }
}

impl DisplaySettings {
    /// Resolve the configured language, falling back to the default
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "moviecards", "MovieCards")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        match Self::file_path() {
            Some(path) => self.save_to_file(&path),
            None => Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            )),
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("movie-cards-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert_eq!(settings.display.language(), Language::Portuguese);
        assert!(settings.catalog.path.is_none());
    }

    #[test]
    fn round_trip_through_file() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.display.language = "en".to_string();
        settings.catalog.path = Some(PathBuf::from("/tmp/catalog.json"));

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"display": {"dark_mode": false}}"#).unwrap();
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "pt");
        assert!(settings.catalog.path.is_none());
    }

    #[test]
    fn unknown_language_falls_back() {
        let display = DisplaySettings {
            dark_mode: true,
            language: "xx".to_string(),
        };
        assert_eq!(display.language(), Language::default());
    }
}
