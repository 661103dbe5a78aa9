//! User settings for the expense book
//!
//! Holds the name of the default category and the currency symbol used when
//! presenting amounts.

use serde::{Deserialize, Serialize};

use super::paths::BookPaths;
use crate::error::{BookError, BookResult};
use crate::models::{Tag, DEFAULT_TAG_NAME};

/// User settings for the expense book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Category every untagged expense falls under; its budget cannot be removed
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> String {
    DEFAULT_TAG_NAME.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_category: default_category(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// The configured default category as a tag
    pub fn default_tag(&self) -> BookResult<Tag> {
        Tag::parse(&self.default_category).map_err(|e| {
            BookError::Config(format!(
                "Invalid default_category '{}': {}",
                self.default_category, e
            ))
        })
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BookPaths) -> Result<Self, BookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BookPaths) -> Result<(), BookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
