//! User settings for Spendview
//!
//! Client preferences persisted between sessions: where the REST backend
//! lives, and how amounts, dates, and the startup view are presented. All
//! fields carry serde defaults so older settings files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::dashboard::ViewTab;
use crate::error::TrackerError;

/// User settings for Spendview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST backend (consumed by the transport layer)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Tab shown after login
    #[serde(default)]
    pub default_tab: ViewTab,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_tab: ViewTab::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;
            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;

        Ok(())
    }
}
