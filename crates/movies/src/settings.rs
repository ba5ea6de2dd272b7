use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User preference choosing between the popular and top rated list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Popular,
    TopRated,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Popular => write!(f, "popular"),
            SortOrder::TopRated => write!(f, "top_rated"),
        }
    }
}

/// Error when a sort order string is not recognized.
#[derive(Debug, Error)]
#[error("Unknown sort order '{0}', expected 'popular' or 'top_rated'")]
pub struct ParseSortOrderError(String);

impl std::str::FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortOrder::Popular),
            "top_rated" | "top-rated" => Ok(SortOrder::TopRated),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Application settings stored in TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Ordering used by the movie list.
    #[serde(default)]
    pub sort_order: SortOrder,
}

pub struct SettingsService {
    settings_path: PathBuf,
    cache: Arc<RwLock<Settings>>,
}

impl SettingsService {
    /// Initialize the settings service.
    /// Creates default settings file if it doesn't exist.
    pub async fn new(config: &Config) -> Result<Self, SettingsError> {
        let settings_path = config.settings_path();
        let settings = Self::load_or_create(&settings_path).await?;

        Ok(Self {
            settings_path,
            cache: Arc::new(RwLock::new(settings)),
        })
    }

    /// Load settings from file, or create with defaults if file doesn't exist.
    async fn load_or_create(path: &PathBuf) -> Result<Settings, SettingsError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let settings: Settings = toml::from_str(&content)?;
                tracing::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Ensure parent directory exists
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }

                let default = Settings::default();
                let toml_str = toml::to_string_pretty(&default)?;
                tokio::fs::write(path, toml_str).await?;
                tracing::info!("Created default settings file at {}", path.display());
                Ok(default)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get current settings from cache (fast, no I/O).
    pub async fn get(&self) -> Settings {
        self.cache.read().await.clone()
    }

    /// Change the stored sort order.
    /// Saves to file and updates cache.
    pub async fn set_sort_order(&self, sort_order: SortOrder) -> Result<Settings, SettingsError> {
        let mut new_settings = self.cache.read().await.clone();
        new_settings.sort_order = sort_order;

        // Save to file first, only update cache if the write succeeds
        self.save_to_file(&new_settings).await?;

        *self.cache.write().await = new_settings.clone();

        Ok(new_settings)
    }

    /// Save settings to TOML file atomically.
    /// Uses write-to-temp-then-rename pattern for crash safety.
    async fn save_to_file(&self, settings: &Settings) -> Result<(), SettingsError> {
        let toml_str = toml::to_string_pretty(settings)?;

        let tmp_path = self.settings_path.with_extension("toml.tmp");
        tokio::fs::write(&tmp_path, &toml_str).await?;

        tokio::fs::rename(&tmp_path, &self.settings_path).await?;

        tracing::debug!("Saved settings to {}", self.settings_path.display());
        Ok(())
    }
}
