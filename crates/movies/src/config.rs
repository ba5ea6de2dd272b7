use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API key sent with every request.
    pub api_key: String,
    /// Directory holding the settings file and the poster cache.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(api_key: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: api_key.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.toml")
    }

    pub fn posters_path(&self) -> PathBuf {
        self.data_dir.join("posters")
    }
}

/// Resolve the default data directory.
///
/// `$MOVIES_DATA_DIR` wins, then `$HOME/.local/share/popular-movies`,
/// then a dot directory relative to the working directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MOVIES_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".local")
            .join("share")
            .join("popular-movies");
    }
    PathBuf::from(".popular-movies")
}
