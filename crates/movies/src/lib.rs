pub mod commands;
pub mod config;
pub mod error;
pub mod poster;
pub mod render;
pub mod settings;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use poster::{PosterError, PosterService};
pub use settings::{Settings, SettingsError, SettingsService, SortOrder};
pub use state::AppState;

pub type Result<T> = std::result::Result<T, AppError>;
