use thiserror::Error;

use crate::poster::PosterError;
use crate::settings::SettingsError;

/// Errors surfaced by application commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB API error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Poster error: {0}")]
    Poster(#[from] PosterError),
}
