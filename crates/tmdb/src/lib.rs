mod client;
mod error;
mod images;
mod movie;
pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use images::image_url;
pub use models::{
    Genre, Movie, MovieDetails, PaginatedResponse, ProductionCompany, ProductionCountry,
    SpokenLanguage,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
