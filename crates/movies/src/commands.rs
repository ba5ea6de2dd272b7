//! The user-facing operations: list movies, show details, manage the
//! stored sort order. Each returns the text to print.

use std::fmt::Write;

use tmdb::MovieDetails;

use crate::render;
use crate::settings::SortOrder;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Explicit sort order; the stored preference is used when absent.
    pub sort: Option<SortOrder>,
    pub page: i64,
    /// Download the posters of the listed movies into the cache.
    pub fetch_posters: bool,
}

/// Fetch and render the movie list for the active sort order.
pub async fn list(state: &AppState, options: ListOptions) -> crate::Result<String> {
    let sort = match options.sort {
        Some(sort) => sort,
        None => state.settings.get().await.sort_order,
    };
    let page = options.page.max(1);
    tracing::debug!("Fetching {} movies, page {}", sort, page);

    let response = match sort {
        SortOrder::Popular => state.tmdb.movie_popular(page).await?,
        SortOrder::TopRated => state.tmdb.movie_top_rated(page).await?,
    };

    let mut output = render::render_movie_list(&response);

    if options.fetch_posters {
        let mut cached = 0usize;
        for movie in &response.results {
            let Some(path) = movie.poster_path.as_deref() else {
                continue;
            };
            match state.posters.cached(path).await {
                Ok(_) => cached += 1,
                Err(e) => tracing::warn!("Failed to cache poster for '{}': {}", movie.title, e),
            }
        }
        let _ = write!(
            output,
            "\nCached {} posters in {}",
            cached,
            state.config.posters_path().display()
        );
    }

    Ok(output)
}

/// Fetch and render the detail view for one movie.
pub async fn details(
    state: &AppState,
    movie_id: i64,
    fetch_posters: bool,
) -> crate::Result<String> {
    tracing::debug!("Fetching details for movie {}", movie_id);
    let details = state.tmdb.movie_details(movie_id).await?;

    let mut output = render::render_movie_details(&details);

    if fetch_posters {
        for path in image_paths(&details) {
            match state.posters.cached(path).await {
                Ok(file) => {
                    let _ = write!(output, "\nCached image: {}", file.display());
                }
                Err(e) => tracing::warn!("Failed to cache image '{}': {}", path, e),
            }
        }
    }

    Ok(output)
}

fn image_paths(details: &MovieDetails) -> impl Iterator<Item = &str> {
    details
        .poster_path
        .as_deref()
        .into_iter()
        .chain(details.backdrop_path.as_deref())
}

/// Report the stored sort order, or persist a new one.
pub async fn sort_order(state: &AppState, value: Option<SortOrder>) -> crate::Result<String> {
    match value {
        Some(order) => {
            let settings = state.settings.set_sort_order(order).await?;
            tracing::info!("Sort order set to {}", settings.sort_order);
            Ok(format!("Sort order set to {}", settings.sort_order))
        }
        None => Ok(state.settings.get().await.sort_order.to_string()),
    }
}
