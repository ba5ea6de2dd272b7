//! Plain-text rendering of the movie list and detail views.

use std::fmt::Write;

use tmdb::{Movie, MovieDetails, PaginatedResponse};

/// Placeholder shown for fields the API left absent or empty.
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

fn value_or_unavailable(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DATA_UNAVAILABLE,
    }
}

fn number_or_unavailable<N: ToString>(value: Option<N>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| DATA_UNAVAILABLE.to_string())
}

fn list_or_unavailable(items: Vec<String>) -> String {
    if items.is_empty() {
        DATA_UNAVAILABLE.to_string()
    } else {
        items.join(", ")
    }
}

/// Render one line per movie plus a paging footer.
pub fn render_movie_list(response: &PaginatedResponse<Movie>) -> String {
    let mut out = String::new();
    if response.results.is_empty() {
        out.push_str("No movies found.\n");
    }
    for movie in &response.results {
        let _ = writeln!(
            out,
            "{:>8}  {:>4.1}  {}",
            movie.id, movie.vote_average, movie.title
        );
    }
    let _ = write!(
        out,
        "Page {} of {} ({} movies)",
        response.page, response.total_pages, response.total_results
    );
    out
}

/// Render every field the detail view shows, falling back to the
/// placeholder for absent or empty values.
pub fn render_movie_details(details: &MovieDetails) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        let _ = writeln!(out, "{:<22}{}", format!("{}:", label), value);
    };

    line("Title", details.title.clone());
    line(
        "Tagline",
        value_or_unavailable(details.tagline.as_deref()).to_string(),
    );
    line(
        "Overview",
        value_or_unavailable(Some(&details.overview)).to_string(),
    );
    line("Original title", details.original_title.clone());
    line(
        "Original language",
        value_or_unavailable(Some(&details.original_language)).to_string(),
    );
    line(
        "Release date",
        value_or_unavailable(details.release_date.as_deref()).to_string(),
    );
    line("Runtime", number_or_unavailable(details.runtime));
    line(
        "Status",
        value_or_unavailable(details.status.as_deref()).to_string(),
    );
    line(
        "Adult",
        if details.adult { "yes" } else { "no" }.to_string(),
    );
    line("Budget", number_or_unavailable(details.budget));
    line("Revenue", number_or_unavailable(details.revenue));
    line("Popularity", details.popularity.to_string());
    line("Vote average", details.vote_average.to_string());
    line("Vote count", details.vote_count.to_string());
    line(
        "Genres",
        list_or_unavailable(details.genres.iter().map(|g| g.name.clone()).collect()),
    );
    line(
        "Production companies",
        list_or_unavailable(
            details
                .production_companies
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        ),
    );
    line(
        "Production countries",
        list_or_unavailable(
            details
                .production_countries
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        ),
    );
    line(
        "Spoken languages",
        list_or_unavailable(
            details
                .spoken_languages
                .iter()
                .map(|l| l.name.clone())
                .collect(),
        ),
    );
    line(
        "Homepage",
        value_or_unavailable(details.homepage.as_deref()).to_string(),
    );
    line(
        "Poster",
        details.poster_url().unwrap_or_else(|| DATA_UNAVAILABLE.to_string()),
    );
    line(
        "Backdrop",
        details
            .backdrop_url()
            .unwrap_or_else(|| DATA_UNAVAILABLE.to_string()),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmdb::{Genre, PaginatedResponse, SpokenLanguage};

    fn movie(id: i64, title: &str, vote_average: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            original_title: title.to_string(),
            overview: "Overview.".to_string(),
            poster_path: None,
            backdrop_path: None,
            release_date: Some("2016-02-09".to_string()),
            vote_average,
            vote_count: 100,
            popularity: 10.0,
            genre_ids: vec![],
            original_language: "en".to_string(),
            adult: false,
            video: false,
        }
    }

    fn details() -> MovieDetails {
        MovieDetails {
            id: 293660,
            title: "Deadpool".to_string(),
            original_title: "Deadpool".to_string(),
            overview: "A former Special Forces operative.".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("2016-02-09".to_string()),
            vote_average: 7.6,
            vote_count: 10995,
            popularity: 187.9,
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 35,
                    name: "Comedy".to_string(),
                },
            ],
            production_companies: vec![],
            production_countries: vec![],
            spoken_languages: vec![SpokenLanguage {
                iso_639_1: "en".to_string(),
                name: "English".to_string(),
                english_name: None,
            }],
            original_language: "en".to_string(),
            adult: false,
            video: false,
            runtime: Some(108),
            status: Some("Released".to_string()),
            tagline: None,
            budget: Some(58000000),
            revenue: None,
            imdb_id: None,
            homepage: None,
        }
    }

    #[test]
    fn test_list_renders_one_line_per_movie() {
        let response = PaginatedResponse {
            page: 1,
            results: vec![movie(1, "First", 8.0), movie(2, "Second", 6.5)],
            total_pages: 3,
            total_results: 60,
        };

        let rendered = render_movie_list(&response);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("First"));
        assert!(lines[1].contains("Second"));
        assert_eq!(lines[2], "Page 1 of 3 (60 movies)");
    }

    #[test]
    fn test_empty_list_renders_notice() {
        let response = PaginatedResponse {
            page: 1,
            results: Vec::<Movie>::new(),
            total_pages: 1,
            total_results: 0,
        };

        let rendered = render_movie_list(&response);
        assert!(rendered.starts_with("No movies found."));
    }

    #[test]
    fn test_details_present_fields_are_shown() {
        let rendered = render_movie_details(&details());

        assert!(rendered.contains("Deadpool"));
        assert!(rendered.contains("108"));
        assert!(rendered.contains("58000000"));
        assert!(rendered.contains("Action, Comedy"));
        assert!(rendered.contains("English"));
        assert!(rendered.contains("http://image.tmdb.org/t/p/w185/poster.jpg"));
    }

    #[test]
    fn test_details_absent_fields_render_placeholder() {
        let rendered = render_movie_details(&details());

        for line in rendered.lines() {
            if line.starts_with("Tagline")
                || line.starts_with("Revenue")
                || line.starts_with("Homepage")
                || line.starts_with("Production companies")
                || line.starts_with("Backdrop")
            {
                assert!(line.contains(DATA_UNAVAILABLE), "line: {line}");
            }
        }
    }

    fn field_value(rendered: &str, label: &str) -> String {
        let prefix = format!("{}:", label);
        rendered
            .lines()
            .find(|l| l.starts_with(&prefix))
            .map(|l| l[prefix.len()..].trim().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_adult_renders_yes_no() {
        let mut d = details();
        assert_eq!(field_value(&render_movie_details(&d), "Adult"), "no");
        d.adult = true;
        assert_eq!(field_value(&render_movie_details(&d), "Adult"), "yes");
    }
}
