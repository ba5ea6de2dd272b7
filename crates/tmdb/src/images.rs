//! Image URL helpers.
//!
//! The API returns image paths like `/abc123.jpg`; full URLs are built
//! against the image CDN using the `w185` rendition for both posters and
//! backdrops.

const IMAGE_BASE_URL: &str = "http://image.tmdb.org/t/p/w185";

/// Build the full image URL for an API image path.
pub fn image_url(path: &str) -> String {
    format!("{}/{}", IMAGE_BASE_URL, path.trim_start_matches('/'))
}
