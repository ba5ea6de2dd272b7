use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when downloading or caching poster images.
#[derive(Debug, Error)]
pub enum PosterError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image server returned status {status_code} for '{path}'")]
    Api { status_code: u16, path: String },

    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        source: std::io::Error,
    },
}

/// Downloads poster and backdrop images into a local cache directory.
///
/// Images are fetched at most once; later lookups for the same image path
/// are served from disk.
pub struct PosterService {
    client: reqwest::Client,
    posters_dir: PathBuf,
    base_url: Option<String>,
}

impl PosterService {
    pub fn new(client: reqwest::Client, posters_dir: PathBuf) -> Self {
        Self {
            client,
            posters_dir,
            base_url: None,
        }
    }

    /// Create a PosterService fetching from a custom base URL.
    pub fn with_base_url(
        client: reqwest::Client,
        posters_dir: PathBuf,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            posters_dir,
            base_url: Some(base_url.into()),
        }
    }

    fn url(&self, image_path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base, image_path.trim_start_matches('/')),
            None => tmdb::image_url(image_path),
        }
    }

    fn cache_path(&self, image_path: &str) -> PathBuf {
        self.posters_dir.join(image_path.trim_start_matches('/'))
    }

    /// Return the local file for an image path, downloading it on first use.
    pub async fn cached(&self, image_path: &str) -> Result<PathBuf, PosterError> {
        let file_path = self.cache_path(image_path);
        if tokio::fs::metadata(&file_path).await.is_ok() {
            tracing::debug!("Poster cache hit for {}", image_path);
            return Ok(file_path);
        }

        tokio::fs::create_dir_all(&self.posters_dir)
            .await
            .map_err(|source| PosterError::Io {
                operation: "Failed to create directory",
                path: self.posters_dir.display().to_string(),
                source,
            })?;

        let url = self.url(image_path);
        tracing::debug!("Downloading poster from {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PosterError::Api {
                status_code: status.as_u16(),
                path: image_path.to_string(),
            });
        }
        let bytes = response.bytes().await?;

        // Write to a temp file and rename so a failed download never
        // leaves a truncated image behind.
        let tmp_path = file_path.with_extension("tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|source| PosterError::Io {
                operation: "Failed to write",
                path: tmp_path.display().to_string(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|source| PosterError::Io {
                operation: "Failed to rename",
                path: file_path.display().to_string(),
                source,
            })?;

        Ok(file_path)
    }
}
