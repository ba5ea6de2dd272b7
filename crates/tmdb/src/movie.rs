use crate::{
    models::{Movie, MovieDetails, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// List movies ordered by popularity
    ///
    /// GET /movie/popular
    pub async fn movie_popular(&self, page: i64) -> crate::Result<PaginatedResponse<Movie>> {
        self.movie_list("popular", page).await
    }

    /// List movies ordered by rating
    ///
    /// GET /movie/top_rated
    pub async fn movie_top_rated(&self, page: i64) -> crate::Result<PaginatedResponse<Movie>> {
        self.movie_list("top_rated", page).await
    }

    async fn movie_list(&self, variant: &str, page: i64) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url(&format!("/movie/{}", variant));
        let page = page.to_string();
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("page", page.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    pub async fn movie_details(&self, movie_id: i64) -> crate::Result<MovieDetails> {
        let url = self.url(&format!("/movie/{}", movie_id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
