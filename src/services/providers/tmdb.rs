/// TMDB catalog provider
///
/// All calls carry the same bearer token. Curated categories fetch a single
/// fixed page each; search asks for the first page of non-adult results.
///
/// API Flow:
/// 1. Categories: /movie/{now_playing,popular,top_rated,upcoming}?page=N
/// 2. Trailer: /movie/{id}/videos?language=en-US
/// 3. AI search lookups: /search/movie?query=...
use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieCategory, Video},
    services::providers::CatalogProvider,
};
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const RESPONSE_LANGUAGE: &str = "en-US";

#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    results: Vec<T>,
}

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    access_token: String,
    api_url: String,
}

impl TmdbCatalog {
    pub fn new(access_token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            access_token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http_client
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Sends the request and decodes the `results` array of the response
    async fn fetch_results<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> AppResult<Vec<T>> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let page: ResultsPage<T> = response.json().await?;
        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn list_category(&self, category: MovieCategory) -> AppResult<Vec<Movie>> {
        let request = self
            .get(category.endpoint())
            .query(&[("page", category.page())]);

        let movies: Vec<Movie> = self.fetch_results(request).await?;

        tracing::info!(
            category = %category,
            results = movies.len(),
            provider = self.name(),
            "Category fetched"
        );

        Ok(movies)
    }

    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>> {
        let request = self
            .get(&format!("/movie/{}/videos", movie_id))
            .query(&[("language", RESPONSE_LANGUAGE)]);

        let videos: Vec<Video> = self.fetch_results(request).await?;

        tracing::debug!(movie_id, videos = videos.len(), "Movie videos fetched");

        Ok(videos)
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        let request = self.get("/search/movie").query(&[
            ("query", query),
            ("include_adult", "false"),
            ("language", RESPONSE_LANGUAGE),
            ("page", "1"),
        ]);

        let movies: Vec<Movie> = self.fetch_results(request).await?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = self.name(),
            "Title search completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
