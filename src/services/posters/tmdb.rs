/// TMDB poster provider
///
/// Fetches movie details from the TMDB API and extracts the poster path.
/// The full image URL is the configured image host prefix joined with the
/// poster path. Every failure collapses to `Poster::Unavailable`; poster
/// availability is never fatal to a recommendation request.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::models::Poster;
use crate::services::posters::PosterProvider;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

/// Subset of the TMDB movie details response we care about
#[derive(Debug, Deserialize)]
struct MovieDetails {
    #[serde(default)]
    poster_path: Option<String>,
}

impl TmdbProvider {
    /// Creates a new TMDB provider with the default fetch timeout
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
    ) -> anyhow::Result<Self> {
        Self::with_timeout(api_key, api_url, image_base_url, FETCH_TIMEOUT)
    }

    /// Creates a provider with an explicit timeout (shortened in tests)
    pub fn with_timeout(
        api_key: String,
        api_url: String,
        image_base_url: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_key,
            api_url,
            image_base_url,
        })
    }

    /// Joins the image host prefix with a poster path, normalizing slashes
    fn image_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }

    async fn fetch_details(&self, movie_id: u64) -> Result<MovieDetails, reqwest::Error> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn fetch_poster(&self, movie_id: u64) -> Poster {
        match self.fetch_details(movie_id).await {
            Ok(details) => match details.poster_path {
                Some(path) if !path.is_empty() => Poster::Found(self.image_url(&path)),
                _ => {
                    tracing::debug!(movie_id, provider = "tmdb", "No poster path in response");
                    Poster::Unavailable
                }
            },
            Err(e) => {
                tracing::debug!(
                    movie_id,
                    provider = "tmdb",
                    error = %e,
                    "Poster fetch failed"
                );
                Poster::Unavailable
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
