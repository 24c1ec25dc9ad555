/// Poster metadata provider abstraction
///
/// Poster lookups are best-effort by contract: implementations absorb every
/// failure class (network, timeout, bad status, malformed body, missing
/// field) and report [`Poster::Unavailable`] instead of an error, so a dead
/// metadata service never breaks the recommendation flow.
use crate::models::Poster;

pub mod tmdb;

/// Trait for poster image providers
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Fetch the poster URL for a movie by its external identifier.
    async fn fetch_poster(&self, movie_id: u64) -> Poster;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
