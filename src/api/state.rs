use std::sync::Arc;

use crate::models::{Catalog, SimilarityMatrix};
use crate::services::posters::PosterProvider;

/// Shared application state
///
/// The catalog and similarity matrix are loaded once at startup and never
/// written afterwards, so they are shared plainly behind `Arc` with no lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub similarity: Arc<SimilarityMatrix>,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    /// Creates application state from loaded artifacts and a poster provider
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        posters: Arc<dyn PosterProvider>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            similarity: Arc::new(similarity),
            posters,
        }
    }
}
