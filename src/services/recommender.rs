//! Nearest-neighbor ranking over the precomputed similarity matrix.

use std::cmp::Ordering;

use crate::error::{AppError, AppResult};
use crate::models::{Catalog, SimilarityMatrix};

/// Maximum number of recommendations returned for one query.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A catalog row paired with its similarity to the queried movie.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub row_index: usize,
    pub score: f32,
}

/// Ranks every other catalog entry by similarity to the given title.
///
/// The queried entry is excluded by row identity before sorting, so the
/// result never depends on self-similarity being maximal. Sorting is stable
/// and descending; ties keep original row order. At most
/// [`MAX_RECOMMENDATIONS`] entries are returned; smaller catalogs yield
/// fewer.
///
/// Pure function of the catalog and matrix: no I/O, deterministic.
pub fn rank_similar(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    title: &str,
) -> AppResult<Vec<RankedEntry>> {
    if catalog.len() < 2 {
        return Err(AppError::InvalidInput(
            "Catalog has no other movies to recommend".to_string(),
        ));
    }

    let query_index = catalog.row_index(title).ok_or_else(|| {
        AppError::NotFound(format!("Movie not found in catalog: {}", title))
    })?;

    // Dimension consistency is validated at artifact load, so a missing row
    // is an internal invariant violation.
    let row = similarity.row(query_index).ok_or_else(|| {
        AppError::Internal(format!(
            "Similarity matrix has no row for catalog index {}",
            query_index
        ))
    })?;

    let mut ranked: Vec<RankedEntry> = row
        .iter()
        .enumerate()
        .filter(|(row_index, _)| *row_index != query_index)
        .map(|(row_index, &score)| RankedEntry { row_index, score })
        .collect();

    // Stable sort keeps original row order on ties.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_RECOMMENDATIONS);

    Ok(ranked)
}
