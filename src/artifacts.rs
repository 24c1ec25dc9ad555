//! Startup loading of the precomputed artifacts.
//!
//! Two serialized files are loaded once at process start: the catalog
//! (entries in row order) and the square similarity matrix. A missing or
//! inconsistent artifact makes the whole service unusable, so load failures
//! are fatal and reported at startup rather than per request.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::models::{Catalog, CatalogEntry, SimilarityMatrix};

/// Loads the catalog and similarity matrix, checking mutual consistency.
pub fn load(
    catalog_path: impl AsRef<Path>,
    similarity_path: impl AsRef<Path>,
) -> anyhow::Result<(Catalog, SimilarityMatrix)> {
    let catalog = load_catalog(catalog_path.as_ref())?;
    let similarity = load_similarity(similarity_path.as_ref())?;

    if similarity.dim() != catalog.len() {
        anyhow::bail!(
            "Artifact mismatch: similarity matrix dimension {} != catalog size {}",
            similarity.dim(),
            catalog.len()
        );
    }

    Ok((catalog, similarity))
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog artifact at {}", path.display()))?;
    let entries: Vec<CatalogEntry> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog artifact at {}", path.display()))?;
    Catalog::new(entries)
        .with_context(|| format!("Invalid catalog artifact at {}", path.display()))
}

fn load_similarity(path: &Path) -> anyhow::Result<SimilarityMatrix> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open similarity artifact at {}", path.display()))?;
    let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse similarity artifact at {}", path.display()))?;
    SimilarityMatrix::new(rows)
        .with_context(|| format!("Invalid similarity artifact at {}", path.display()))
}
