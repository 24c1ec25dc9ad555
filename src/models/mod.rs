use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A movie known to the system
///
/// `movie_id` is the stable TMDB identifier used for poster lookups; the
/// title is the user-facing selection key and must be unique within a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub movie_id: u64,
    pub title: String,
}

/// The fixed, ordered set of movies the similarity matrix was computed over.
///
/// Row order is significant: entry `i` corresponds to row `i` of the
/// [`SimilarityMatrix`]. The catalog is immutable after load.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index_by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from entries in row order.
    ///
    /// Fails on duplicate titles, since titles are the lookup key.
    pub fn new(entries: Vec<CatalogEntry>) -> anyhow::Result<Self> {
        let mut index_by_title = HashMap::with_capacity(entries.len());
        for (row_index, entry) in entries.iter().enumerate() {
            if index_by_title
                .insert(entry.title.clone(), row_index)
                .is_some()
            {
                anyhow::bail!("Duplicate title in catalog: {}", entry.title);
            }
        }
        Ok(Self {
            entries,
            index_by_title,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row index of the entry with the given title, if present.
    pub fn row_index(&self, title: &str) -> Option<usize> {
        self.index_by_title.get(title).copied()
    }

    pub fn entry(&self, row_index: usize) -> Option<&CatalogEntry> {
        self.entries.get(row_index)
    }

    /// All titles in row order, for populating a selection control.
    pub fn titles(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.title.clone()).collect()
    }
}

/// Precomputed pairwise similarity scores between catalog entries.
///
/// `row(i)[j]` is the similarity between catalog rows `i` and `j`; higher
/// means more similar. The table is square and conventionally symmetric.
#[derive(Debug)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Builds a matrix, rejecting non-square input.
    pub fn new(rows: Vec<Vec<f32>>) -> anyhow::Result<Self> {
        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                anyhow::bail!(
                    "Similarity matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    dim
                );
            }
        }
        Ok(Self { rows })
    }

    /// Matrix dimension (equals the catalog size for a consistent pair).
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(|r| r.as_slice())
    }
}

/// Outcome of a poster lookup
///
/// Poster availability is best-effort: a missing poster is a normal result,
/// never an error. Clients render a textual fallback for `Unavailable`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", content = "url", rename_all = "snake_case")]
pub enum Poster {
    Found(String),
    Unavailable,
}

/// A single recommended movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster: Poster,
}
