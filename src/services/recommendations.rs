use crate::error::{AppError, AppResult};
use crate::models::{Catalog, Recommendation, SimilarityMatrix};
use crate::services::posters::PosterProvider;
use crate::services::recommender;

/// Produces the recommendation list for a selected title.
///
/// Ranks the catalog by similarity, then resolves a poster for each result.
/// Poster fetches run sequentially; a failed fetch degrades that single
/// entry to `Poster::Unavailable` and never aborts the remaining results.
pub async fn recommend(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    posters: &dyn PosterProvider,
    title: &str,
) -> AppResult<Vec<Recommendation>> {
    let ranked = recommender::rank_similar(catalog, similarity, title)?;

    let mut recommendations = Vec::with_capacity(ranked.len());
    for entry in &ranked {
        let movie = catalog.entry(entry.row_index).ok_or_else(|| {
            AppError::Internal(format!("Catalog has no entry at row {}", entry.row_index))
        })?;

        let poster = posters.fetch_poster(movie.movie_id).await;
        recommendations.push(Recommendation {
            title: movie.title.clone(),
            poster,
        });
    }

    tracing::info!(
        title = %title,
        results = recommendations.len(),
        provider = posters.name(),
        "Recommendations computed"
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogEntry, Poster};

    /// Provider that knows posters for an explicit set of movie ids.
    struct FixedPosters(Vec<u64>);

    #[async_trait::async_trait]
    impl PosterProvider for FixedPosters {
        async fn fetch_poster(&self, movie_id: u64) -> Poster {
            if self.0.contains(&movie_id) {
                Poster::Found(format!("https://posters.test/{}.jpg", movie_id))
            } else {
                Poster::Unavailable
            }
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn fixture() -> (Catalog, SimilarityMatrix) {
        let entries = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"]
            .iter()
            .enumerate()
            .map(|(i, title)| CatalogEntry {
                movie_id: i as u64 + 1,
                title: title.to_string(),
            })
            .collect();
        let catalog = Catalog::new(entries).unwrap();
        let similarity = SimilarityMatrix::new(vec![
            vec![1.0, 0.9, 0.1, 0.8, 0.3, 0.05],
            vec![0.9, 1.0, 0.2, 0.4, 0.6, 0.15],
            vec![0.1, 0.2, 1.0, 0.3, 0.5, 0.25],
            vec![0.8, 0.4, 0.3, 1.0, 0.7, 0.35],
            vec![0.3, 0.6, 0.5, 0.7, 1.0, 0.45],
            vec![0.05, 0.15, 0.25, 0.35, 0.45, 1.0],
        ])
        .unwrap();
        (catalog, similarity)
    }

    #[tokio::test]
    async fn test_recommend_pairs_titles_with_posters() {
        let (catalog, similarity) = fixture();
        // Posters exist for Beta (2) and Delta (4) only.
        let posters = FixedPosters(vec![2, 4]);

        let results = recommend(&catalog, &similarity, &posters, "Alpha")
            .await
            .unwrap();

        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Delta", "Epsilon", "Gamma", "Zeta"]);

        assert_eq!(
            results[0].poster,
            Poster::Found("https://posters.test/2.jpg".to_string())
        );
        assert_eq!(
            results[1].poster,
            Poster::Found("https://posters.test/4.jpg".to_string())
        );
        // Missing posters degrade per-entry, never abort the flow.
        assert_eq!(results[2].poster, Poster::Unavailable);
        assert_eq!(results[3].poster, Poster::Unavailable);
        assert_eq!(results[4].poster, Poster::Unavailable);
    }

    #[tokio::test]
    async fn test_recommend_unknown_title_errors() {
        let (catalog, similarity) = fixture();
        let posters = FixedPosters(vec![]);

        let err = recommend(&catalog, &similarity, &posters, "Omega")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
