use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;
use crate::store::{Catalog, SimilarityMatrix};

/// Nearest-neighbor lookup over the precomputed similarity matrix
///
/// Resolves a title to its catalog row, ranks every other row by that row's
/// similarity scores, and maps the top entries back to movie records. Both
/// inputs are immutable after construction, so lookups are pure and
/// deterministic.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: SimilarityMatrix,
}

impl Recommender {
    /// Creates a recommender over an aligned catalog and similarity matrix
    ///
    /// The matrix dimension must equal the catalog size; a mismatch means no
    /// correct lookup is possible, so construction fails and the caller
    /// treats it as fatal at startup.
    pub fn new(catalog: Arc<Catalog>, similarity: SimilarityMatrix) -> AppResult<Self> {
        if similarity.len() != catalog.len() {
            return Err(AppError::DimensionMismatch {
                matrix: similarity.len(),
                catalog: catalog.len(),
            });
        }

        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Returns up to `k` movies most similar to `title`
    ///
    /// Results are ordered by descending similarity score; equal scores keep
    /// their catalog row order. The queried movie itself is never returned.
    /// If the catalog holds fewer than `k + 1` rows the result is simply
    /// shorter. An unknown title is a recoverable `TitleNotFound`.
    pub fn recommend(&self, title: &str, k: usize) -> AppResult<Vec<MovieRecord>> {
        let row = self
            .catalog
            .row_of(title)
            .ok_or_else(|| AppError::TitleNotFound(title.to_string()))?;

        let scores = self
            .similarity
            .row(row)
            .ok_or_else(|| AppError::Internal(format!("similarity matrix has no row {}", row)))?;

        // Drop the queried row by index before ranking: excluding it by
        // sorted position would evict a tied neighbor instead whenever
        // another row matches the self-similarity score.
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != row)
            .collect();

        // Stable sort: ties keep ascending row order. NaN scores compare as
        // equal rather than poisoning the ordering.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(k);

        tracing::debug!(
            title = %title,
            row,
            k,
            returned = ranked.len(),
            "Recommendation lookup"
        );

        Ok(ranked
            .into_iter()
            .filter_map(|(other, _)| self.catalog.get(other).cloned())
            .collect())
    }
}
