use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Precomputed pairwise similarity scores, row-aligned with the catalog
///
/// `rows[i][j]` is the similarity between catalog rows i and j, produced by
/// an offline process. The matrix is square; symmetry is a convention of the
/// generator and is not enforced here. Loaded once, read-only.
#[derive(Debug)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Builds a matrix from raw rows, checking squareness
    pub fn new(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let n = rows.len();
        for (row, scores) in rows.iter().enumerate() {
            if scores.len() != n {
                return Err(AppError::MalformedMatrix(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    scores.len(),
                    n
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Loads the similarity artifact: a JSON array of arrays of floats
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| AppError::ArtifactIo {
            path: path.display().to_string(),
            source,
        })?;

        let rows: Vec<Vec<f32>> =
            serde_json::from_str(&raw).map_err(|source| AppError::ArtifactParse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            dimension = rows.len(),
            "Similarity artifact loaded"
        );

        Self::new(rows)
    }

    /// Matrix dimension (rows == columns once validated)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Scores for one catalog row against every row, self included
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        self.rows.get(row).map(|scores| scores.as_slice())
    }
}
