use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;

/// The immutable in-memory movie table and its derived title index
///
/// Row position is a record's stable identity for the process lifetime and
/// is what cross-references the similarity matrix. The table is loaded once
/// at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from loaded records, deriving the title index
    ///
    /// Duplicate titles keep the first occurrence in the index; the later
    /// row stays in the table (filters still see it) but cannot be resolved
    /// by title. Each duplicate is logged so the data problem is visible.
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let mut title_index = HashMap::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            match title_index.entry(record.title.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(row);
                }
                Entry::Occupied(entry) => {
                    tracing::warn!(
                        title = %record.title,
                        kept_row = *entry.get(),
                        dropped_row = row,
                        "Duplicate title in catalog, keeping first occurrence"
                    );
                }
            }
        }

        Self {
            records,
            title_index,
        }
    }

    /// Loads the catalog artifact: a JSON array of movie records
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| AppError::ArtifactIo {
            path: path.display().to_string(),
            source,
        })?;

        let records: Vec<MovieRecord> =
            serde_json::from_str(&raw).map_err(|source| AppError::ArtifactParse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            movies = records.len(),
            "Catalog artifact loaded"
        );

        Ok(Self::new(records))
    }

    /// Number of rows in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in row order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Record at a row index
    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    /// Row index for an exact title
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Record for an exact title
    pub fn movie(&self, title: &str) -> Option<&MovieRecord> {
        self.row_of(title).and_then(|row| self.get(row))
    }

    /// Distinct genre names across the catalog, sorted
    pub fn genres(&self) -> Vec<String> {
        let distinct: BTreeSet<&String> = self
            .records
            .iter()
            .flat_map(|record| record.genres.iter())
            .collect();
        distinct.into_iter().cloned().collect()
    }

    /// Distinct director names, sorted
    pub fn directors(&self) -> Vec<String> {
        let distinct: BTreeSet<&String> =
            self.records.iter().map(|record| &record.director).collect();
        distinct.into_iter().cloned().collect()
    }

    /// Distinct cast member names, sorted
    pub fn cast_members(&self) -> Vec<String> {
        let distinct: BTreeSet<&String> = self
            .records
            .iter()
            .flat_map(|record| record.cast.iter())
            .collect();
        distinct.into_iter().cloned().collect()
    }
}
