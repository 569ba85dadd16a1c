use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A single movie in the catalog
///
/// The shape mirrors the offline catalog artifact column for column, and is
/// returned to clients as-is: the artifact schema and the response payload
/// are the same type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    /// Release date; some rows in the source data have none
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u64,
    /// Ordered genre names (e.g., "Comedy", "Drama")
    pub genres: Vec<String>,
    /// Ordered cast member names, most prominent first
    pub cast: Vec<String>,
    pub director: String,
    pub overview: String,
    /// Opaque to the core; rendered by the presentation layer
    pub poster_url: String,
    /// Runtime in minutes
    pub runtime: u32,
}

impl MovieRecord {
    /// Release year, when the record carries a release date
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }
}

/// Facet constraints for the catalog filter
///
/// Every facet is optional; an unspecified facet is no constraint, so the
/// default value matches the entire catalog. A record passes when all
/// specified facets pass (AND across facets); within the genre facet a
/// record passes if any requested genre is present (OR within the facet).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    /// Exact genre names; a record matches if its genre list intersects
    #[serde(default)]
    pub genres: Vec<String>,
    /// Case-insensitive substring of the director name
    #[serde(default)]
    pub director: Option<String>,
    /// Case-insensitive substring matched against any cast member
    #[serde(default)]
    pub cast: Option<String>,
    /// Inclusive lower bound on the release year
    #[serde(default)]
    pub year_min: Option<i32>,
    /// Inclusive upper bound on the release year
    #[serde(default)]
    pub year_max: Option<i32>,
    /// Minimum runtime in minutes
    #[serde(default)]
    pub min_runtime: Option<u32>,
}

impl FilterCriteria {
    /// Rejects criteria whose shape cannot match anything meaningfully
    ///
    /// Currently the only malformed shape is an inverted year range.
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(min), Some(max)) = (self.year_min, self.year_max) {
            if min > max {
                return Err(AppError::InvalidCriteria(format!(
                    "year range is inverted ({} > {})",
                    min, max
                )));
            }
        }
        Ok(())
    }

    /// True when a year bound is set on either side
    ///
    /// Records without a release date are excluded from filtering whenever
    /// this holds.
    pub fn year_range_active(&self) -> bool {
        self.year_min.is_some() || self.year_max.is_some()
    }
}
