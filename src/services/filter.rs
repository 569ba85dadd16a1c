use crate::error::AppResult;
use crate::models::{FilterCriteria, MovieRecord};
use crate::store::Catalog;

/// Returns the catalog rows satisfying every specified facet
///
/// Facets combine with AND; the genre facet matches if any requested genre
/// is present. Output preserves catalog row order and is never re-ranked or
/// capped here; truncating to a page size is a presentation concern.
pub fn filter_movies(catalog: &Catalog, criteria: &FilterCriteria) -> AppResult<Vec<MovieRecord>> {
    criteria.validate()?;

    // Lowercase the substring needles once, not per record.
    let director_needle = criteria.director.as_deref().map(str::to_lowercase);
    let cast_needle = criteria.cast.as_deref().map(str::to_lowercase);

    let matches: Vec<MovieRecord> = catalog
        .records()
        .iter()
        .filter(|record| {
            record_passes(
                record,
                criteria,
                director_needle.as_deref(),
                cast_needle.as_deref(),
            )
        })
        .cloned()
        .collect();

    tracing::debug!(
        total = catalog.len(),
        matched = matches.len(),
        "Catalog filter evaluated"
    );

    Ok(matches)
}

/// Conjunction of the per-facet predicates for a single record
fn record_passes(
    record: &MovieRecord,
    criteria: &FilterCriteria,
    director_needle: Option<&str>,
    cast_needle: Option<&str>,
) -> bool {
    if !criteria.genres.is_empty()
        && !criteria
            .genres
            .iter()
            .any(|genre| record.genres.contains(genre))
    {
        return false;
    }

    if let Some(needle) = director_needle {
        if !record.director.to_lowercase().contains(needle) {
            return false;
        }
    }

    if let Some(needle) = cast_needle {
        if !record
            .cast
            .iter()
            .any(|member| member.to_lowercase().contains(needle))
        {
            return false;
        }
    }

    if criteria.year_range_active() {
        // Records without a release date are excluded whenever a year bound
        // is set.
        let year = match record.release_year() {
            Some(year) => year,
            None => return false,
        };

        if let Some(min) = criteria.year_min {
            if year < min {
                return false;
            }
        }
        if let Some(max) = criteria.year_max {
            if year > max {
                return false;
            }
        }
    }

    if let Some(min_runtime) = criteria.min_runtime {
        if record.runtime < min_runtime {
            return false;
        }
    }

    true
}
