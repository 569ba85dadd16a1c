use crate::models::MovieRecord;
use crate::store::Catalog;

/// Case-insensitive substring search over catalog titles
///
/// Resolves free-text input to candidate titles ahead of a recommendation
/// lookup. Matches are returned in catalog row order; an empty or
/// whitespace-only query matches nothing rather than everything.
pub fn search_titles(catalog: &Catalog, query: &str) -> Vec<MovieRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .records()
        .iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
