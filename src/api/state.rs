use std::sync::Arc;

use crate::services::Recommender;
use crate::store::Catalog;

/// Shared application state
///
/// The catalog and similarity data are loaded once at startup and never
/// mutated afterwards, so handlers share them through plain `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Creates application state from the loaded catalog and recommender
    pub fn new(catalog: Arc<Catalog>, recommender: Recommender) -> Self {
        Self {
            catalog,
            recommender: Arc::new(recommender),
        }
    }
}
