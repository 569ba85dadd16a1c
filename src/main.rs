use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::config::Config;
use cinematch_api::services::Recommender;
use cinematch_api::store::{Catalog, SimilarityMatrix};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch_api=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load the precomputed artifacts; a dimension mismatch aborts startup
    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    let similarity = SimilarityMatrix::load(&config.similarity_path)?;
    let recommender = Recommender::new(Arc::clone(&catalog), similarity)?;

    tracing::info!(movies = catalog.len(), "Catalog ready");

    // Initialize application state
    let state = AppState::new(catalog, recommender);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
