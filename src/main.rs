use std::sync::Arc;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::artifacts;
use cinematch_api::config::Config;
use cinematch_api::services::posters::tmdb::TmdbProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Missing or inconsistent artifacts make the service unusable; fail now.
    let (catalog, similarity) = artifacts::load(&config.catalog_path, &config.similarity_path)?;
    tracing::info!(movies = catalog.len(), "Loaded recommendation artifacts");

    let posters = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.image_base_url.clone(),
    )?;

    let state = AppState::new(catalog, similarity, Arc::new(posters));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
