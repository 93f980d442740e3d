//! movie-store — serves the seeded movie collection on port 8000.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_store::{service, InMemoryMovieStore, MovieService, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();
    let store = InMemoryMovieStore::seeded();
    info!("seeded {} movies", store.len()?);

    let service = Arc::new(MovieService::new(store));
    let addr = config.addr();
    service::serve(service, &addr)
        .await
        .with_context(|| format!("failed to serve on {}", addr))?;

    Ok(())
}
