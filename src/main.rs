use std::sync::Arc;

use anyhow::Context;

use team_roster_api::api::{build_router, AppState};
use team_roster_api::config::AppConfig;
use team_roster_api::domain::repositories::EntityStore;
use team_roster_api::infrastructure::repositories::InMemoryEntityStore;
use team_roster_api::infrastructure::seed::seed_dummy_data;
use team_roster_api::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    logging::init();

    // Load configuration
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Build the store, seeded if requested
    let store: Arc<dyn EntityStore> = Arc::new(InMemoryEntityStore::new());
    if config.seed.enabled {
        seed_dummy_data(store.as_ref(), &config.seed)
            .await
            .context("Failed to seed dummy data")?;
    } else {
        tracing::info!("Starting with an empty store");
    }

    let app = build_router(AppState::new(store), config.graphiql_enabled);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);
    tracing::info!("REST: http://{}/teams, GraphQL: http://{}/graphql", addr, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
