use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use contact_registry::adapters::http::{api_router, AppState};
use contact_registry::adapters::postgres::{
    create_pool, init_schema, PgContactRepository, PgListRepository,
};
use contact_registry::application::services::{ContactService, ListService};
use contact_registry::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = create_pool(&config.database).await?;
    init_schema(&pool).await?;
    tracing::info!("database schema ready");

    let list_repo = Arc::new(PgListRepository::new(pool.clone()));
    let contact_repo = Arc::new(PgContactRepository::new(pool));

    let state = AppState {
        list_service: Arc::new(ListService::new(list_repo)),
        contact_service: Arc::new(ContactService::new(contact_repo)),
    };

    let app = api_router(state, config.auth.api_token.clone());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
