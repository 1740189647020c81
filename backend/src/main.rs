use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ItemStore;

/// Shared application state, cheap to clone (the store sits behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self {
            items: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,item_store_service=debug".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = ItemStore::seeded();
    info!(count = store.len(), "Item store seeded");
    let app = build_router(AppState::new(store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on port {}", config.port);
    info!("CORS enabled for all origins");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    with_middleware(api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/api/health", get(handlers::health))

        // ── Items CRUD ──────────────────────────────────────────────────────
        .route(
            "/api/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/api/items/:id",
            get(handlers::items::get_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )
}

fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    routes
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
