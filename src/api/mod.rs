// src/api/mod.rs
use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::services::entry_service::EntryService;
use crate::application::services::tagging_service::TaggingService;
use crate::infrastructure::di::ServiceContainer;

pub mod error;
pub mod handlers;
pub mod types;

/// Shared handler state: the two services the HTTP surface needs.
#[derive(Clone)]
pub struct ApiContext {
    pub entries: Arc<dyn EntryService>,
    pub tagging: Arc<dyn TaggingService>,
}

impl ApiContext {
    pub fn new(container: &ServiceContainer) -> Self {
        Self {
            entries: container.entry_service.clone(),
            tagging: container.tagging_service.clone(),
        }
    }
}

/// The REST surface:
///
/// - `POST /tag-extraction`
/// - `GET/POST /entries`, `PUT/DELETE /entries/:id` (DELETE is soft)
/// - `GET /trash`, `PUT /trash/:id` (restore), `DELETE /trash/:id` (purge)
pub fn router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/tag-extraction", post(handlers::extract_tags))
        .route(
            "/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/entries/:id",
            put(handlers::update_entry).delete(handlers::delete_entry),
        )
        .route("/trash", get(handlers::list_trash))
        .route(
            "/trash/:id",
            put(handlers::restore_entry).delete(handlers::purge_entry),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, ctx: ApiContext) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(ctx)).await
}
