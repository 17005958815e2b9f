use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::corpus::Corpus;
use crate::ranker::Ranker;

pub mod handlers;
pub mod models;

/// Shared read-only state for the search API: the loaded corpus and the
/// ranker. Safe to share across requests without locking.
pub struct SearchContext {
    pub corpus: &'static Corpus,
    pub ranker: Ranker,
}

pub fn create_router(ctx: Arc<SearchContext>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", post(handlers::search_handler))
        .route("/api/cuisines", get(handlers::cuisines_handler))
        .with_state(ctx)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new("static"))
        .layer(cors)
}
