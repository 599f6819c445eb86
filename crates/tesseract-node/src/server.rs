//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    response::Html,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

// Embed the landing page at compile time
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/status", get(api::status::status))
        .route("/entangle", get(api::entangle::entangle))
        .route("/ghz", get(api::entangle::ghz))
        .route("/move", get(api::motion::shift))
        .route("/grover", get(api::search::grover))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
