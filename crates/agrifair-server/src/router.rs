//! Router assembly for the agri fair price HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// The four API routes, mounted both at the root and under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/recommend", post(handlers::recommend::recommend))
        .route("/check-price", post(handlers::prices::check_price))
        .route("/market-prices", get(handlers::prices::market_prices))
}

/// Builds the complete axum router with all API routes.
///
/// The `/api` prefix serves the web frontend, which calls `/api/...`.
/// CORS mirrors the caller's origin, method and headers and allows
/// credentials, so any browser origin may call the API.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
