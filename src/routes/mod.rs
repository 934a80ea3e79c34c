//! HTTP route handlers.
//!
//! Each sub-module corresponds to an endpoint group. [`router`] assembles them
//! into the service served by the binary.

pub mod arithmetic;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build the full application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let server = &state.config.server;

    let mut app = Router::new()
        .route("/", get(health::welcome))
        .route("/api/health", get(health::health))
        .route("/add", post(arithmetic::add))
        .route("/multiply", post(arithmetic::multiply))
        .route("/subtract", post(arithmetic::subtract))
        .route("/divide", post(arithmetic::divide))
        .route("/exponentiate", post(arithmetic::exponentiate))
        .route("/average", post(arithmetic::average))
        .route("/factorial", post(arithmetic::factorial))
        .route("/new_function", post(arithmetic::new_function))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        // One semaphore shared by every route, so the cap is server-wide.
        .layer(GlobalConcurrencyLimitLayer::new(server.max_connections));

    if server.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
