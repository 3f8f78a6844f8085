// src/lib.rs

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod routes;

/// Builds the application router. Kept separate from `main` so tests can
/// drive it in-process without binding a socket.
pub fn create_app() -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/hello", get(routes::hello::hello))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
