use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::handler::{AppState, healthcheck};

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;

/// Full service router: healthcheck, bookmark routes and CORS.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(healthcheck))
        .merge(bookmarks::routes())
        .layer(cors)
        .with_state(state)
}
