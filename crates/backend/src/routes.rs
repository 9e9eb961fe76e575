use axum::{
    routing::{get, post},
    Router,
};
use contracts::shared::contact::CONTACT_ENDPOINT;

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(CONTACT_ENDPOINT, post(handlers::contact::submit))
        .route("/api/menu", get(handlers::menu::get_menu))
}
