//! Route definitions for the REST API.

mod extract;
mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service identity and health
        .route("/", get(health::home))
        .route("/home", get(health::health_check))
        // Extraction
        .route("/extract", post(extract::extract_form16))
        .with_state(state)
}

pub use extract::*;
pub use health::*;
