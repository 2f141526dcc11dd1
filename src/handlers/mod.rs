//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod batches;
pub mod extract;
pub mod health;

use axum::Router;

use crate::constants::BATCH_BASE_PATH;
use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest(BATCH_BASE_PATH, batches::routes())
}
