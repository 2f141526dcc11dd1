//! Course batch handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Batch routes, mounted under `/v1/course/batch`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handler::create_batch))
        .route("/update", patch(handler::update_batch))
        .route("/read/{batch_id}", get(handler::read_batch))
        .route("/search", post(handler::search_batches))
        .route("/users/add/{batch_id}", post(handler::add_users_to_batch))
}
