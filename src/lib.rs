//! Course Batch Service
//!
//! HTTP service for managing course batches: scheduled offerings of a course
//! with an enrollment window and an enrollment policy.
//!
//! # Features
//!
//! - Create and update course batches
//! - Read and search batches
//! - Add users to an existing batch
//! - Request validation with a stable 200/400 contract
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Validation**: pure request validation, no I/O
//! - **Store**: batch persistence behind a trait
//! - **Models**: domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
pub use validation::BatchRequestValidator;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
