//! Application state management
//!
//! Shared application state passed to all request handlers via Axum's
//! State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::store::BatchStore;
use crate::validation::BatchRequestValidator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Batch persistence
    store: Arc<dyn BatchStore>,
    /// Request validator, configured once at startup
    validator: BatchRequestValidator,
    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn BatchStore>, validator: BatchRequestValidator, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                validator,
                config,
            }),
        }
    }

    /// Get a reference to the batch store
    pub fn store(&self) -> &dyn BatchStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the request validator
    pub fn validator(&self) -> &BatchRequestValidator {
        &self.inner.validator
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
