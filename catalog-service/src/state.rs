//! Application state for catalog service.

use std::sync::Arc;

use common::config::AppConfig;

use crate::catalog::Catalog;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state around a loaded catalog.
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
