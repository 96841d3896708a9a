use std::sync::Arc;

use starter_db::{DocumentStore, StoreError, StoreHandle};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. `None` when no store was configured at startup.
    pub store: Option<StoreHandle>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The store handle, or [`StoreError::Unavailable`] if none was configured.
    pub fn store(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.store.as_deref().ok_or(StoreError::Unavailable)
    }
}
