//! Document store access for the starter backend.
//!
//! Exposes the [`DocumentStore`] abstraction with MongoDB and in-memory
//! backends, the identifier codec, the document-to-API serialization layer,
//! and the Project models and repository built on top of them.

use std::sync::Arc;

pub mod error;
pub mod ident;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repositories;
pub mod serialize;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::DocumentStore;

/// Process-wide store handle, shared by every request.
pub type StoreHandle = Arc<dyn DocumentStore>;

/// URL scheme selecting the in-process [`MemoryStore`].
pub const MEMORY_SCHEME: &str = "memory://";

/// Build a store handle from a database URL and database name.
///
/// `memory://` URLs produce an empty [`MemoryStore`]; anything else is handed
/// to the MongoDB driver. The driver connects lazily, so an unreachable
/// server surfaces on the first operation rather than here.
pub async fn connect(database_url: &str, database_name: &str) -> Result<StoreHandle, StoreError> {
    if database_url.starts_with(MEMORY_SCHEME) {
        tracing::info!(database = %database_name, "Using in-memory document store");
        return Ok(Arc::new(MemoryStore::new(database_name)));
    }
    let store = MongoStore::connect(database_url, database_name).await?;
    Ok(Arc::new(store))
}

/// Verify the store is reachable.
pub async fn health_check(store: &dyn DocumentStore) -> Result<(), StoreError> {
    store.ping().await
}
