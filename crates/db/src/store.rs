//! The document store abstraction.
//!
//! Handlers and repositories only see `dyn DocumentStore`, so the MongoDB
//! backend and the in-memory backend are interchangeable.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use crate::StoreError;

/// Field stamped on every document at creation.
pub const CREATED_AT: &str = "created_at";

/// Field refreshed on every successful update.
pub const UPDATED_AT: &str = "updated_at";

/// Point operations against named collections of schemaless documents.
///
/// All operations address a single document or a single collection; there
/// are no transactions or multi-document writes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the logical database this store is bound to.
    fn database_name(&self) -> &str;

    /// Insert `record` as-is, returning its store-assigned id.
    async fn insert(&self, collection: &str, record: Document) -> Result<ObjectId, StoreError>;

    /// Insert `record`, stamping `created_at` and `updated_at` with the
    /// current UTC time unless the record already carries them.
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<ObjectId, StoreError> {
        let now = bson::DateTime::now();
        if !record.contains_key(CREATED_AT) {
            record.insert(CREATED_AT, now);
        }
        if !record.contains_key(UPDATED_AT) {
            record.insert(UPDATED_AT, now);
        }
        self.insert(collection, record).await
    }

    /// Return up to `limit` documents matching `filter`, in the store's
    /// natural order. A `limit` of 0 means no limit.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError>;

    /// Merge `patch` into the document (`$set` semantics) and return the
    /// document as it exists after the update, or `None` if absent.
    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        patch: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Hard-delete a document. Returns the number removed (0 or 1).
    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, StoreError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Round-trip to the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
