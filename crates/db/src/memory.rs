//! In-process backend for [`DocumentStore`].
//!
//! Keeps each collection in insertion order, which stands in for MongoDB's
//! natural order. Used by the test suites and by `memory://` dev mode.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::serialize::STORE_ID_FIELD;
use crate::store::DocumentStore;
use crate::StoreError;

type Collection = IndexMap<ObjectId, Document>;

/// A [`DocumentStore`] holding every document in memory.
pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }
}

/// Top-level equality match, the subset of MongoDB filters this backend supports.
fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| doc.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, mut record: Document) -> Result<ObjectId, StoreError> {
        let id = match record.remove(STORE_ID_FIELD) {
            Some(Bson::ObjectId(id)) => id,
            _ => ObjectId::new(),
        };

        let mut stored = Document::new();
        stored.insert(STORE_ID_FIELD, id);
        for (key, value) in record {
            stored.insert(key, value);
        }

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(StoreError::DuplicateId(id.to_hex()));
        }
        docs.insert(id, stored);
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let take = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .values()
            .filter(|doc| matches(doc, &filter))
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(&id))
            .cloned())
    }

    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        patch: Document,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(&id))
        else {
            return Ok(None);
        };
        for (key, value) in patch {
            if key != STORE_ID_FIELD {
                doc.insert(key, value);
            }
        }
        Ok(Some(doc.clone()))
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .and_then(|docs| docs.shift_remove(&id));
        Ok(u64::from(removed.is_some()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use bson::doc;

    #[tokio::test]
    async fn insert_assigns_id_and_find_returns_it() {
        let store = MemoryStore::new("test");
        let id = store.insert("project", doc! { "name": "A" }).await.unwrap();

        let found = store.find_one("project", id).await.unwrap().unwrap();
        assert_eq!(found.get_object_id("_id").unwrap(), id);
        assert_eq!(found.get_str("name").unwrap(), "A");
    }

    #[tokio::test]
    async fn create_document_stamps_timestamps() {
        let store = MemoryStore::new("test");
        let id = store
            .create_document("project", doc! { "name": "A" })
            .await
            .unwrap();

        let found = store.find_one("project", id).await.unwrap().unwrap();
        let created = found.get_datetime("created_at").unwrap();
        let updated = found.get_datetime("updated_at").unwrap();
        assert_eq!(created, updated);
    }

    #[tokio::test]
    async fn get_documents_keeps_insertion_order_and_limit() {
        let store = MemoryStore::new("test");
        for name in ["a", "b", "c"] {
            store.insert("project", doc! { "name": name }).await.unwrap();
        }

        let docs = store.get_documents("project", doc! {}, 2).await.unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, ["a", "b"]);

        let all = store.get_documents("project", doc! {}, 0).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn get_documents_applies_equality_filter() {
        let store = MemoryStore::new("test");
        store.insert("project", doc! { "status": "active" }).await.unwrap();
        store.insert("project", doc! { "status": "paused" }).await.unwrap();

        let docs = store
            .get_documents("project", doc! { "status": "paused" }, 10)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn update_merges_patch_and_keeps_other_fields() {
        let store = MemoryStore::new("test");
        let id = store
            .insert("project", doc! { "name": "A", "status": "active" })
            .await
            .unwrap();

        let updated = store
            .update_one("project", id, doc! { "status": "completed" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get_str("name").unwrap(), "A");
        assert_eq!(updated.get_str("status").unwrap(), "completed");
    }

    #[tokio::test]
    async fn update_missing_document_returns_none() {
        let store = MemoryStore::new("test");
        let result = store
            .update_one("project", ObjectId::new(), doc! { "name": "x" })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_is_zero_the_second_time() {
        let store = MemoryStore::new("test");
        let id = store.insert("project", doc! { "name": "A" }).await.unwrap();

        assert_eq!(store.delete_one("project", id).await.unwrap(), 1);
        assert_eq!(store.delete_one("project", id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let store = MemoryStore::new("test");
        let id = ObjectId::new();
        store.insert("project", doc! { "_id": id }).await.unwrap();

        let err = store.insert("project", doc! { "_id": id }).await.unwrap_err();
        assert_matches!(err, StoreError::DuplicateId(_));
    }

    #[tokio::test]
    async fn lists_collections_created_by_inserts() {
        let store = MemoryStore::new("test");
        assert!(store.list_collection_names().await.unwrap().is_empty());

        store.insert("project", doc! {}).await.unwrap();
        assert_eq!(store.list_collection_names().await.unwrap(), ["project"]);
    }
}
