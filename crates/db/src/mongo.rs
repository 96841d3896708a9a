//! MongoDB backend for [`DocumentStore`].

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use crate::store::DocumentStore;
use crate::StoreError;

/// A [`DocumentStore`] backed by a single MongoDB database.
///
/// Cheap to share: the driver's `Client` pools connections internally.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build a client for `database_url` bound to `database_name`.
    ///
    /// Parses the connection string only; no round-trip is made until the
    /// first operation.
    pub async fn connect(database_url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(database_url).await?;
        tracing::info!(database = %database_name, "MongoDB client created");
        Ok(Self {
            db: client.database(database_name),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, collection: &str, record: Document) -> Result<ObjectId, StoreError> {
        let result = self.collection(collection).insert_one(record).await?;
        result.inserted_id.as_object_id().ok_or(StoreError::MissingId)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter).limit(limit).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let doc = self.collection(collection).find_one(doc! { "_id": id }).await?;
        Ok(doc)
    }

    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        patch: Document,
    ) -> Result<Option<Document>, StoreError> {
        let doc = self
            .collection(collection)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": patch })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(doc)
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection(collection).delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
