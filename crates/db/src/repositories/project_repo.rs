//! Repository for the `project` collection.

use bson::oid::ObjectId;
use bson::Document;

use crate::models::project::{ProjectCreate, ProjectOut, ProjectUpdate};
use crate::store::{DocumentStore, UPDATED_AT};
use crate::StoreError;

/// Collection holding project documents.
pub const COLLECTION: &str = "project";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List up to `limit` projects in the store's natural order. No sort is applied.
    pub async fn list(store: &dyn DocumentStore, limit: i64) -> Result<Vec<ProjectOut>, StoreError> {
        let docs = store.get_documents(COLLECTION, Document::new(), limit).await?;
        docs.into_iter().map(ProjectOut::from_document).collect()
    }

    /// Insert a new project and read it back.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &ProjectCreate,
    ) -> Result<ProjectOut, StoreError> {
        let id = store.create_document(COLLECTION, input.to_document()?).await?;
        let doc = store
            .find_one(COLLECTION, id)
            .await?
            .ok_or_else(|| StoreError::MissingAfterWrite(id.to_hex()))?;
        ProjectOut::from_document(doc)
    }

    /// Find a project by id.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: ObjectId,
    ) -> Result<Option<ProjectOut>, StoreError> {
        store
            .find_one(COLLECTION, id)
            .await?
            .map(ProjectOut::from_document)
            .transpose()
    }

    /// Apply the fields present in `input` and refresh `updated_at`.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        store: &dyn DocumentStore,
        id: ObjectId,
        input: &ProjectUpdate,
    ) -> Result<Option<ProjectOut>, StoreError> {
        let mut patch = input.changes();
        patch.insert(UPDATED_AT, bson::DateTime::now());
        store
            .update_one(COLLECTION, id, patch)
            .await?
            .map(ProjectOut::from_document)
            .transpose()
    }

    /// Permanently delete a project. Returns `true` if a document was removed.
    pub async fn delete(store: &dyn DocumentStore, id: ObjectId) -> Result<bool, StoreError> {
        Ok(store.delete_one(COLLECTION, id).await? > 0)
    }
}
