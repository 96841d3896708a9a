//! Project models and DTOs.

use bson::{Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};
use starter_core::error::CoreError;
use starter_core::project::{validate_description, validate_name, DEFAULT_STATUS};

use crate::serialize::serialize_document;
use crate::StoreError;

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Maps a present field to `Some`, so an explicit `null` becomes `Some(None)`
/// while a missing field stays `None` via `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `active` if omitted.
    #[serde(default = "default_status")]
    pub status: String,
    pub owner_email: Option<String>,
    /// ISO date, stored as given.
    pub due_date: Option<String>,
}

impl ProjectCreate {
    /// Enforce the name and description length bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// The document to insert. Unset optional fields are stored as `null`.
    pub fn to_document(&self) -> Result<Document, StoreError> {
        Ok(bson::to_document(self)?)
    }
}

/// DTO for partially updating a project. Only fields present in the request
/// are applied.
///
/// `description`, `owner_email` and `due_date` use `Option<Option<String>>`
/// so an explicit `null` clears the value. `name` and `status` are never
/// null on a stored project, so a `null` there is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub owner_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<String>>,
}

impl ProjectUpdate {
    /// Enforce the same bounds as [`ProjectCreate::validate`] on present fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(Some(description)) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// Whether the request sets no fields at all.
    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// The `$set` document holding only the fields present in the request.
    pub fn changes(&self) -> Document {
        let mut changes = Document::new();
        if let Some(name) = &self.name {
            changes.insert("name", name.as_str());
        }
        if let Some(description) = &self.description {
            changes.insert("description", Bson::from(description.clone()));
        }
        if let Some(status) = &self.status {
            changes.insert("status", status.as_str());
        }
        if let Some(owner_email) = &self.owner_email {
            changes.insert("owner_email", Bson::from(owner_email.clone()));
        }
        if let Some(due_date) = &self.due_date {
            changes.insert("due_date", Bson::from(due_date.clone()));
        }
        changes
    }
}

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOut {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub owner_email: Option<String>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProjectOut {
    /// Serialize a stored document and parse it into the output model.
    ///
    /// Fails with [`StoreError::Malformed`] when the document lacks an id or
    /// name, or carries a field of the wrong type.
    pub fn from_document(doc: Document) -> Result<Self, StoreError> {
        let fields = serialize_document(doc);
        serde_json::from_value(serde_json::Value::Object(fields))
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use bson::doc;
    use bson::oid::ObjectId;

    fn update(json: serde_json::Value) -> ProjectUpdate {
        serde_json::from_value(json).unwrap()
    }

    // -- ProjectCreate -------------------------------------------------------

    #[test]
    fn create_defaults_status_to_active() {
        let input: ProjectCreate = serde_json::from_value(serde_json::json!({"name": "Launch"})).unwrap();
        assert_eq!(input.status, "active");
        assert!(input.description.is_none());
    }

    #[test]
    fn create_document_carries_every_field() {
        let input: ProjectCreate = serde_json::from_value(serde_json::json!({
            "name": "Launch",
            "owner_email": "a@b.c",
        }))
        .unwrap();
        let doc = input.to_document().unwrap();

        assert_eq!(doc.get_str("name").unwrap(), "Launch");
        assert_eq!(doc.get_str("status").unwrap(), "active");
        assert_eq!(doc.get_str("owner_email").unwrap(), "a@b.c");
        assert_eq!(doc.get("description"), Some(&Bson::Null));
    }

    #[test]
    fn create_rejects_long_name() {
        let input: ProjectCreate =
            serde_json::from_value(serde_json::json!({"name": "x".repeat(121)})).unwrap();
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    // -- ProjectUpdate -------------------------------------------------------

    #[test]
    fn empty_body_is_empty_patch() {
        assert!(update(serde_json::json!({})).is_empty());
    }

    #[test]
    fn null_name_counts_as_absent() {
        assert!(update(serde_json::json!({"name": null})).is_empty());
    }

    #[test]
    fn changes_include_only_present_fields() {
        let changes = update(serde_json::json!({"status": "completed"})).changes();
        assert_eq!(changes, doc! { "status": "completed" });
    }

    #[test]
    fn explicit_null_clears_nullable_fields() {
        let patch = update(serde_json::json!({"description": null, "due_date": "2025-01-01"}));
        assert!(!patch.is_empty());
        assert_eq!(
            patch.changes(),
            doc! { "description": Bson::Null, "due_date": "2025-01-01" }
        );
    }

    #[test]
    fn update_rejects_empty_name() {
        assert!(update(serde_json::json!({"name": ""})).validate().is_err());
    }

    #[test]
    fn update_rejects_long_description() {
        let patch = update(serde_json::json!({"description": "d".repeat(2001)}));
        assert!(patch.validate().is_err());
    }

    // -- ProjectOut ----------------------------------------------------------

    #[test]
    fn out_from_stored_document() {
        let oid = ObjectId::new();
        let now = bson::DateTime::now();
        let out = ProjectOut::from_document(doc! {
            "_id": oid,
            "name": "Launch",
            "description": Bson::Null,
            "status": "active",
            "created_at": now,
            "updated_at": now,
        })
        .unwrap();

        assert_eq!(out.id, oid.to_hex());
        assert_eq!(out.name, "Launch");
        assert!(out.created_at.unwrap().ends_with('Z'));
        assert_eq!(out.owner_email, None);
    }

    #[test]
    fn out_defaults_missing_status() {
        let out = ProjectOut::from_document(doc! { "_id": ObjectId::new(), "name": "n" }).unwrap();
        assert_eq!(out.status, "active");
    }

    #[test]
    fn out_rejects_document_without_name() {
        let err = ProjectOut::from_document(doc! { "_id": ObjectId::new() }).unwrap_err();
        assert_matches!(err, StoreError::Malformed(_));
    }
}
