/// Errors raised by the document store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No store handle was configured at startup.
    #[error("Document store is not available")]
    Unavailable,

    /// The MongoDB driver reported a failure.
    #[error("Store driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A typed model could not be converted into a document.
    #[error("Document serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    /// The store did not report an `ObjectId` for an inserted document.
    #[error("Inserted document has no ObjectId")]
    MissingId,

    /// A document with the same `_id` already exists.
    #[error("Duplicate document id {0}")]
    DuplicateId(String),

    /// A document written moments ago could not be read back.
    #[error("Document {0} missing after write")]
    MissingAfterWrite(String),

    /// A stored document does not match the API model.
    #[error("Malformed document: {0}")]
    Malformed(String),
}
