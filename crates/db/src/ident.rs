//! Identifier codec.
//!
//! The API exposes ids as 24-character hex strings; the store keys documents
//! by `ObjectId`. Malformed ids are rejected here so they never reach a query.

use bson::oid::ObjectId;

/// Whether `raw` is a syntactically valid `ObjectId` (24 hex characters).
pub fn is_valid(raw: &str) -> bool {
    ObjectId::parse_str(raw).is_ok()
}

/// Convert a string id into the store-native `ObjectId`.
///
/// Returns `None` when [`is_valid`] would return `false`.
pub fn parse(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// Render an `ObjectId` as its lowercase hex string.
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}
