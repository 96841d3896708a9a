//! Document-to-API serialization.
//!
//! Converts a raw stored document into the JSON shape the API exposes:
//! `_id` becomes a string `id`, date-time values become ISO-8601 strings,
//! and everything else passes through as relaxed extended JSON. No schema
//! checks happen here; the caller parses the result into a typed model.

use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::ident;

/// Field the store uses for the document identifier.
pub const STORE_ID_FIELD: &str = "_id";

/// Field the API uses for the document identifier.
pub const API_ID_FIELD: &str = "id";

/// Serialize a stored document into its API representation.
///
/// An empty document yields an empty map.
pub fn serialize_document(mut doc: Document) -> Map<String, Value> {
    let id = doc.remove(STORE_ID_FIELD);

    let mut fields: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, render_value(value)))
        .collect();

    match id {
        Some(Bson::Null) | None => {}
        Some(id) => {
            fields.insert(API_ID_FIELD.to_string(), Value::String(render_id(id)));
        }
    }
    fields
}

fn render_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => ident::encode(&oid),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn render_value(value: Bson) -> Value {
    match value {
        Bson::DateTime(dt) => Value::String(format_timestamp(dt)),
        other => other.into_relaxed_extjson(),
    }
}

/// Render a store timestamp as RFC 3339 (ISO-8601) in UTC with millisecond precision.
pub fn format_timestamp(dt: bson::DateTime) -> String {
    dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true)
}
