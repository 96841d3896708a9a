//! API models and their document conversions.
//!
//! Each submodule contains:
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for merge-patches
//! - A `Serialize` output struct parsed from a stored document

pub mod project;
