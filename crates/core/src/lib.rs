//! Store-agnostic domain rules for the starter backend.
//!
//! Holds the error taxonomy and the Project field constraints so both the
//! storage layer and the HTTP layer agree on what a valid project looks like.

pub mod error;
pub mod project;
