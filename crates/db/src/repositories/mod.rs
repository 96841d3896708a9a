//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn DocumentStore` as the first argument.

pub mod project_repo;

pub use project_repo::ProjectRepo;
