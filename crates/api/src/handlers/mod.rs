//! Request handlers.
//!
//! `project` provides the CRUD handlers, delegating to the repository in
//! `starter_db` and mapping errors via [`AppError`](crate::error::AppError).
//! `diagnostics` reports store connectivity and never fails.

pub mod diagnostics;
pub mod project;
