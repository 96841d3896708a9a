//! Query parameter types for API handlers.

use serde::Deserialize;

/// Number of projects returned by a list call that does not pass `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// List parameters (`?limit=`).
///
/// No upper bound is enforced; a limit of 0 returns everything.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}
