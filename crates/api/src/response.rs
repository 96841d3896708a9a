//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body used by the informational endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "ok": true }` acknowledgement returned by deletes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
