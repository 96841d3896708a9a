//! Store diagnostics for operators.
//!
//! Unlike the CRUD handlers this endpoint always answers 200: every failure,
//! including a panic inside the store driver, is folded into the report as
//! a truncated message.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::extract::State;
use axum::Json;
use futures::FutureExt;
use serde::Serialize;
use starter_db::{DocumentStore, StoreHandle};

use crate::state::AppState;

/// At most this many collection names are reported.
pub const MAX_COLLECTIONS: usize = 10;

/// Error messages are cut to this many characters.
pub const MAX_ERROR_CHARS: usize = 50;

/// Diagnostics response payload.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".into(),
            database: "❌ Not Available".into(),
            database_url: String::new(),
            database_name: String::new(),
            connection_status: "Not Connected".into(),
            collections: Vec::new(),
        }
    }
}

/// Cut `message` to at most `max` characters.
pub fn truncate_message(message: &str, max: usize) -> String {
    message.chars().take(max).collect()
}

fn presence(is_set: bool) -> String {
    let label = if is_set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

async fn probe_store(store: &StoreHandle, report: &mut DiagnosticsReport) {
    report.database = "✅ Available".into();
    report.connection_status = "Connected".into();

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".into();
        }
        Err(err) => {
            tracing::warn!(error = %err, "Diagnostics could not list collections");
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_message(&err.to_string(), MAX_ERROR_CHARS)
            );
        }
    }
}

/// GET /test
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport::default();

    match &state.store {
        Some(store) => {
            let probe = AssertUnwindSafe(probe_store(store, &mut report)).catch_unwind().await;
            if let Err(payload) = probe {
                let message = panic_message(payload.as_ref());
                tracing::error!(error = %message, "Diagnostics probe panicked");
                report.database = format!(
                    "❌ Error: {}",
                    truncate_message(&message, MAX_ERROR_CHARS)
                );
            }
        }
        None => {
            report.database = "⚠️  Available but not initialized".into();
        }
    }

    report.database_url = presence(state.config.database_url.is_some());
    report.database_name = presence(state.config.database_name.is_some());

    Json(report)
}
