pub mod health;
pub mod project;

use axum::routing::get;
use axum::Json;
use axum::Router;

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/hello
async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                           greeting
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .nest("/projects", project::router())
}
