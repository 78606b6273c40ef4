//! Category listing endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::category::CategoryStore;

/// Respond with every category as a JSON array, oldest first.
pub async fn list_categories_endpoint(State(store): State<CategoryStore>) -> Response {
    match store.list() {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while listing categories: {error}");
            error.into_response()
        }
    }
}
