//! Category creation endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryDraft, CategoryPayload, CategoryStore},
    extract::JsonBody,
};

/// Handle a new category. Responds with the created category and its new ID.
pub async fn create_category_endpoint(
    State(store): State<CategoryStore>,
    JsonBody(new_category): JsonBody<CategoryPayload>,
) -> Response {
    let category = match CategoryDraft::try_from(new_category) {
        Ok(category) => category,
        Err(error) => return error.into_response(),
    };

    match store.create(category) {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(error @ Error::DuplicateCategoryName(_)) => {
            tracing::debug!("Rejected new category: {error}");
            error.into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a category: {error}");
            error.into_response()
        }
    }
}
