//! Category deletion endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryId, CategoryStore},
    extract::PathParam,
    message::{Message, render},
};

/// Handle category deletion. Responds with a confirmation message or error.
pub async fn delete_category_endpoint(
    PathParam(category_id): PathParam<CategoryId>,
    State(store): State<CategoryStore>,
) -> Response {
    match store.delete(category_id) {
        Ok(confirmation) => render(StatusCode::OK, Message::new(confirmation)),
        Err(error @ Error::CategoryNotFound(_)) => error.into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting category {category_id}: {error}"
            );
            error.into_response()
        }
    }
}
