//! Category update endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryDraft, CategoryId, CategoryPayload, CategoryStore},
    extract::{JsonBody, PathParam},
};

/// Handle renaming a category. Responds with the updated category.
///
/// The ID in the path decides which category is updated, any `categoryId` in
/// the body is ignored.
pub async fn update_category_endpoint(
    PathParam(category_id): PathParam<CategoryId>,
    State(store): State<CategoryStore>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> Response {
    let category = match CategoryDraft::try_from(payload) {
        Ok(category) => category,
        Err(error) => return error.into_response(),
    };

    match store.update(category, category_id) {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(error @ (Error::CategoryNotFound(_) | Error::DuplicateCategoryName(_))) => {
            tracing::debug!("Rejected update to category {category_id}: {error}");
            error.into_response()
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating category {category_id}: {error}"
            );
            error.into_response()
        }
    }
}

#[cfg(test)]
mod update_category_endpoint_tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        Message,
        extract::{JsonBody, PathParam},
        category::{
            Category, CategoryDraft, CategoryName, CategoryPayload, CategoryStore,
            InMemoryCategoryBackend, update_category_endpoint,
        },
        test_utils::parse_json_body,
    };

    fn get_store_with_category(name: &str) -> (CategoryStore, Category) {
        let store = CategoryStore::new(InMemoryCategoryBackend::new());
        let category = store
            .create(CategoryDraft::new(CategoryName::new_unchecked(name)))
            .expect("Could not create test category");

        (store, category)
    }

    #[tokio::test]
    async fn update_category_succeeds() {
        let (store, category) = get_store_with_category("Electronics");
        let payload = CategoryPayload {
            category_id: Some(category.id + 10),
            category_name: "Books".to_owned(),
        };

        let response =
            update_category_endpoint(PathParam(category.id), State(store.clone()), JsonBody(payload)).await;

        let want = Category {
            id: category.id,
            name: CategoryName::new_unchecked("Books"),
        };
        assert_eq!(response.status(), StatusCode::OK);
        let got: Category = parse_json_body(response).await;
        assert_eq!(got, want);
        assert_eq!(store.list(), Ok(vec![want]));
    }

    #[tokio::test]
    async fn update_with_invalid_id_returns_not_found() {
        let (store, category) = get_store_with_category("Electronics");
        let payload = CategoryPayload {
            category_id: None,
            category_name: "Books".to_owned(),
        };

        let response = update_category_endpoint(PathParam(99), State(store.clone()), JsonBody(payload)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let got: Message = parse_json_body(response).await;
        assert_eq!(got, Message::new("Category not found with categoryId: 99"));
        assert_eq!(store.list(), Ok(vec![category]));
    }

    #[tokio::test]
    async fn update_with_empty_name_fails() {
        let (store, category) = get_store_with_category("Electronics");
        let payload = CategoryPayload {
            category_id: None,
            category_name: " ".to_owned(),
        };

        let response =
            update_category_endpoint(PathParam(category.id), State(store.clone()), JsonBody(payload)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.list(), Ok(vec![category]));
    }
}
