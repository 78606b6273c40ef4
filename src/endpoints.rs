//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/api/public/categories/{category_id}', are
//! matched by axum's path extractor.

/// The route to list and create categories.
pub const CATEGORIES: &str = "/api/public/categories";
/// The route to update a category.
pub const PUT_CATEGORY: &str = "/api/public/categories/{category_id}";
/// The route to delete a category.
pub const DELETE_CATEGORY: &str = "/api/admin/categories/{category_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes the endpoint has exactly one parameter of the form `{name}`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}
