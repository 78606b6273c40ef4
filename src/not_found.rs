use axum::{http::StatusCode, response::Response};

use crate::message::{Message, render};

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        Message::new("the requested resource could not be found"),
    )
}
