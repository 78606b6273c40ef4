//! JSON message bodies for confirmations and errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A human readable message sent to the client, e.g. a delete confirmation or
/// the reason a request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The text of the message.
    pub message: String,
}

impl Message {
    /// Create a message with the given text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message sent when something unexpected went wrong on the server.
    pub fn internal_server_error() -> Self {
        Self::new("Sorry, something went wrong. Try again later or check the server logs")
    }
}

#[inline]
pub fn render(status_code: StatusCode, message: Message) -> Response {
    (status_code, Json(message)).into_response()
}
