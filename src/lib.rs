//! Categories is a small web service for managing named categories.
//!
//! This library provides a JSON REST API for creating, listing, renaming and
//! deleting categories, backed by either SQLite or an in-memory map.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod config;
mod endpoints;
mod extract;
mod logging;
mod message;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{
    Category, CategoryBackend, CategoryDraft, CategoryId, CategoryName, CategoryPayload,
    CategoryStore, InMemoryCategoryBackend, SQLiteCategoryBackend,
};
pub use config::{BackendKind, ServerConfig};
pub use logging::{LOG_BODY_LENGTH_LIMIT, MAX_REQUEST_BODY_BYTES, logging_middleware};
pub use message::Message;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// The category name is already used by another category.
    ///
    /// Category names are compared exactly, so "Books" and "books" are
    /// different names.
    #[error("category with the name {0} already exists")]
    DuplicateCategoryName(CategoryName),

    /// No category has the given ID, either because it was never created or
    /// because it has been deleted.
    #[error("Category not found with categoryId: {0}")]
    CategoryNotFound(CategoryId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The request body or path could not be parsed, e.g. malformed JSON or
    /// a category ID that is not an integer.
    ///
    /// Holds the status code and reason given by the extractor that rejected
    /// the request.
    #[error("{1}")]
    InvalidRequest(StatusCode, String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EmptyCategoryName | Error::DuplicateCategoryName(_) => {
                message::render(StatusCode::BAD_REQUEST, Message::new(self.to_string()))
            }
            Error::CategoryNotFound(_) => {
                message::render(StatusCode::NOT_FOUND, Message::new(self.to_string()))
            }
            Error::InvalidRequest(status_code, reason) => {
                message::render(status_code, Message::new(reason))
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            // Callers log them with their own context.
            Error::SqlError(_) | Error::DatabaseLockError => message::render(
                StatusCode::INTERNAL_SERVER_ERROR,
                Message::internal_server_error(),
            ),
        }
    }
}
