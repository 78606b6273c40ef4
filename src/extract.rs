//! Request extractors that reject bad input with the same JSON [Message](crate::Message)
//! body as every other error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// A JSON request body. Parsing failures become [Error::InvalidRequest].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// A path parameter. Parsing failures become [Error::InvalidRequest].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);
