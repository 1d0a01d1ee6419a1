//! Message resource error types.
//!
//! These errors are caused by the client (bad input, unknown IDs) and are reported with a
//! 4xx status and a JSON [`ErrorDto`] body describing the problem.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MessageError {
    /// No message exists with the provided ID
    #[error("Message {0} not found")]
    NotFound(String),
    /// The provided ID is not a 24 character hex string
    #[error("Invalid ID {0:?}, expected 24 hexadecimal characters")]
    InvalidId(String),
    /// The author referenced by a new message does not exist
    #[error("Author {0} not found")]
    AuthorNotFound(String),
    /// A message with the provided ID already exists
    #[error("Message {0} already exists")]
    AlreadyExists(String),
    /// A required field was provided but empty
    #[error("Field {0:?} must not be empty")]
    EmptyField(&'static str),
}

impl MessageError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::InvalidId(_) | Self::AuthorNotFound(_) | Self::EmptyField(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
