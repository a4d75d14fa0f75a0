//! Transport contract for hosting the store.
//!
//! # Responsibility
//! - Define request/response envelopes a transport parses and writes.
//! - Route requests to store operations and map failures to status classes.
//!
//! # Invariants
//! - A rejected request always yields a response; dispatch never panics.
//! - Log events carry notebook names, ids and counts only, never note
//!   content or tags.

use crate::store::{ErrorKind, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod dispatch;
pub mod request;
pub mod response;

pub use dispatch::{dispatch, reject_undecodable};
pub use request::ApiRequest;
pub use response::{ApiResponse, ApiStatus, ResponseBody};

/// Failure raised while serving one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be decoded by the transport.
    InvalidRequest(String),
    /// Note id is not a valid UUID.
    InvalidNoteId(String),
    Store(StoreError),
}

impl ApiError {
    /// Maps this failure to the protocol-level status class.
    pub fn status(&self) -> ApiStatus {
        match self {
            Self::InvalidRequest(_) | Self::InvalidNoteId(_) => ApiStatus::ClientError,
            Self::Store(err) => match err.kind() {
                ErrorKind::AlreadyExists => ApiStatus::Conflict,
                ErrorKind::NotFound | ErrorKind::RequiredFieldMissing => ApiStatus::ClientError,
                ErrorKind::Internal => ApiStatus::InternalError,
            },
        }
    }

    /// Short label for log events.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::InvalidNoteId(_) => "invalid_note_id",
            Self::Store(err) => match err.kind() {
                ErrorKind::AlreadyExists => "already_exists",
                ErrorKind::NotFound => "not_found",
                ErrorKind::RequiredFieldMissing => "required_field_missing",
                ErrorKind::Internal => "internal",
            },
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(details) => write!(f, "invalid request: {details}"),
            Self::InvalidNoteId(value) => write!(f, "invalid note id: `{value}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<&ApiError> for ApiResponse {
    fn from(value: &ApiError) -> Self {
        ApiResponse::failure(value.status(), value.to_string())
    }
}
