//! Three-state result of an asynchronous fetch

use serde::Serialize;

/// Message every repository failure is collapsed into.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Outcome of an asynchronous fetch, as seen by the presentation layer.
///
/// `Loading` is the state before any round trip completes. Exactly one
/// variant is active; consumers are expected to match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Resource<T> {
    /// No response yet.
    Loading,
    /// The fetch succeeded.
    Success(T),
    /// The fetch failed. `data` may carry a stale value to keep displaying.
    Error {
        message: String,
        data: Option<T>,
    },
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Resource<T> {
    /// `Error` without data
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            data: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The payload of `Success`, or the stale payload of `Error` if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Success(data) => Some(data),
            Self::Error { data, .. } => data.as_ref(),
        }
    }

    /// The message of `Error`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            Self::Loading | Self::Success(_) => None,
        }
    }

    /// Transform the payload, keeping the variant.
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(data) => Resource::Success(f(data)),
            Self::Error { message, data } => Resource::Error {
                message,
                data: data.map(f),
            },
        }
    }
}

impl<T, E> From<Result<T, E>> for Resource<T> {
    /// `Ok` becomes `Success`; any `Err` becomes the generic [`UNKNOWN_ERROR_MESSAGE`].
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(_) => Self::error(UNKNOWN_ERROR_MESSAGE),
        }
    }
}
