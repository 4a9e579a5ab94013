//! Unified error type definition
//!
//! Controllers never return these: fetch failures are folded into
//! [`Resource::Error`](crate::Resource::Error) by the repository. `CoreError`
//! only covers setting the catalog up (configuration, client construction).

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use pokedex_provider::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Configuration value out of range or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Client error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behaviour (bad user input), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::SerializationError(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
