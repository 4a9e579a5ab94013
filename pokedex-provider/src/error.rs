use serde::{Deserialize, Serialize};

/// Unified error type for all PokeAPI transport operations.
///
/// Each variant carries the endpoint (or resource) that produced it plus
/// variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// Callers that only care about success or failure (the repository layer)
/// collapse every variant into a single message; the variants exist so the
/// failure can be logged at the right level first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that was being called.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that was being called.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Resource path that was not found, e.g. `pokemon/missingno`.
        resource: String,
    },

    /// The server answered with a non-success status other than 404.
    HttpStatus {
        /// Endpoint that was being called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Failed to parse the API response body.
    ParseError {
        /// Endpoint that was being called.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter is invalid (e.g. an empty name, a malformed base URL).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// Whether this is expected behaviour (bad input, missing resource), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidParameter { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::NotFound { resource } => write!(f, "Resource '{resource}' not found"),
            Self::HttpStatus {
                endpoint, status, ..
            } => write!(f, "[{endpoint}] Unexpected HTTP status {status}"),
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
