//! Shared client helpers

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Result};

// ============ HTTP Client ============

/// Build an HTTP client with connect and request timeouts
pub fn create_http_client(connect_timeout_secs: u64, request_timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(request_timeout_secs))
        .build()
        .map_err(|e| ApiError::NetworkError {
            endpoint: "client".to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL handling ============

/// Drop trailing slashes so paths can be appended with a single `/`
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Validate a resource name and percent-encode it for use as a path segment
pub fn encode_path_segment(param: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidParameter {
            param: param.to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://pokeapi.co/api/v2/"),
            "https://pokeapi.co/api/v2"
        );
        assert_eq!(
            normalize_base_url("https://pokeapi.co/api/v2"),
            "https://pokeapi.co/api/v2"
        );
        assert_eq!(normalize_base_url("http://localhost:8080//"), "http://localhost:8080");
    }

    #[test]
    fn encode_plain_name() {
        assert_eq!(encode_path_segment("name", "pikachu").ok().as_deref(), Some("pikachu"));
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        assert_eq!(
            encode_path_segment("name", "mr mime/x").ok().as_deref(),
            Some("mr%20mime%2Fx")
        );
    }

    #[test]
    fn encode_rejects_blank_name() {
        let result = encode_path_segment("name", "   ");
        assert!(
            matches!(&result, Err(ApiError::InvalidParameter { param, .. }) if param == "name"),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn client_builds_with_timeouts() {
        assert!(create_http_client(1, 2).is_ok());
    }
}
