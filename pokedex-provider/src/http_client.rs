//! Generic HTTP client tools
//!
//! Reusable request processing shared by every endpoint: sending, logging,
//! status classification and JSON parsing. Endpoints build their own
//! `RequestBuilder` and hand it over.
//!
//! No retry layer: a failed call surfaces once and callers decide whether to
//! re-issue it.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, headers)
    /// * `endpoint` - endpoint label for logs and errors (e.g. `pokemon`)
    /// * `url` - full URL, logged only
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any response that was fully read,
    ///   including non-success statuses; classification is left to [`Self::check_status`]
    /// * `Err(ApiError::Timeout | ApiError::NetworkError)` when no response arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{endpoint}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Map a non-success status to an [`ApiError`]
    ///
    /// `resource` is the path that was requested and is reported by `NotFound`.
    pub fn check_status(
        status_code: u16,
        response_text: &str,
        endpoint: &str,
        resource: &str,
    ) -> Result<(), ApiError> {
        match status_code {
            200..=299 => Ok(()),
            404 => {
                log::warn!("[{endpoint}] {resource} not found");
                Err(ApiError::NotFound {
                    resource: resource.to_string(),
                })
            }
            _ => {
                log::warn!("[{endpoint}] Unexpected status {status_code}");
                Err(ApiError::HttpStatus {
                    endpoint: endpoint.to_string(),
                    status: status_code,
                    body: truncate_for_log(response_text),
                })
            }
        }
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!(
                "[{endpoint}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
