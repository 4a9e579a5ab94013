//! PokeAPI v2 client

mod http;
mod provider;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};
use crate::types::ClientOptions;

/// Upper bound on `limit` for a single list request; larger limits are clamped.
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// PokeAPI client over reqwest
pub struct PokeApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl PokeApiClient {
    /// Build a client from connection options.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed (TLS backend init).
    pub fn new(options: &ClientOptions) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                options.connect_timeout_secs,
                options.request_timeout_secs,
            )?,
            base_url: normalize_base_url(&options.base_url),
        })
    }

    /// Wrap an existing reqwest client, e.g. one shared with an image loader.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }
}
