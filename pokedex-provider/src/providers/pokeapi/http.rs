//! PokeAPI HTTP request methods

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::PokeApiClient;

impl PokeApiClient {
    /// Execute a GET request against `{base_url}/{path}` and decode the JSON body.
    ///
    /// `endpoint` labels logs and errors; `path` is reported by `NotFound`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        let request = self.client.get(&url).query(query);

        let (status, response_text) = HttpUtils::execute_request(request, endpoint, &url).await?;
        HttpUtils::check_status(status, &response_text, endpoint, path)?;
        HttpUtils::parse_json(&response_text, endpoint)
    }
}
