/// Picture-of-the-day API client
///
/// One GET per date against the configured endpoint. Failures come back
/// as `FetchError` values; nothing here panics or aborts a batch.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::state::data::ImageRecord;

/// Anything that can produce the record for one date
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, date: &str) -> Result<ImageRecord, FetchError>;
}

/// HTTP-backed record source
pub struct ApodClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl RecordSource for ApodClient {
    async fn fetch(&self, date: &str) -> Result<ImageRecord, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("date", date)])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_record(&body)
    }
}

/// Parse a response body into a record
pub fn parse_record(body: &str) -> Result<ImageRecord, FetchError> {
    Ok(serde_json::from_str(body)?)
}

impl std::fmt::Debug for ApodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApodClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
