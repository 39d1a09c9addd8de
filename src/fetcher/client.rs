use crate::model::FetchError;
use crate::fetcher::traits::{FetchRequest, Fetcher};

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("estate-lens/0.1")
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/realestate/", self.base_url)
    }
}

#[async_trait::async_trait]
impl Fetcher for BackendClient {
    async fn fetch(&self, req: &FetchRequest) -> Result<Value, FetchError> {
        let url = self.endpoint();
        debug!("GET {} location={}", url, req.query);

        // .query() percent-encodes the location parameter, which the
        // original frontend skipped.
        let response = self
            .client
            .get(&url)
            .query(&[("location", req.query.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}
