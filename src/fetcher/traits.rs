use crate::model::FetchError;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// The raw comma-separated query as typed by the user. The backend
    /// does its own filtering on it; the client still filters locally.
    pub query: String,
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, req: &FetchRequest) -> Result<Value, FetchError>;
}
