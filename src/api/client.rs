use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::api::endpoint::Endpoint;
use crate::api::error::FetchError;
use crate::config::ApiConfig;

/// Issues GET requests against the explorer API and returns decoded JSON.
///
/// Implementations must not retry: one call is one request.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `endpoint` and decode the body as JSON.
    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError>;
}

/// reqwest-backed API client.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Build a client for `config.base_url` with the configured timeouts.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl ApiClient for RestClient {
    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let path = endpoint.path();
        let response = self
            .client
            .get(self.url_for(endpoint))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                path: path.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode { path, source: e })
    }
}
