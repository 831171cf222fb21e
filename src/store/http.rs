use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;

use super::{ContentStore, PublishError};
use crate::{config::StorageConfig, data::Locator, error::ConfigurationError};

/// Uploads blobs to an HTTP storage provider.
///
/// `POST {provider_url}/upload` with the raw body; the provider answers with
/// `{"id": ..., "uri": ...}` where `uri` is optional.
pub struct HttpContentStore {
    client: Client,
    upload_url: String,
    gateway_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
    #[serde(default)]
    uri: Option<String>,
}

impl HttpContentStore {
    pub fn new(config: &StorageConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        let provider_url = config.provider_url.trim_end_matches('/');
        let gateway_url = config
            .gateway_url
            .as_deref()
            .unwrap_or(provider_url)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            upload_url: format!("{provider_url}/upload"),
            gateway_url,
        })
    }

    fn locator_for(&self, response: UploadResponse) -> Locator {
        match response.uri {
            Some(uri) if !uri.is_empty() => Locator::new(uri),
            _ => Locator::new(format!("{}/{}", self.gateway_url, response.id)),
        }
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<Locator, PublishError> {
        debug!(url = %self.upload_url, size = bytes.len(), content_type, "uploading content");

        let response = self
            .client
            .post(&self.upload_url)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(PublishError::from_status(status.as_u16(), message));
        }

        // Read errors go through the transport classifier; only the decode is
        // an invalid response.
        let bytes = response.bytes().await?;
        let body: UploadResponse = serde_json::from_slice(&bytes)
            .map_err(|e| PublishError::InvalidResponse(e.to_string()))?;

        if body.id.is_empty() {
            return Err(PublishError::InvalidResponse(
                "upload response has an empty id".to_string(),
            ));
        }

        Ok(self.locator_for(body))
    }
}
