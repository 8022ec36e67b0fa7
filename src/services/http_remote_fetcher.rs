//! URL import client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::domain::{AppError, ExpandConfig};
use crate::ports::{FetchedResource, RemoteFetcher};

const ACCEPT_TEXTUAL: &str =
    "text/markdown, application/json;q=0.9, text/plain;q=0.8, */*;q=0.1";

/// Blocking HTTP client for URL imports.
#[derive(Debug, Clone)]
pub struct HttpRemoteFetcher {
    client: Client,
}

impl HttpRemoteFetcher {
    /// Create a client with the configured user agent and timeout.
    pub fn new(config: &ExpandConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl RemoteFetcher for HttpRemoteFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedResource, AppError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, ACCEPT_TEXTUAL)
            .send()
            .map_err(|e| AppError::Network { url: url.to_string(), details: e.to_string() })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .map_err(|e| AppError::Network { url: url.to_string(), details: e.to_string() })?;

        Ok(FetchedResource { status, content_type, body })
    }
}
