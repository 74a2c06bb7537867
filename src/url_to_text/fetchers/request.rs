use super::DocumentFetcher;
use crate::config::ImportConfig;
use crate::error::ImportError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Plain HTTP fetcher. Does not execute JavaScript.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ImportConfig) -> Result<Self, ImportError> {
        Self::new(Some(Duration::from_secs(config.timeout)), &config.user_agent)
    }
}

#[async_trait]
impl DocumentFetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("Fetching URL: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        // A redirect that was not followed may still carry a usable body
        if !status.is_success()
            && status != StatusCode::MOVED_PERMANENTLY
            && status != StatusCode::FOUND
        {
            return Err(ImportError::HttpStatus(status.as_u16()));
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
