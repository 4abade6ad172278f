// src/integrations/http/client.rs
//
// HTTP Resource Fetcher
//
// The pipeline's only network-performing unit. Everything above this trait
// is injected with it, which keeps the services deterministic under test.
//
// This is INFRASTRUCTURE, not DOMAIN: it returns raw fetched bytes and
// never interprets them.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{header, Client};

use crate::error::{AppError, AppResult};

/// User-Agent sent with every request. Some origins refuse obviously
/// non-browser clients, so we present as a common desktop browser.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// An HTTP resource reduced to the parts the pipeline inspects.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    pub status: u16,
    /// Raw Content-Type header value; empty when the server sent none
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FetchedResource {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for fetching one resource with a per-attempt timeout.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> AppResult<FetchedResource>;
}

/// reqwest-backed fetcher used outside of tests.
pub struct HttpResourceFetcher {
    http_client: Client,
}

impl HttpResourceFetcher {
    pub fn new() -> AppResult<Self> {
        let http_client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(AppError::Http)?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> AppResult<FetchedResource> {
        let response = self.http_client.get(url).timeout(timeout).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(FetchedResource {
            status,
            content_type,
            bytes,
        })
    }
}
