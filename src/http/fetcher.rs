//! Page fetching
//!
//! One call, one round trip: `fetch_page` requests a single page of
//! listings and hands back the raw body. Spacing between calls is the
//! engine's job.

use super::client::{HttpClient, HttpClientConfig, RequestConfig};
use crate::config::SearchConfig;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// A source of raw listing pages, addressed by zero-based index
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw body of page `page`.
    ///
    /// Fails with a network error on transport failure or non-success status.
    async fn fetch_page(&self, page: u32) -> Result<String>;
}

/// Fetches listing pages from the search API over HTTP
#[derive(Debug)]
pub struct ListingsFetcher {
    client: HttpClient,
    endpoint: String,
    query: String,
    page_size: u32,
}

impl ListingsFetcher {
    /// Create a fetcher with an existing client
    pub fn new(
        client: HttpClient,
        endpoint: impl Into<String>,
        query: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            query: query.into(),
            page_size,
        }
    }

    /// Build a fetcher, and its client, from a search config
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let client_config = HttpClientConfig::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build();
        let client = HttpClient::with_config(client_config)?;

        Ok(Self::new(
            client,
            &config.endpoint,
            &config.query,
            config.page_size,
        ))
    }

    /// Query parameters for a page: `text`, `per_page`, `page`
    pub fn request_for(&self, page: u32) -> RequestConfig {
        RequestConfig::new()
            .query("text", &self.query)
            .query("per_page", self.page_size.to_string())
            .query("page", page.to_string())
    }
}

#[async_trait]
impl PageSource for ListingsFetcher {
    async fn fetch_page(&self, page: u32) -> Result<String> {
        info!(page, endpoint = %self.endpoint, "Requesting listings page");
        self.client
            .get_text_with_config(&self.endpoint, self.request_for(page))
            .await
    }
}
