// src/crawl/fetch.rs
// =============================================================================
// This module is the download front-end: the only code that makes HTTP
// requests.
//
// The rest of the crawler consumes the structured FetchResult and never
// sees reqwest types. The Fetch trait exists so the worker loop can be
// exercised in tests with a canned downloader instead of the network.
//
// Key behavior:
// - One shared Client (connection pooling) with a request timeout
// - Redirects are followed (up to 5); the final URL is reported so
//   relative links resolve the way a browser would
// - Transport errors come back as Err; the worker skips the page and
//   the crawl continues
//
// Rust concepts:
// - async-trait: async functions in traits need this crate on stable
// - Arc-friendly &self methods: one fetcher is shared by all workers
// =============================================================================

use crate::config::CrawlConfig;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The structured result of one download
//
// This is all the crawl pipeline ever sees of an HTTP response
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code
    pub status: u16,
    /// The URL after following redirects
    pub final_url: String,
    /// The Content-Type header, if the server sent one
    pub content_type: Option<String>,
    /// The raw response body
    pub body: Vec<u8>,
}

// The download operation, abstracted for testability
//
// Production code uses HttpFetcher; worker tests implement this trait
// with a HashMap of canned pages
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}

// The real fetcher, backed by a shared reqwest Client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the crawl policy
    //
    // Reusing one Client across all workers gives us connection pooling
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        // response.url() is the URL after redirects, not the one we asked for
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = response.bytes().await?.to_vec();

        Ok(FetchResult {
            status,
            final_url,
            content_type,
            body,
        })
    }
}
