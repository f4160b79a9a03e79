//! Single-shot page fetching with browser-like request shaping.
//!
//! The pipeline talks to the network only through the [`PageFetcher`] trait.
//! [`HttpFetcher`] is the reqwest-backed implementation: one GET per call,
//! the platform's fixed header set, an optional session cookie, and a hard
//! timeout. There are no retries.

use crate::scrapers::medium::Platform;
use crate::utils::describe_error;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use reqwest::Client;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Default upper bound on a single fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code (always in the 2xx range).
    pub status: u16,
    /// The URL the response was served from, after redirects.
    pub final_url: String,
    /// The `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: Vec<u8>,
}

/// Why a fetch did not produce a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("URL must be from {expected} (got {host})")]
    WrongDomain { host: String, expected: String },
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("failed to get the data with error response code: {0}")]
    HttpStatus(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Errors raised while building an [`HttpFetcher`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid value for header `{0}`")]
    InvalidHeader(&'static str),
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Anything that can turn a URL into a fetched page.
///
/// The orchestrator is generic over this trait so that the network can be
/// replaced by a scripted fetcher in tests.
pub trait PageFetcher {
    /// Fetch `url` once.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// reqwest-backed [`PageFetcher`].
///
/// The client is built once and reused, so concurrent fetches share one
/// connection pool. Headers and timeout are applied per request.
pub struct HttpFetcher {
    client: Client,
    platform: Platform,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher for `platform`.
    ///
    /// # Arguments
    ///
    /// * `platform` - The site being scraped; supplies the domain check and the header set
    /// * `session_cookie` - Optional `Cookie` header value sent with every request
    /// * `timeout` - Upper bound on the whole request, including the body
    pub fn new(
        platform: Platform,
        session_cookie: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Self::with_client(client, platform, session_cookie, timeout)
    }

    /// Create a fetcher around an existing reqwest [`Client`].
    pub fn with_client(
        client: Client,
        platform: Platform,
        session_cookie: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let mut headers = platform.request_headers()?;
        if let Some(cookie) = session_cookie.map(str::trim).filter(|c| !c.is_empty()) {
            let value = HeaderValue::from_str(cookie).map_err(|_| ClientError::InvalidHeader("cookie"))?;
            headers.insert(COOKIE, value);
        }
        Ok(Self {
            client,
            platform,
            headers,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Transport(describe_error(&e))
        }
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("platform", &self.platform)
            .field("timeout", &self.timeout)
            .field("has_cookie", &self.headers.contains_key(COOKIE))
            .finish()
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        self.platform.ensure_domain(url)?;

        let t0 = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Fetch returned non-success status"
            );
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        if final_url != url.as_str() {
            debug!(%final_url, "Fetch followed redirects");
        }
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(FetchedPage {
            status: status.as_u16(),
            final_url,
            content_type,
            body: body.to_vec(),
        })
    }
}
