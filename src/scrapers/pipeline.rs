//! Extraction orchestrator.
//!
//! Sequences one extraction through
//! `Start → Validated → Fetched → Parsed → Extracted`. Any stage may bail out;
//! every failure lands in [`ScrapeError`], which keeps the structured kind
//! and leaves rendering to the caller.

use crate::models::ArticleRecord;
use crate::scrapers::fetch::{FetchError, PageFetcher};
use crate::scrapers::medium::{self, Platform};
use crate::scrapers::parse::{self, ParseError};
use crate::utils::truncate_for_log;
use crate::validate::is_valid_url;
use futures::stream::{self, StreamExt};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Pipeline states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Validated,
    Fetched,
    Parsed,
    Extracted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Validated => "validated",
            Stage::Fetched => "fetched",
            Stage::Parsed => "parsed",
            Stage::Extracted => "extracted",
        };
        f.write_str(name)
    }
}

/// Why an extraction failed. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("invalid URL provided: {url:?}")]
    InvalidInput { url: String },
    #[error("URL must be from {expected} (got {host})")]
    WrongDomain { host: String, expected: String },
    #[error("request timed out after {}s", .0.as_secs_f64())]
    FetchTimeout(Duration),
    #[error("failed to get the data with error response code: {0}")]
    FetchHttpStatus(u16),
    #[error("request failed: {0}")]
    FetchTransport(String),
    #[error("scraping failed: {0}")]
    Parse(#[from] ParseError),
}

impl ScrapeError {
    /// The last state the pipeline reached before failing.
    pub fn stage(&self) -> Stage {
        match self {
            ScrapeError::InvalidInput { .. } | ScrapeError::WrongDomain { .. } => Stage::Start,
            ScrapeError::FetchTimeout(_)
            | ScrapeError::FetchHttpStatus(_)
            | ScrapeError::FetchTransport(_) => Stage::Validated,
            ScrapeError::Parse(_) => Stage::Fetched,
        }
    }
}

impl From<FetchError> for ScrapeError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::WrongDomain { host, expected } => ScrapeError::WrongDomain { host, expected },
            FetchError::Timeout(after) => ScrapeError::FetchTimeout(after),
            FetchError::HttpStatus(code) => ScrapeError::FetchHttpStatus(code),
            FetchError::Transport(cause) => ScrapeError::FetchTransport(cause),
        }
    }
}

/// Runs extractions for one platform through a [`PageFetcher`].
#[derive(Debug)]
pub struct Scraper<F> {
    fetcher: F,
    platform: Platform,
    concurrency: usize,
}

impl<F: PageFetcher> Scraper<F> {
    /// Create a scraper; `concurrency` bounds [`Scraper::scrape_many`] and is
    /// clamped to at least 1.
    pub fn new(fetcher: F, platform: Platform, concurrency: usize) -> Self {
        Self {
            fetcher,
            platform,
            concurrency: concurrency.max(1),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run one extraction.
    ///
    /// On success the record's `url` is exactly `candidate`; on failure no
    /// record is produced.
    #[instrument(level = "info", skip_all, fields(url = %truncate_for_log(candidate, 200)))]
    pub async fn scrape(&self, candidate: &str) -> Result<ArticleRecord, ScrapeError> {
        let t0 = Instant::now();
        let result = self.run(candidate).await;
        let elapsed_ms = t0.elapsed().as_millis() as u64;
        match &result {
            Ok(record) => info!(
                elapsed_ms,
                empty = record.is_empty(),
                stage = %Stage::Extracted,
                "Extraction succeeded"
            ),
            Err(e) => warn!(elapsed_ms, stage = %e.stage(), error = %e, "Extraction failed"),
        }
        result
    }

    async fn run(&self, candidate: &str) -> Result<ArticleRecord, ScrapeError> {
        let invalid = || ScrapeError::InvalidInput {
            url: candidate.to_string(),
        };
        if !is_valid_url(candidate) {
            return Err(invalid());
        }
        let url = Url::parse(candidate).map_err(|_| invalid())?;
        self.platform.ensure_domain(&url)?;
        debug!(stage = %Stage::Validated, "URL accepted");

        let page = self.fetcher.fetch(&url).await?;
        debug!(stage = %Stage::Fetched, bytes = page.body.len(), "Page fetched");

        // The document is not Send; keep it out of any await.
        let document = parse::parse(&page.body)?;
        debug!(stage = %Stage::Parsed, "Page parsed");
        Ok(medium::extract(&document, candidate))
    }

    /// Run several independent extractions, at most `concurrency` at a time.
    ///
    /// Outcomes come back in input order, paired with their input.
    #[instrument(level = "info", skip_all, fields(count = candidates.len()))]
    pub async fn scrape_many(
        &self,
        candidates: &[String],
    ) -> Vec<(String, Result<ArticleRecord, ScrapeError>)> {
        let outcomes: Vec<_> = stream::iter(candidates)
            .map(|candidate| async move { (candidate.clone(), self.scrape(candidate).await) })
            .buffered(self.concurrency)
            .collect()
            .await;

        let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
        info!(
            total = outcomes.len(),
            successful = outcomes.len() - failed,
            failed,
            "Completed extractions"
        );
        outcomes
    }
}
