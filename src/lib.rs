//! # Freedium
//!
//! Fetch a Medium article page and extract its title, author, publication
//! date, body, tags and reading time into a normalized [`ArticleRecord`].
//!
//! ## Architecture
//!
//! Extraction is a one-way pipeline:
//! 1. **Validation**: [`validate::is_valid_url`] plus the platform domain check
//! 2. **Fetching**: one GET with browser-like headers and a fixed timeout
//! 3. **Parsing**: tolerant HTML parse; only binary payloads fail
//! 4. **Extraction**: ordered selector fallback chains per field
//!
//! [`scrapers::Scraper`] wraps all four stages in a single error channel,
//! [`scrapers::ScrapeError`].
//!
//! ## Example
//!
//! ```no_run
//! use freedium::scrapers::{HttpFetcher, Platform, Scraper, DEFAULT_TIMEOUT};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpFetcher::new(Platform::medium(), None, DEFAULT_TIMEOUT)?;
//! let scraper = Scraper::new(fetcher, Platform::medium(), 4);
//! let record = scraper.scrape("https://medium.com/@someone/some-post-0123abcd").await?;
//! println!("{:?}", record.title);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
pub mod validate;

pub use models::ArticleRecord;
pub use validate::is_valid_url;

