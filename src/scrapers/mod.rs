//! Article scraping: fetching, parsing and field extraction.
//!
//! One extraction flows through four submodules in order:
//!
//! | Stage | Module | Notes |
//! |-------|--------|-------|
//! | Validate | [`crate::validate`] | Syntax only, plus the platform domain check |
//! | Fetch | [`fetch`] | One GET with browser-like headers and a timeout |
//! | Parse | [`parse`] | Tolerant html5ever parse; fails only on binary payloads |
//! | Extract | [`medium`] | Selector fallback chains per field |
//!
//! [`pipeline::Scraper`] sequences the stages and maps every failure into
//! [`pipeline::ScrapeError`].

pub mod fetch;
pub mod medium;
pub mod parse;
pub mod pipeline;

pub use fetch::{DEFAULT_TIMEOUT, FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use medium::Platform;
pub use parse::ParseError;
pub use pipeline::{ScrapeError, Scraper, Stage};
