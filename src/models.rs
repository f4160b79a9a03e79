//! Data models for extracted articles.
//!
//! [`ArticleRecord`] is the only thing the extraction pipeline hands back to
//! its caller. Every field except `url` is independently optional so that a
//! page missing one piece of markup still yields the rest.

use serde::{Deserialize, Serialize};

/// A normalized article extracted from one fetched page.
///
/// The record is always fully constructed, even when every optional field is
/// absent. `url` is the exact string the caller asked for, not the final URL
/// after redirects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The URL the extraction was requested for.
    pub url: String,
    /// The article headline.
    pub title: Option<String>,
    /// The display name of the author.
    pub author: Option<String>,
    /// Publication timestamp as published by the page (ISO 8601 when the page
    /// provides machine-readable metadata, display text otherwise).
    pub publication_date: Option<String>,
    /// Whitespace-normalized plain text of the body container.
    pub content: Option<String>,
    /// Raw markup of the body container.
    pub content_html: Option<String>,
    /// Topic tags in document order. Duplicates are kept.
    pub tags: Vec<String>,
    /// Reading-time label, e.g. `"5 min read"`.
    pub reading_time: Option<String>,
}

impl ArticleRecord {
    /// An empty record for `url`, with every other field absent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// True when nothing beyond the URL could be extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publication_date.is_none()
            && self.content.is_none()
            && self.content_html.is_none()
            && self.tags.is_empty()
            && self.reading_time.is_none()
    }
}
