//! Output generation for extraction results.
//!
//! The pipeline returns `Result<ArticleRecord, ScrapeError>`; this module is
//! where that becomes something to show. A failed extraction is rendered as
//! its error message next to an empty record, never as a partial one.
//!
//! # Submodules
//!
//! - [`json`]: pretty JSON, one object per URL
//! - [`markdown`]: a readable Markdown article
//!
//! # Output Structure
//!
//! When an output directory is given, files are grouped by extraction date:
//!
//! ```text
//! output_dir/
//! └── 2025-05-06/
//!     ├── understanding-ownership.json
//!     └── understanding-ownership.md
//! ```

pub mod json;
pub mod markdown;

use crate::models::ArticleRecord;
use crate::scrapers::ScrapeError;
use crate::utils::slugify_title;
use chrono::Local;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

/// Highest numeric suffix tried before giving up on a file name.
const MAX_NAME_SUFFIX: u32 = 10_000;

/// One URL's outcome, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub record: ArticleRecord,
    /// The failure message; `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Collapse a pipeline outcome. Errors become their message and an empty
    /// record for `url`.
    pub fn from_outcome(url: &str, outcome: Result<ArticleRecord, ScrapeError>) -> Self {
        match outcome {
            Ok(record) => Self { record, error: None },
            Err(e) => Self {
                record: ArticleRecord::new(url),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// File stem for a record: the slugified title, else the last URL path
/// segment, else `"article"`.
pub fn file_stem(record: &ArticleRecord) -> String {
    let from_title = record.title.as_deref().map(slugify_title);
    let from_url = || {
        url::Url::parse(&record.url).ok().and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()).map(slugify_title))
        })
    };
    from_title
        .filter(|s| !s.is_empty())
        .or_else(|| from_url().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "article".to_string())
}

/// Write `contents` to `{output_dir}/{YYYY-MM-DD}/{stem}.{extension}`.
///
/// Existing files are never overwritten: a taken name gets a numeric suffix
/// (`{stem}-2.{extension}`, `{stem}-3.{extension}`, ...).
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.as_ref().display(), %extension))]
pub async fn write_report(
    output_dir: impl AsRef<Path>,
    report: &Report,
    extension: &str,
    contents: &str,
) -> std::io::Result<PathBuf> {
    let dir = output_dir
        .as_ref()
        .join(Local::now().date_naive().to_string());
    fs::create_dir_all(&dir).await?;

    let stem = file_stem(&report.record);
    for n in 1..=MAX_NAME_SUFFIX {
        let name = match n {
            1 => format!("{stem}.{extension}"),
            n => format!("{stem}-{n}.{extension}"),
        };
        let path = dir.join(name);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Report name taken");
                continue;
            }
            Err(e) => return Err(e),
        };
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        info!(path = %path.display(), "Wrote report");
        return Ok(path);
    }
    Err(std::io::Error::new(ErrorKind::AlreadyExists, "no free report file name"))
}
