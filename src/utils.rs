//! Utility functions for text normalization, logging and file system checks.
//!
//! This module provides helpers shared by the scrapers and the outputs:
//! - Whitespace normalization for extracted text
//! - String truncation and slugification for logging and file names
//! - Error-chain rendering for transport failures
//! - File system validation for output directories

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse runs of whitespace into single spaces and trim both ends.
///
/// # Examples
///
/// ```
/// use freedium::utils::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and a count of the dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Convert a title to a file-name-friendly slug.
///
/// Lowercases the text, drops anything that is not alphanumeric, and joins
/// the remaining words with single hyphens.
pub fn slugify_title(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Render an error together with its `source()` chain, outermost first.
///
/// reqwest's top-level messages ("error sending request") say little on their
/// own; the chain carries the DNS or connection cause.
pub fn describe_error(e: &(dyn Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it does not exist, then writes and removes a
/// scratch file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn ensure_writable_dir(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).await?;
    let scratch = path.join(".freedium-write-check");
    stdfs::File::create(&scratch)?;
    let _ = stdfs::remove_file(&scratch);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("Hello,\n\n   world!"), "Hello, world!");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // 'é' is two bytes; cutting at 3 would split the second one
        let result = truncate_for_log("éééé", 3);
        assert!(result.starts_with('é'));
        assert!(result.contains("(+6 bytes)"));
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify_title("Hello World"), "hello-world");
        assert_eq!(slugify_title("Test-Article!"), "test-article");
        assert_eq!(slugify_title("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify_title("Special@#$Characters"), "special-characters");
        assert_eq!(slugify_title("Rust's `async` story"), "rust-s-async-story");
        assert_eq!(slugify_title("!!!"), "");
    }

    #[derive(Debug)]
    struct Outer(Inner);
    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }
    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "dns error")
        }
    }
    impl Error for Inner {}
    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_error_includes_chain() {
        assert_eq!(describe_error(&Outer(Inner)), "error sending request: dns error");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir() {
        let dir = std::env::temp_dir().join(format!("freedium-writable-{}", std::process::id()));
        ensure_writable_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
        let _ = stdfs::remove_dir_all(&dir);
    }
}
