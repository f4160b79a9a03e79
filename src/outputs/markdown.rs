//! Markdown rendering of extraction reports.
//!
//! Produces a self-contained article: headline, byline, metadata, tags, the
//! plain-text body and a link back to the source. Absent fields are simply
//! left out.

use crate::outputs::Report;
use itertools::Itertools;

/// Render one report as Markdown.
pub fn report_to_markdown(report: &Report) -> String {
    let record = &report.record;
    let mut md = String::new();

    let title = record.title.as_deref().unwrap_or("Untitled article");
    md.push_str(&format!("# {}\n\n", title));

    if let Some(error) = &report.error {
        md.push_str(&format!("> **Extraction failed:** {}\n\n", error));
    }

    let meta = [
        record.author.as_deref().map(|a| format!("By **{}**", a)),
        record.publication_date.clone(),
        record.reading_time.clone(),
    ]
    .into_iter()
    .flatten()
    .join(" · ");
    if !meta.is_empty() {
        md.push_str(&format!("{}\n\n", meta));
    }

    if !record.tags.is_empty() {
        let tags = record.tags.iter().map(|t| format!("`{}`", t)).join(" ");
        md.push_str(&format!("**Tags:** {}\n\n", tags));
    }

    if let Some(content) = &record.content {
        md.push_str(content);
        md.push_str("\n\n");
    }

    md.push_str(&format!("---\n\nSource: <{}>\n", record.url));
    md
}

/// Render several reports separated by horizontal rules.
pub fn reports_to_markdown(reports: &[Report]) -> String {
    reports.iter().map(report_to_markdown).join("\n***\n\n")
}
