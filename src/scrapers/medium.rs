//! Medium article scraper.
//!
//! This module knows two things about [Medium](https://medium.com): how to
//! shape a request so that the server answers with the full server-rendered
//! article, and where in that markup each field of an [`ArticleRecord`]
//! lives.
//!
//! # Selector Fallback Chains
//!
//! Medium's markup drifts. Each field is therefore described by a
//! [`SelectorChain`]: an ordered list of strategies, most specific first and
//! generic last. The first strategy that yields a non-empty value wins; if
//! none do, the field stays absent. Tiers are numbered from 0 and the
//! winning tier is logged at debug level, so a broken selector shows up as a
//! field silently falling through to a later tier.
//!
//! | Field | Tiers |
//! |-------|-------|
//! | title | `h1[data-testid="storyTitle"]`, `h1`, `.graf--title`, `article h1` |
//! | author | `[data-testid="authorName"]`, `.author-name`, `[rel="author"]`, `.js-userLink` |
//! | publication date | `meta[property="article:published_time"]@content`, `[data-testid="storyPublishDate"]`, `time[datetime]@datetime` |
//! | reading time | `[data-testid="storyReadTime"]`, `.readingTime`, `span[title*="read"]` |
//! | tags | `[data-testid="storyTags"] a`, `.tags a`, `.js-tagButton` |
//! | body | `article`, `.postArticle-content`, `main` |

use crate::models::ArticleRecord;
use crate::scrapers::fetch::{ClientError, FetchError};
use crate::utils::normalize_whitespace;
use once_cell::sync::Lazy;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, DNT, HeaderMap, HeaderName, HeaderValue, PRAGMA, REFERER, USER_AGENT,
};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};
use url::Url;

/// Domain marker for Medium-hosted articles.
pub const MEDIUM_DOMAIN: &str = "medium.com";

const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,id-ID;q=0.8,id;q=0.7";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36";
const BROWSER_SEC_CH_UA: &str = r#""Chromium";v="140", "Not=A?Brand";v="24", "Google Chrome";v="140""#;

/// Static headers sent with every request, in addition to accept,
/// accept-language, user-agent and referer.
const BROWSER_HINTS: &[(&str, &str)] = &[
    ("priority", "u=0, i"),
    ("sec-ch-ua", BROWSER_SEC_CH_UA),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Linux\""),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "same-origin"),
];

/// The publishing platform a scraper is allowed to fetch from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    domain: String,
}

impl Platform {
    /// Medium, matching `medium.com` and its subdomains.
    pub fn medium() -> Self {
        Self::with_domain(MEDIUM_DOMAIN)
    }

    /// A platform identified by an arbitrary domain marker.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into().trim().trim_end_matches('.').to_ascii_lowercase(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// True when the URL's host is the platform domain or a subdomain of it.
    pub fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        host == self.domain
            || host
                .strip_suffix(self.domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    /// Fail with [`FetchError::WrongDomain`] unless [`Platform::matches`] holds.
    pub fn ensure_domain(&self, url: &Url) -> Result<(), FetchError> {
        if self.matches(url) {
            Ok(())
        } else {
            Err(FetchError::WrongDomain {
                host: url.host_str().unwrap_or_default().to_string(),
                expected: self.domain.clone(),
            })
        }
    }

    /// The desktop-browser header set used for every fetch.
    ///
    /// The exact values are tunable; they only have to look like a real
    /// browser closely enough to avoid trivial bot blocking.
    pub fn request_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(DNT, HeaderValue::from_static("1"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let referer = format!("https://{}/", self.domain);
        headers.insert(
            REFERER,
            HeaderValue::from_str(&referer).map_err(|_| ClientError::InvalidHeader("referer"))?,
        );

        for &(name, value) in BROWSER_HINTS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        Ok(headers)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::medium()
    }
}

/// One way of pulling a value out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Normalized text of the first matching element whose text is non-empty.
    Text(&'static str),
    /// Trimmed value of `attr` on the first matching element that has it non-empty.
    Attr(&'static str, &'static str),
}

impl Strategy {
    pub fn selector(&self) -> &'static str {
        match self {
            Strategy::Text(css) | Strategy::Attr(css, _) => *css,
        }
    }

    fn apply(&self, selector: &Selector, document: &Html) -> Option<String> {
        match self {
            Strategy::Text(_) => document
                .select(selector)
                .map(visible_text)
                .find(|text| !text.is_empty()),
            Strategy::Attr(_, attr) => document
                .select(selector)
                .filter_map(|el| el.value().attr(attr))
                .map(str::trim)
                .find(|value| !value.is_empty())
                .map(str::to_string),
        }
    }
}

/// An ordered list of strategies for one field.
#[derive(Debug)]
pub struct SelectorChain {
    field: &'static str,
    tiers: Vec<(Strategy, Selector)>,
}

impl SelectorChain {
    /// Build a chain, compiling each CSS selector once.
    ///
    /// A strategy whose selector does not compile is logged and left out.
    pub fn new(field: &'static str, strategies: &[Strategy]) -> Self {
        let tiers = strategies
            .iter()
            .filter_map(|strategy| match Selector::parse(strategy.selector()) {
                Ok(selector) => Some((*strategy, selector)),
                Err(e) => {
                    warn!(field, selector = strategy.selector(), error = %e, "Skipping unparsable selector");
                    None
                }
            })
            .collect();
        Self { field, tiers }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Number of usable tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The first non-empty value, with the index of the tier that produced it.
    pub fn first_value(&self, document: &Html) -> Option<(usize, String)> {
        let found = self
            .tiers
            .iter()
            .enumerate()
            .find_map(|(tier, (strategy, selector))| strategy.apply(selector, document).map(|v| (tier, v)));
        self.trace(found.as_ref().map(|(tier, _)| *tier));
        found
    }

    /// Every non-empty text value matched by the first tier that matches any,
    /// in document order.
    pub fn first_list(&self, document: &Html) -> Option<(usize, Vec<String>)> {
        let found = self.tiers.iter().enumerate().find_map(|(tier, (_, selector))| {
            let values: Vec<String> = document
                .select(selector)
                .map(visible_text)
                .filter(|text| !text.is_empty())
                .collect();
            (!values.is_empty()).then_some((tier, values))
        });
        self.trace(found.as_ref().map(|(tier, _)| *tier));
        found
    }

    /// The first matching element with non-empty visible text.
    pub fn first_element<'a>(&self, document: &'a Html) -> Option<(usize, ElementRef<'a>)> {
        let found = self.tiers.iter().enumerate().find_map(|(tier, (_, selector))| {
            document
                .select(selector)
                .find(|el| !visible_text(*el).is_empty())
                .map(|el| (tier, el))
        });
        self.trace(found.as_ref().map(|(tier, _)| *tier));
        found
    }

    fn trace(&self, tier: Option<usize>) {
        match tier {
            Some(tier) => debug!(field = self.field, tier, selector = self.tiers[tier].0.selector(), "Field matched"),
            None => debug!(field = self.field, "Field absent"),
        }
    }
}

use Strategy::{Attr, Text};

pub static TITLE: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "title",
        &[
            Text(r#"h1[data-testid="storyTitle"]"#),
            Text("h1"),
            Text(".graf--title"),
            // Unreachable after `h1`; kept in the documented tier order.
            Text("article h1"),
        ],
    )
});

pub static AUTHOR: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "author",
        &[
            Text(r#"[data-testid="authorName"]"#),
            Text(".author-name"),
            Text(r#"[rel="author"]"#),
            Text(".js-userLink"),
        ],
    )
});

pub static PUBLICATION_DATE: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "publication_date",
        &[
            Attr(r#"meta[property="article:published_time"]"#, "content"),
            Text(r#"[data-testid="storyPublishDate"]"#),
            Attr("time[datetime]", "datetime"),
        ],
    )
});

pub static READING_TIME: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "reading_time",
        &[
            Text(r#"[data-testid="storyReadTime"]"#),
            Text(".readingTime"),
            Text(r#"span[title*="read"]"#),
        ],
    )
});

pub static TAGS: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "tags",
        &[
            Text(r#"[data-testid="storyTags"] a"#),
            Text(".tags a"),
            Text(".js-tagButton"),
        ],
    )
});

pub static BODY: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(
        "body",
        &[Text("article"), Text(".postArticle-content"), Text("main")],
    )
});

/// Elements whose text never counts as visible content.
const NON_CONTENT: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of text; inline markup adds no spacing.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Whitespace-normalized text of `element`, skipping script-like descendants.
///
/// Text nodes are concatenated as written, so `un<b>believ</b>able` reads
/// `unbelievable`; block boundaries separate with a single space.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_visible_text(element, &mut text);
    normalize_whitespace(&text)
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if NON_CONTENT.contains(&name) {
                continue;
            }
            let block = BLOCK.contains(&name);
            if block {
                out.push(' ');
            }
            push_visible_text(child, out);
            if block {
                out.push(' ');
            }
        }
    }
}

/// Extract an [`ArticleRecord`] from a parsed Medium page.
///
/// Never fails: fields that cannot be found are left absent. Calling this
/// twice on the same document yields identical records.
#[instrument(level = "info", skip_all, fields(%url))]
pub fn extract(document: &Html, url: &str) -> ArticleRecord {
    let mut record = ArticleRecord::new(url);

    record.title = TITLE.first_value(document).map(|(_, v)| v);
    record.author = AUTHOR.first_value(document).map(|(_, v)| v);
    record.publication_date = PUBLICATION_DATE.first_value(document).map(|(_, v)| v);
    record.reading_time = READING_TIME.first_value(document).map(|(_, v)| v);
    record.tags = TAGS.first_list(document).map(|(_, v)| v).unwrap_or_default();

    if let Some((_, container)) = BODY.first_element(document) {
        record.content_html = Some(container.html());
        record.content = Some(visible_text(container));
    }

    debug!(
        has_title = record.title.is_some(),
        has_author = record.author.is_some(),
        has_body = record.content.is_some(),
        tags = record.tags.len(),
        "Extracted article fields"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
  <title>Ignored | Medium</title>
  <meta property="article:published_time" content="2024-03-05T10:00:00.000Z">
</head><body>
  <article>
    <h1 data-testid="storyTitle">  Understanding   Ownership </h1>
    <a data-testid="authorName" href="/@jane">Jane Doe</a>
    <span data-testid="storyReadTime">7 min read</span>
    <section><p>First paragraph.</p><p>Second <em>paragraph</em>.</p></section>
    <script>window.__APOLLO_STATE__ = {};</script>
  </article>
  <div data-testid="storyTags">
    <a href="/tag/rust">Rust</a><a href="/tag/memory">Memory</a><a href="/tag/rust">Rust</a>
  </div>
</body></html>"#;

    #[test]
    fn test_extract_full_page() {
        let record = extract(&doc(FULL_PAGE), "https://medium.com/@jane/ownership-123");

        assert_eq!(record.url, "https://medium.com/@jane/ownership-123");
        assert_eq!(record.title.as_deref(), Some("Understanding Ownership"));
        assert_eq!(record.author.as_deref(), Some("Jane Doe"));
        assert_eq!(record.reading_time.as_deref(), Some("7 min read"));
        assert_eq!(record.publication_date.as_deref(), Some("2024-03-05T10:00:00.000Z"));
        assert_eq!(record.tags, vec!["Rust", "Memory", "Rust"]);

        let content = record.content.unwrap();
        assert!(content.starts_with("Understanding Ownership Jane Doe 7 min read"));
        assert!(content.contains("First paragraph. Second paragraph."));
        assert!(!content.contains("__APOLLO_STATE__"));

        let html = record.content_html.unwrap();
        assert!(html.starts_with("<article>"));
        assert!(html.contains("__APOLLO_STATE__"));
    }

    #[test]
    fn test_missing_title_keeps_other_fields() {
        // Unclosed tags and a stray </div>, but no heading of any kind.
        let html = r#"<html><body>
            <div class="author-name">Sam Writer
            <article><p>Body text without a headline
            <span title="4 min read">4 min read</span>
            </div>
            <div class="tags"><a>Design</a><a>UX</a><a>Research</a></div>
            <time datetime="2023-11-01">Nov 1</time>
        "#;
        let record = extract(&doc(html), "https://medium.com/p/xyz");

        assert_eq!(record.title, None);
        assert_eq!(record.author.as_deref().map(|a| a.starts_with("Sam Writer")), Some(true));
        assert!(record.content.as_deref().unwrap().contains("Body text without a headline"));
        assert!(record.content_html.is_some());
        assert_eq!(record.reading_time.as_deref(), Some("4 min read"));
        assert_eq!(record.tags, vec!["Design", "UX", "Research"]);
        assert_eq!(record.publication_date.as_deref(), Some("2023-11-01"));
    }

    #[test]
    fn test_three_tags_in_source_order() {
        let html = r#"<html><body>
            <h1>Ordered Tags</h1>
            <a rel="author">Ann</a>
            <ul data-testid="storyTags">
              <li><a>Zeta</a></li><li><a>Alpha</a></li><li><a>Mu</a></li>
            </ul>
        </body></html>"#;
        let record = extract(&doc(html), "https://medium.com/p/tags");

        assert_eq!(record.title.as_deref(), Some("Ordered Tags"));
        assert_eq!(record.author.as_deref(), Some("Ann"));
        assert_eq!(record.tags.len(), 3);
        assert_eq!(record.tags, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_empty_document_yields_empty_record() {
        let record = extract(&doc(""), "https://medium.com/p/empty");
        assert_eq!(record, ArticleRecord::new("https://medium.com/p/empty"));
        assert!(record.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract(&doc(FULL_PAGE), "https://medium.com/p/same");
        let second = extract(&doc(FULL_PAGE), "https://medium.com/p/same");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_all_chain_selectors_compile() {
        assert_eq!(TITLE.len(), 4);
        assert_eq!(AUTHOR.len(), 4);
        assert_eq!(PUBLICATION_DATE.len(), 3);
        assert_eq!(READING_TIME.len(), 3);
        assert_eq!(TAGS.len(), 3);
        assert_eq!(BODY.len(), 3);
    }

    #[test]
    fn test_unparsable_selector_is_skipped() {
        let chain = SelectorChain::new("broken", &[Text("h1[[["), Text("h2")]);
        assert_eq!(chain.field(), "broken");
        assert_eq!(chain.len(), 1);
        let found = chain.first_value(&doc("<h2>Fallback</h2>"));
        assert_eq!(found, Some((0, "Fallback".to_string())));
    }

    #[test]
    fn test_title_tiers() {
        let tier = |html: &str| TITLE.first_value(&doc(html));
        assert_eq!(
            tier(r#"<h1>Generic</h1><h1 data-testid="storyTitle">Specific</h1>"#),
            Some((0, "Specific".to_string()))
        );
        assert_eq!(tier("<h1>Generic</h1>"), Some((1, "Generic".to_string())));
        assert_eq!(
            tier(r#"<h3 class="graf--title">Legacy</h3>"#),
            Some((2, "Legacy".to_string()))
        );
        // An empty heading does not count as a match.
        assert_eq!(
            tier(r#"<h1>  </h1><h3 class="graf--title">Legacy</h3>"#),
            Some((2, "Legacy".to_string()))
        );
        // A heading inside an article is already taken by the generic tier.
        assert_eq!(
            tier("<article><h1>Inside</h1></article>"),
            Some((1, "Inside".to_string()))
        );
        assert_eq!(tier("<p>No title</p>"), None);
    }

    #[test]
    fn test_author_tiers() {
        let tier = |html: &str| AUTHOR.first_value(&doc(html)).map(|(t, _)| t);
        assert_eq!(tier(r#"<a class="author-name">B</a><span data-testid="authorName">A</span>"#), Some(0));
        assert_eq!(tier(r#"<div class="author-name">B</div>"#), Some(1));
        assert_eq!(tier(r#"<a rel="author" href="/@c">C</a>"#), Some(2));
        assert_eq!(tier(r#"<a class="ds-link js-userLink">D</a>"#), Some(3));
        assert_eq!(tier("<a>Nobody</a>"), None);
    }

    #[test]
    fn test_publication_date_tiers() {
        let tier = |html: &str| PUBLICATION_DATE.first_value(&doc(html));
        assert_eq!(
            tier(r#"<meta property="article:published_time" content=" 2024-01-02T00:00:00Z "><time datetime="x">x</time>"#),
            Some((0, "2024-01-02T00:00:00Z".to_string()))
        );
        assert_eq!(
            tier(r#"<span data-testid="storyPublishDate">Jan 2, 2024</span>"#),
            Some((1, "Jan 2, 2024".to_string()))
        );
        assert_eq!(
            tier(r#"<time datetime="2024-01-02">Jan 2</time>"#),
            Some((2, "2024-01-02".to_string()))
        );
        assert_eq!(tier(r#"<meta property="article:published_time" content="">"#), None);
    }

    #[test]
    fn test_reading_time_tiers() {
        let tier = |html: &str| READING_TIME.first_value(&doc(html)).map(|(t, _)| t);
        assert_eq!(tier(r#"<span data-testid="storyReadTime">3 min read</span>"#), Some(0));
        assert_eq!(tier(r#"<span class="readingTime" title="3 min read">3 min</span>"#), Some(1));
        assert_eq!(tier(r#"<span title="3 min read">3 min read</span>"#), Some(2));
        assert_eq!(tier(r#"<span title="published">May 1</span>"#), None);
    }

    #[test]
    fn test_tag_tiers() {
        let tier = |html: &str| TAGS.first_list(&doc(html));
        assert_eq!(
            tier(r#"<div class="tags"><a>B</a></div><div data-testid="storyTags"><a>A</a></div>"#),
            Some((0, vec!["A".to_string()]))
        );
        assert_eq!(
            tier(r#"<ul class="tags"><li><a> B </a></li><li><a></a></li></ul>"#),
            Some((1, vec!["B".to_string()]))
        );
        assert_eq!(
            tier(r#"<button class="js-tagButton">C</button><button class="js-tagButton">D</button>"#),
            Some((2, vec!["C".to_string(), "D".to_string()]))
        );
        assert_eq!(tier(r#"<div data-testid="storyTags"><a> </a></div>"#), None);
    }

    #[test]
    fn test_body_tiers() {
        let tier = |html: &str| BODY.first_element(&doc(html)).map(|(t, el)| (t, visible_text(el)));
        assert_eq!(
            tier("<main><article>Inner</article></main>"),
            Some((0, "Inner".to_string()))
        );
        assert_eq!(
            tier(r#"<div class="postArticle-content">Legacy body</div><main>Main</main>"#),
            Some((1, "Legacy body".to_string()))
        );
        assert_eq!(tier("<main> Main body </main>"), Some((2, "Main body".to_string())));
        // A container with only script text is skipped.
        assert_eq!(
            tier("<article><script>var x;</script></article><main>Real</main>"),
            Some((2, "Real".to_string()))
        );
        assert_eq!(tier("<div>No container</div>"), None);
    }

    #[test]
    fn test_inline_markup_adds_no_spaces() {
        let record = extract(
            &doc(concat!(
                r#"<h1 data-testid="storyTitle">Hello <em>World</em>!</h1>"#,
                "<article><p>un<b>believ</b>able, <a>Rust</a>'s</p></article>",
            )),
            "https://medium.com/p/1",
        );
        assert_eq!(record.title.as_deref(), Some("Hello World!"));
        assert_eq!(record.content.as_deref(), Some("unbelievable, Rust's"));
    }

    #[test]
    fn test_block_boundaries_separate_text() {
        let text = |html: &str| BODY.first_element(&doc(html)).map(|(_, el)| visible_text(el));
        assert_eq!(text("<article><p>a</p><p>b</p></article>").as_deref(), Some("a b"));
        assert_eq!(text("<article>line<br>break</article>").as_deref(), Some("line break"));
        assert_eq!(
            text("<article><ul><li>one</li><li>two</li></ul><style>p{}</style></article>").as_deref(),
            Some("one two")
        );
    }

    #[test]
    fn test_platform_domain_matching() {
        let medium = Platform::medium();
        let url = |s: &str| Url::parse(s).unwrap();

        assert!(medium.matches(&url("https://medium.com/@a/post")));
        assert!(medium.matches(&url("https://blog.medium.com/post")));
        assert!(medium.matches(&url("https://Medium.COM/post")));
        assert!(!medium.matches(&url("https://notmedium.com/post")));
        assert!(!medium.matches(&url("https://medium.com.evil.io/post")));
        assert!(!medium.matches(&url("https://example.com/?next=medium.com")));
    }

    #[test]
    fn test_platform_ensure_domain_error() {
        let err = Platform::medium()
            .ensure_domain(&Url::parse("https://www.example.com/a").unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), "URL must be from medium.com (got www.example.com)");
    }

    #[test]
    fn test_request_headers() {
        let headers = Platform::medium().request_headers().unwrap();
        assert_eq!(headers.get(REFERER).unwrap(), "https://medium.com/");
        assert!(headers.get(USER_AGENT).unwrap().to_str().unwrap().contains("Chrome/140"));
        assert_eq!(headers.get("sec-fetch-dest").unwrap(), "document");
        assert_eq!(headers.get("sec-ch-ua-mobile").unwrap(), "?0");
        assert!(headers.get("cookie").is_none());
    }
}
