//! Syntactic URL validation.
//!
//! [`is_valid_url`] is the pre-flight check used before any scraping happens,
//! and is also exposed on its own through the `validate` command. It never
//! touches the network.

use std::net::Ipv4Addr;
use url::{Host, Url};

/// Check whether `text` is a well-formed absolute `http`/`https` URL.
///
/// Accepts either a `&str` or an `Option<&str>` so that callers holding an
/// optional value do not have to unwrap it first. Returns `false` for absent,
/// empty or whitespace-containing input, for other schemes, and for URLs
/// without a usable host (a dotted domain name or an IP address).
///
/// # Examples
///
/// ```
/// use freedium::validate::is_valid_url;
///
/// assert!(is_valid_url("https://www.example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url(None));
/// ```
pub fn is_valid_url<'a>(text: impl Into<Option<&'a str>>) -> bool {
    let Some(text) = text.into() else {
        return false;
    };
    if text.is_empty() || text.chars().any(char::is_whitespace) || text.contains('\\') {
        return false;
    }
    // The WHATWG parser repairs `http:host` and `https:/host`; require the
    // authority to be spelled out.
    let Some(rest) = strip_scheme(text) else {
        return false;
    };

    let Ok(parsed) = Url::parse(text) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => is_dotted_domain(domain),
        // `http://12345` and `http://1.2.3` parse as IPv4; only a dotted quad counts.
        Some(Host::Ipv4(_)) => literal_host(rest).parse::<Ipv4Addr>().is_ok(),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// The text after `http://` or `https://`, matched case-insensitively.
fn strip_scheme(text: &str) -> Option<&str> {
    ["http://", "https://"].iter().find_map(|scheme| {
        text.get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .map(|_| &text[scheme.len()..])
    })
}

/// The host as written: authority without userinfo or port.
fn literal_host(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    host.split(':').next().unwrap_or_default()
}

/// A domain needs at least two non-empty labels and a non-numeric TLD.
fn is_dotted_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
}
