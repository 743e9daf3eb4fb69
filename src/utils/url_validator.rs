//! Loose URL shape check applied to every URL before it is stored.
//!
//! This is a best-effort filter, not an RFC 3986 parser. It accepts an
//! optional `http(s)://` scheme, a host with at least one dot, and optional
//! path, query, and fragment parts.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Compiled URL shape pattern, case-insensitive and ASCII-only.
pub static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("URL pattern is a valid regex")
});

/// Returns true if `url` looks like a URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Returns `url` with `http://` prepended when it carries no scheme.
///
/// Stored URLs may omit the scheme; a bare `Location: example.com` would be
/// resolved by clients relative to the short link itself.
pub fn with_default_scheme(url: &str) -> Cow<'_, str> {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{url}"))
    }
}
