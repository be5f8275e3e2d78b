//! Asset URL construction.
//!
//! Each produced format gets a URL of the form `<fontName>.<type>?<fingerprint>`,
//! joined onto [`RenderOptions::css_fonts_url`] when one is configured. Joining
//! follows the usual url-join rules: exactly one `/` between segments,
//! protocol slashes preserved, and no slash left dangling before the query.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::CssError;
use crate::hash::compute_hash;
use crate::options::{FontType, RenderOptions};

/// Resolved URL per font format.
pub type UrlMap = BTreeMap<FontType, String>;

/// A first segment that is nothing but a scheme, e.g. `https:` or `http://`.
static BARE_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/:]+:/*$").expect("valid regex"));
static FILE_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^file:///").expect("valid regex"));
static PROTOCOL_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/:]+):/*").expect("valid regex"));
static LEADING_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/+").expect("valid regex"));
static TRAILING_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/+$").expect("valid regex"));
/// A slash directly before a query, parameter or (non-hashbang) fragment.
static SLASH_BEFORE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\?|&|#[^!])").expect("valid regex"));

/// Compute the fingerprinted URL of every format in [`RenderOptions::types`].
///
/// # Errors
///
/// Propagates [`CssError::FileRead`] from fingerprinting.
///
/// # Examples
///
/// ```rust,no_run
/// use iconfont_css::{FontType, RenderOptions, build_urls};
///
/// let options = RenderOptions::new("icon")
///     .with_types([FontType::Woff])
///     .with_css_fonts_url("http://cdn.example.com/fonts/");
/// let urls = build_urls(&options)?;
/// assert!(urls[&FontType::Woff].starts_with("http://cdn.example.com/fonts/icon.woff?"));
/// # Ok::<(), iconfont_css::CssError>(())
/// ```
pub fn build_urls(options: &RenderOptions) -> Result<UrlMap, CssError> {
    let hash = compute_hash(options)?;
    Ok(urls_for_hash(options, &hash))
}

/// Build the URL map for an already computed fingerprint.
pub fn urls_for_hash(options: &RenderOptions, hash: &str) -> UrlMap {
    let base_url = options.css_fonts_url.as_deref().map(normalize_base_url);

    options
        .types
        .iter()
        .map(|&font_type| {
            let file_name = format!("{}.{}?{}", options.font_name, font_type, hash);
            let url = match base_url.as_deref() {
                Some(base) if !base.is_empty() => join_url(&[base, &file_name]),
                _ => file_name,
            };
            tracing::debug!("Resolved {} URL: {}", font_type, url);
            (font_type, url)
        })
        .collect()
}

/// Replace Windows path separators so a filesystem-style base works as a URL.
pub fn normalize_base_url(base: &str) -> String {
    base.replace('\\', "/")
}

/// Join URL segments with exactly one `/` between them.
///
/// ```
/// use iconfont_css::urls::join_url;
///
/// assert_eq!(join_url(&["http://cdn.example.com/fonts/", "/icon.woff?abc"]),
///            "http://cdn.example.com/fonts/icon.woff?abc");
/// assert_eq!(join_url(&["http:", "example.com", "a"]), "http://example.com/a");
/// ```
pub fn join_url(parts: &[&str]) -> String {
    let mut parts: Vec<String> = parts.iter().map(|p| (*p).to_string()).collect();
    if parts.is_empty() {
        return String::new();
    }

    if parts.len() > 1 && BARE_PROTOCOL.is_match(&parts[0]) {
        let first = parts.remove(0);
        parts[0] = format!("{}{}", first, parts[0]);
    }

    let protocol_replacement = if FILE_PROTOCOL.is_match(&parts[0]) {
        "$1:///"
    } else {
        "$1://"
    };
    parts[0] = PROTOCOL_SLASHES.replace(&parts[0], protocol_replacement).into_owned();

    let last = parts.len() - 1;
    let segments: Vec<String> = parts
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let part = if i > 0 {
                LEADING_SLASHES.replace(part, "")
            } else {
                part.as_str().into()
            };
            if i < last {
                TRAILING_SLASHES.replace(&part, "").into_owned()
            } else {
                TRAILING_SLASHES.replace(&part, "/").into_owned()
            }
        })
        .collect();

    let joined = segments.join("/");
    let joined = SLASH_BEFORE_QUERY.replace_all(&joined, "$1");

    // Only the first `?` starts the query; later ones become parameter separators.
    let mut pieces = joined.split('?');
    let head = pieces.next().unwrap_or_default();
    let rest: Vec<&str> = pieces.collect();
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{}?{}", head, rest.join("&"))
    }
}
