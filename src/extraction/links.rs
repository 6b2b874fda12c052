//! Anchor link extraction from HTML pages.
//!
//! Regex-based: only the `href` of `<a>` tags is extracted, no HTML parsing.
//!
//! Limitations:
//! - Only double-quoted `href` values are recognised
//! - Anchors inside comments or scripts are still picked up

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Match `<a ... href="target"`, capturing the target.
static ANCHOR_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid anchor href regex")
});

/// Extract every distinct `href` target from anchor tags in `content`.
///
/// Targets are returned verbatim; filtering to in-corpus pages happens when
/// the corpus is assembled.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
