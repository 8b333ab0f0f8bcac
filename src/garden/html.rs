//! # Page Scanning
//!
//! Sync needs two things from a rendered page: the `<title>` text and the exact inner
//! HTML of the content container. Both are located by byte offsets into the page
//! text instead of being parsed into a tree and serialized back. That keeps the
//! extracted content identical to what was rendered, whitespace and entity spelling
//! included, and lets a single element be rewritten without touching any other byte
//! of the page.
//!
//! The scanner understands quoted `id` attributes, nested elements of the same tag
//! name and self-closing tags. Comments and the bodies of `<script>` and `<style>`
//! are passed over, so markup inside them never opens or closes an element. It does
//! not understand attribute values containing `>`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("title pattern is valid")
});

/// Text of the first `<title>` element, trimmed.
pub fn page_title(html: &str) -> Option<&str> {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Alternatives matched ahead of tags so their contents are skipped whole.
const OPAQUE: &str = r"<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>";

/// Byte range of the inner HTML of the element whose `id` attribute is exactly `id`.
pub fn find_by_id(html: &str, id: &str) -> Option<Range<usize>> {
    // Listed ahead of the opaque alternatives so `<script id=..>` is still found
    let open_re = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9:-]*)\b[^>]*?\sid\s*=\s*["']{}["'][^>]*>|{}"#,
        regex::escape(id),
        OPAQUE
    ))
    .ok()?;

    let (open, tag) = open_re.captures_iter(html).find_map(|caps| {
        let tag = caps.get(1)?;
        Some((caps.get(0)?, tag.as_str()))
    })?;

    if open.as_str().ends_with("/>") {
        return Some(open.end()..open.end());
    }

    let rest = &html[open.end()..];
    if tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style") {
        let close_re = Regex::new(&format!(r"(?is)</{}\s*>", regex::escape(tag))).ok()?;
        let close = close_re.find(rest)?;
        return Some(open.end()..open.end() + close.start());
    }

    let tag_re = Regex::new(&format!(r"(?is){}|<(/?){}\b[^>]*>", OPAQUE, regex::escape(tag))).ok()?;
    let mut depth = 1usize;

    for tag_caps in tag_re.captures_iter(rest) {
        let Some(slash) = tag_caps.get(1) else {
            continue;
        };
        let m = tag_caps.get(0)?;
        if !slash.as_str().is_empty() {
            depth -= 1;
            if depth == 0 {
                return Some(open.end()..open.end() + m.start());
            }
        } else if !m.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}

/// Inner HTML of the element with the given `id`.
pub fn inner_html_by_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    find_by_id(html, id).map(|inner| &html[inner])
}

/// Copy of `html` with the byte range `inner` swapped for `replacement`.
pub fn replace_inner(html: &str, inner: &Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(html.len() + replacement.len());
    out.push_str(&html[..inner.start]);
    out.push_str(replacement);
    out.push_str(&html[inner.end..]);
    out
}
