//! HTML output writer with a reusable buffer.
//!
//! Literal text and link labels go through `escape`; the only unescaped
//! bytes written are the anchor tags produced here.

use std::borrow::Cow;

use crate::escape;

const ELLIPSIS: &str = "...";

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use ferrolink::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.write_literal("a < b ", false);
/// writer.link_start("http://example.com", true);
/// writer.write_label("example.com", false, None);
/// writer.link_end();
///
/// assert_eq!(
///     writer.into_string(),
///     "a &lt; b <a href=\"http://example.com\" rel=\"nofollow\">example.com</a>"
/// );
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Each link roughly doubles its text and adds ~40 bytes of markup.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 2),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write a static string (compile-time known markup).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_into(&mut self.out, text.as_bytes());
    }

    /// Write literal (non-link) text.
    ///
    /// Already-safe text is copied verbatim, anything else is escaped.
    #[inline]
    pub fn write_literal(&mut self, text: &str, safe: bool) {
        if safe {
            self.out.extend_from_slice(text.as_bytes());
        } else {
            self.write_escaped_text(text);
        }
    }

    /// Write anchor start: `<a href="href">` or `<a href="href" rel="nofollow">`.
    ///
    /// `href` is written as-is. It must not contain `"`, `<` or `>`; link
    /// targets built by the scanner are percent-encoded and never do.
    #[inline]
    pub fn link_start(&mut self, href: &str, nofollow: bool) {
        debug_assert!(!href.contains(['"', '<', '>']));
        self.write_str("<a href=\"");
        self.out.extend_from_slice(href.as_bytes());
        if nofollow {
            self.write_str("\" rel=\"nofollow\">");
        } else {
            self.write_str("\">");
        }
    }

    /// Write a link label, escaped exactly once.
    ///
    /// A label taken from already-safe text is decoded before escaping so
    /// `&amp;` stays `&amp;`. With `trim_limit`, labels longer than the
    /// limit (in chars) are cut to `limit - 3` chars followed by `...`.
    pub fn write_label(&mut self, label: &str, safe: bool, trim_limit: Option<usize>) {
        let label = if safe { escape::unescape(label) } else { Cow::Borrowed(label) };
        match trim_limit {
            Some(limit) => self.write_escaped_text(&truncate_label(&label, limit)),
            None => self.write_escaped_text(&label),
        }
    }

    /// Write anchor end: `</a>`
    #[inline]
    pub fn link_end(&mut self) {
        self.write_str("</a>");
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only &str content and ASCII markup are written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only &str content and ASCII markup are written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_label(label: &str, limit: usize) -> Cow<'_, str> {
    if label.chars().count() <= limit {
        return Cow::Borrowed(label);
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let cut = label.char_indices().nth(keep).map_or(label.len(), |(i, _)| i);
    let mut short = String::with_capacity(cut + ELLIPSIS.len());
    short.push_str(&label[..cut]);
    short.push_str(ELLIPSIS);
    Cow::Owned(short)
}
