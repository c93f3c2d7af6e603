//! ferrolink: fast, escaping-safe autolinker
//!
//! Finds URLs and email addresses in plain text and turns them into anchor
//! markup, escaping everything else.
//!
//! # Design Principles
//! - No regex: byte and char level scanning
//! - No backtracking: O(n) time on all inputs
//! - Fail soft: anything malformed stays text
//! - Escape once: raw text is escaped, already-safe text is not escaped again
//!
//! # Example
//! ```
//! use ferrolink::{autolink, Input};
//!
//! let html = autolink(Input::Raw("Go to djangoproject.com! <now>"));
//! assert_eq!(
//!     html,
//!     "Go to <a href=\"http://djangoproject.com\" rel=\"nofollow\">djangoproject.com</a>! &lt;now&gt;"
//! );
//! ```

pub mod escape;
pub mod idn;
pub mod limits;
pub mod quote;
pub mod range;
pub mod render;
mod scan;
mod tld;

use std::fmt;
use std::ops::Deref;

use log::debug;

// Re-export primary types
pub use range::Range;
pub use render::HtmlWriter;
pub use scan::{find_links, find_links_into, Rejection, Token, TokenKind};

/// Text handed to the autolinker, tagged with its escaping state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Plain text; every character outside links is HTML-escaped.
    Raw(&'a str),
    /// Text that is already HTML-escaped (or must not be escaped). It is
    /// copied verbatim outside links.
    Safe(&'a str),
}

impl<'a> Input<'a> {
    /// The underlying text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Input::Raw(text) | Input::Safe(text) => text,
        }
    }

    #[inline]
    pub fn is_safe(&self) -> bool {
        matches!(self, Input::Safe(_))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Raw(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Raw(text)
    }
}

impl<'a> From<&'a SafeString> for Input<'a> {
    fn from(text: &'a SafeString) -> Self {
        Input::Safe(&text.0)
    }
}

/// HTML produced by the autolinker. Must not be escaped again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SafeString(String);

impl SafeString {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for SafeString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeString> for String {
    fn from(s: SafeString) -> Self {
        s.0
    }
}

impl PartialEq<str> for SafeString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SafeString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Add `rel="nofollow"` to web links (never to `mailto:` links).
    pub nofollow: bool,
    /// Shorten labels longer than this many characters, ending them with `...`.
    /// The link target is never shortened.
    pub trim_url_limit: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            nofollow: true,
            trim_url_limit: None,
        }
    }
}

/// Reusable autolinker configured with `Options`.
///
/// Holds no state between calls; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autolinker {
    options: Options,
}

impl Autolinker {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Link every URL and email in `input`.
    pub fn process<'a>(&self, input: impl Into<Input<'a>>) -> SafeString {
        let input = input.into();
        let mut writer = HtmlWriter::with_capacity_for(input.as_str().len());
        render_to_writer(input, &mut writer, &self.options);
        SafeString(writer.into_string())
    }

    /// Link every URL and email in `input`, writing into a provided buffer.
    ///
    /// The buffer is cleared first; its capacity is reused.
    pub fn process_into<'a>(&self, input: impl Into<Input<'a>>, out: &mut Vec<u8>) {
        let input = input.into();
        out.clear();
        out.reserve(input.as_str().len() + input.as_str().len() / 2);
        let mut writer = HtmlWriter::with_capacity(0);
        std::mem::swap(writer.buffer_mut(), out);
        render_to_writer(input, &mut writer, &self.options);
        std::mem::swap(writer.buffer_mut(), out);
    }

    /// The links `process` would produce, without rendering.
    pub fn tokens<'a>(&self, input: impl Into<Input<'a>>) -> Vec<Token> {
        find_links(input.into())
    }
}

/// Link URLs and emails with default options.
///
/// # Example
/// ```
/// use ferrolink::{autolink, Input};
///
/// assert_eq!(
///     autolink(Input::Raw("info@djangoproject.org")),
///     "<a href=\"mailto:info@djangoproject.org\">info@djangoproject.org</a>"
/// );
/// ```
pub fn autolink<'a>(input: impl Into<Input<'a>>) -> SafeString {
    Autolinker::default().process(input)
}

/// Link URLs and emails with options.
pub fn autolink_with_options<'a>(input: impl Into<Input<'a>>, options: &Options) -> SafeString {
    Autolinker::new(*options).process(input)
}

/// Link URLs and emails into a provided buffer.
pub fn autolink_into<'a>(input: impl Into<Input<'a>>, out: &mut Vec<u8>) {
    Autolinker::default().process_into(input, out);
}

/// Link a non-text value through its `Display` form.
///
/// ```
/// assert_eq!(ferrolink::autolink_value(&123), "123");
/// ```
pub fn autolink_value<T: fmt::Display + ?Sized>(value: &T) -> SafeString {
    let text = value.to_string();
    autolink(Input::Raw(&text))
}

/// Render `input` with its links to an HtmlWriter.
fn render_to_writer(input: Input<'_>, writer: &mut HtmlWriter, options: &Options) {
    let text = input.as_str();
    let safe = input.is_safe();
    let tokens = find_links(input);

    let mut pos = 0;
    for token in &tokens {
        writer.write_literal(&text[pos..token.span.start_usize()], safe);
        let nofollow = options.nofollow && token.kind == TokenKind::Url;
        writer.link_start(&token.href, nofollow);
        writer.write_label(token.span.slice(text), safe, options.trim_url_limit);
        writer.link_end();
        pos = token.span.end_usize();
    }
    writer.write_literal(&text[pos..], safe);
    debug!(
        "autolink: {} bytes in, {} bytes out, {} links, safe={}",
        text.len(),
        writer.len(),
        tokens.len(),
        safe
    );
}
