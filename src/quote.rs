//! Percent-encoding of link targets.
//!
//! Everything after the host (`/path?query#fragment`) is quoted here.
//! Valid `%XX` triplets are copied as-is, so quoting is idempotent and an
//! already-encoded URL is never double-encoded.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Component of a URL tail, each with its own set of bytes kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Path or fragment: unreserved, sub-delims and gen-delims.
    Path,
    /// Query: unreserved and the `&`, `=`, `+` separators.
    Query,
}

impl Component {
    #[inline]
    fn keeps(self, b: u8) -> bool {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            return true;
        }
        match self {
            Component::Path => matches!(
                b,
                b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
                    | b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@'
            ),
            Component::Query => matches!(b, b'&' | b'=' | b'+'),
        }
    }
}

/// Percent-encode one component, appending to `out`.
///
/// # Example
/// ```
/// use ferrolink::quote::{quote_into, Component};
///
/// let mut out = String::new();
/// quote_into(&mut out, "/wiki/Café", Component::Path);
/// assert_eq!(out, "/wiki/Caf%C3%A9");
/// ```
pub fn quote_into(out: &mut String, input: &str, component: Component) {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'%' && is_pct_triplet(&bytes[pos..]) {
            out.push_str(&input[pos..pos + 3]);
            pos += 3;
            continue;
        }
        if component.keeps(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0xF) as usize] as char);
        }
        pos += 1;
    }
}

/// Quote everything that follows the host of a URL.
///
/// The path runs to the first `?` or `#`; the query, when present, runs to
/// the first `#` after it; the fragment is the rest.
pub fn quote_tail_into(out: &mut String, tail: &str) {
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    quote_into(out, &tail[..path_end], Component::Path);
    let mut rest = &tail[path_end..];

    if let Some(query) = rest.strip_prefix('?') {
        let query_end = query.find('#').unwrap_or(query.len());
        out.push('?');
        quote_into(out, &query[..query_end], Component::Query);
        rest = &query[query_end..];
    }

    if let Some(fragment) = rest.strip_prefix('#') {
        out.push('#');
        quote_into(out, fragment, Component::Path);
    }
}

#[inline]
fn is_pct_triplet(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}
