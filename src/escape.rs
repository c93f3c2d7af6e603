//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Also decodes the character references of already-escaped input so the
//! scanner can treat `&lt;` like `<` when trimming a word.

use memchr::{memchr, memchr2, memchr3};

/// Longest character reference considered when decoding safe input
/// (`&CounterClockwiseContourIntegral;` is 33 bytes).
const MAX_ENTITY_LEN: usize = 40;

/// Lookup table for escapable characters.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML text into an output buffer.
///
/// Escapes `<`, `>`, `&`, `"` and `'`. The same escaping is valid for
/// text content and for double-quoted attribute values.
///
/// # Example
/// ```
/// use ferrolink::escape::escape_into;
///
/// let mut out = Vec::new();
/// escape_into(&mut out, b"<script>alert('x')</script>");
/// assert_eq!(out, b"&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
/// ```
#[inline]
pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let mut pos = match first_escape(input) {
        Some(p) => p,
        None => {
            out.extend_from_slice(input);
            return;
        }
    };

    if pos > 0 {
        out.extend_from_slice(&input[..pos]);
    }

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if pos < input.len() {
            let escape_seq = match input[pos] {
                b'<' => b"&lt;" as &[u8],
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                b'"' => b"&quot;",
                b'\'' => b"&#39;",
                _ => unreachable!(),
            };
            out.extend_from_slice(escape_seq);
            pos += 1;
        }
    }
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Escape and return as a String.
///
/// Prefer `escape_into` to reuse buffers.
pub fn escape_to_string(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len() + input.len() / 8);
    escape_into(&mut out, input.as_bytes());
    // SAFETY: We only add ASCII sequences, so if input was valid UTF-8,
    // output is also valid UTF-8
    unsafe { String::from_utf8_unchecked(out) }
}

/// Decode the character at `pos` of already-escaped text.
///
/// Returns the decoded character and the number of source bytes it spans.
/// A complete character reference that decodes to exactly one character
/// (`&lt;`, `&#39;`, `&eacute;`, ...) counts as that character; anything
/// else is the literal character at `pos`.
///
/// `pos` must lie on a char boundary of `text` and before its end.
pub fn decode_unit(text: &str, pos: usize) -> (char, usize) {
    let rest = &text[pos..];
    if rest.as_bytes()[0] == b'&' {
        let window = &rest.as_bytes()[..rest.len().min(MAX_ENTITY_LEN)];
        if let Some(semi) = memchr(b';', window) {
            let reference = &rest[..=semi];
            if is_reference_shape(reference) {
                let decoded = html_escape::decode_html_entities(reference);
                let mut chars = decoded.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    if decoded != reference {
                        return (ch, reference.len());
                    }
                }
            }
        }
    }
    let ch = rest.chars().next().unwrap_or('\0');
    (ch, ch.len_utf8())
}

/// `&name;`, `&#123;` or `&#x1F;` with no other punctuation in between.
fn is_reference_shape(reference: &str) -> bool {
    let body = &reference.as_bytes()[1..reference.len() - 1];
    match body {
        [] => false,
        [b'#', b'x' | b'X', hex @ ..] => !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit),
        [b'#', dec @ ..] => !dec.is_empty() && dec.iter().all(u8::is_ascii_digit),
        name => name.iter().all(u8::is_ascii_alphanumeric),
    }
}

/// Decode every character reference in already-escaped text.
pub fn unescape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
