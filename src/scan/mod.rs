//! Link scanner.
//!
//! Works word by word:
//! 1. Split the input on whitespace runs (whitespace is never part of a link)
//! 2. Decode each word into units (entities count as one unit in safe input)
//! 3. Trim surrounding punctuation, brackets and quotes
//! 4. Classify what is left as URL, email, or plain text
//!
//! The result is a list of non-overlapping tokens in input order. Text
//! between tokens is left to the renderer.

mod classify;
mod trim;

pub use classify::Rejection;

use log::trace;
use smallvec::SmallVec;

use crate::{escape, limits, Input, Range};
use classify::{classify, Link};

/// Kind of a recognised link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Web link, `http://` added when the text had no scheme.
    Url,
    /// Email address, linked with `mailto:`.
    Email,
}

/// A recognised link inside the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range of the visible label in the input.
    pub span: Range,
    /// Link target, percent-encoded and with an ASCII host.
    pub href: String,
    /// Whether the label already started with `scheme://`.
    pub scheme_present: bool,
    /// Units trimmed off the front of the word, re-emitted as text.
    pub leading_trim: u32,
    /// Units trimmed off the back of the word, re-emitted as text.
    pub trailing_trim: u32,
}

/// One character of a word, or one character reference in safe input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unit {
    pub ch: char,
    /// Byte offset within the word.
    pub offset: u32,
    /// Source length in bytes.
    pub len: u8,
}

type Units = SmallVec<[Unit; limits::INLINE_WORD_UNITS]>;

/// Find all links in `input`.
///
/// # Example
/// ```
/// use ferrolink::{find_links, Input, TokenKind};
///
/// let tokens = find_links(Input::Raw("mail me@example.com or see (www.example.com)."));
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Email);
/// assert_eq!(tokens[1].href, "http://www.example.com");
/// assert_eq!(tokens[1].trailing_trim, 2);
/// ```
pub fn find_links(input: Input<'_>) -> Vec<Token> {
    let mut tokens = Vec::new();
    find_links_into(input, &mut tokens);
    tokens
}

/// Find all links in `input`, appending to `tokens`.
pub fn find_links_into(input: Input<'_>, tokens: &mut Vec<Token>) {
    let text = input.as_str();
    if text.len() > limits::MAX_INPUT_LEN {
        trace!("input of {} bytes exceeds span range, not scanned", text.len());
        return;
    }
    let safe = input.is_safe();
    let mut units = Units::new();

    for (word_start, word) in Words::new(text) {
        if !might_be_link(word) {
            continue;
        }
        if word.len() > limits::MAX_WORD_LEN {
            trace!("skipping word at {}: {}", word_start, Rejection::TooLong);
            continue;
        }

        units.clear();
        decode_units(word, safe, &mut units);
        let trimmed = trim::trim(&units);
        if trimmed.middle_len(units.len()) == 0 {
            continue;
        }
        let middle = &units[trimmed.lead..units.len() - trimmed.trail];
        let first = middle[0];
        let last = middle[middle.len() - 1];
        let start = first.offset as usize;
        let end = last.offset as usize + last.len as usize;

        let decoded;
        let candidate = if safe {
            decoded = middle.iter().map(|u| u.ch).collect::<String>();
            decoded.as_str()
        } else {
            &word[start..end]
        };

        match classify(candidate) {
            Ok(Link {
                kind,
                href,
                scheme_present,
            }) => tokens.push(Token {
                kind,
                span: Range::from_usize(word_start + start, word_start + end),
                href,
                scheme_present,
                leading_trim: trimmed.lead as u32,
                trailing_trim: trimmed.trail as u32,
            }),
            Err(rejection) => {
                trace!("not linking {:?}: {}", candidate, rejection);
            }
        }
    }
}

/// Only words with one of `.`, `@`, `:` can hold a link.
#[inline]
fn might_be_link(word: &str) -> bool {
    word.bytes().any(|b| matches!(b, b'.' | b'@' | b':'))
}

fn decode_units(word: &str, safe: bool, units: &mut Units) {
    if safe {
        let mut pos = 0;
        while pos < word.len() {
            let (ch, len) = escape::decode_unit(word, pos);
            units.push(Unit {
                ch,
                offset: pos as u32,
                len: len as u8,
            });
            pos += len;
        }
    } else {
        units.extend(word.char_indices().map(|(i, ch)| Unit {
            ch,
            offset: i as u32,
            len: ch.len_utf8() as u8,
        }));
    }
}

/// Iterator over `(byte_offset, word)` for each whitespace-free run.
struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skip = rest.find(|c: char| !c.is_whitespace())?;
        let start = self.pos + skip;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, &self.text[start..start + len]))
    }
}
