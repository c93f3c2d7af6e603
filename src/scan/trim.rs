//! Punctuation and bracket trimming for a single word.
//!
//! Leading openers are peeled off first. Then the tail is trimmed until it
//! is stable: sentence punctuation always goes, a closer goes only while it
//! outnumbers its opener, a quote goes when it closes a quote peeled off the
//! front or while it is unpaired. Counts are kept in a small table and
//! updated as units are dropped, so the whole pass is linear in the word
//! length.

use super::Unit;

/// How many units to drop from each end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trimmed {
    pub lead: usize,
    pub trail: usize,
}

impl Trimmed {
    /// Number of units left between lead and trail.
    #[inline]
    pub fn middle_len(&self, word_len: usize) -> usize {
        word_len.saturating_sub(self.lead + self.trail)
    }
}

const SLOTS: usize = 10;

/// Occurrence counts of the bracket and quote characters in the middle.
#[derive(Default)]
struct Counts([u32; SLOTS]);

impl Counts {
    #[inline]
    fn slot(ch: char) -> Option<usize> {
        Some(match ch {
            '(' => 0,
            ')' => 1,
            '[' => 2,
            ']' => 3,
            '{' => 4,
            '}' => 5,
            '<' => 6,
            '>' => 7,
            '"' => 8,
            '\'' => 9,
            _ => return None,
        })
    }

    #[inline]
    fn get(&self, ch: char) -> u32 {
        Self::slot(ch).map_or(0, |s| self.0[s])
    }

    #[inline]
    fn add(&mut self, ch: char) {
        if let Some(s) = Self::slot(ch) {
            self.0[s] += 1;
        }
    }

    #[inline]
    fn remove(&mut self, ch: char) {
        if let Some(s) = Self::slot(ch) {
            self.0[s] = self.0[s].saturating_sub(1);
        }
    }
}

#[inline]
fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{' | '<' | '"' | '\'')
}

#[inline]
fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

#[inline]
fn is_sentence_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | ':' | ';' | '!')
}

/// The character a closer balances against.
#[inline]
fn partner(ch: char) -> char {
    match ch {
        ')' => '(',
        ']' => '[',
        '}' => '{',
        '>' => '<',
        '<' => '>',
        other => other,
    }
}

/// `[` that starts a bracketed IPv6 host such as `[::1]` or `[2001:db8::2]:80`.
fn opens_ipv6_literal(units: &[Unit]) -> bool {
    if units.first().map(|u| u.ch) != Some('[') {
        return false;
    }
    let mut colons = 0;
    for unit in &units[1..] {
        match unit.ch {
            ']' => return colons > 0,
            ':' => colons += 1,
            c if c.is_ascii_hexdigit() || c == '.' => {}
            _ => return false,
        }
    }
    false
}

/// Compute the lead and trail to strip from `units`.
pub fn trim(units: &[Unit]) -> Trimmed {
    let mut start = 0;
    // Quotes peeled off the front; each one pairs with a trailing quote.
    let mut opened = Counts::default();
    while start < units.len()
        && is_opener(units[start].ch)
        && !opens_ipv6_literal(&units[start..])
    {
        if is_quote(units[start].ch) {
            opened.add(units[start].ch);
        }
        start += 1;
    }

    let mut counts = Counts::default();
    for unit in &units[start..] {
        counts.add(unit.ch);
    }

    let mut end = units.len();
    while end > start {
        let ch = units[end - 1].ch;
        let strip = match ch {
            c if is_sentence_punctuation(c) => true,
            ')' | ']' | '}' | '>' | '<' => counts.get(ch) > counts.get(partner(ch)),
            '"' | '\'' if opened.get(ch) > 0 => {
                opened.remove(ch);
                true
            }
            '"' | '\'' => counts.get(ch) % 2 == 1,
            _ => false,
        };
        if !strip {
            break;
        }
        counts.remove(ch);
        end -= 1;
    }

    Trimmed {
        lead: start,
        trail: units.len() - end,
    }
}
