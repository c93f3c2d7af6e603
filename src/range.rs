//! Compact byte range used for token spans.
//!
//! Offsets are `u32` to keep tokens small; inputs are capped at 4GB.
//! Every range produced by the scanner starts and ends on a UTF-8 char
//! boundary of the text it was computed from.

/// Half-open byte range `start..end` into an input text.
///
/// # Example
/// ```
/// use ferrolink::Range;
///
/// let text = "see www.example.com now";
/// let range = Range::new(4, 19);
/// assert_eq!(range.slice(text), "www.example.com");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The text this range covers.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or splits a UTF-8 sequence.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start_usize()..self.end_usize()]
    }

    /// The text this range covers, or `None` if it does not fit `text`.
    #[inline]
    pub fn get<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start_usize()..self.end_usize())
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Check if this range contains a byte offset.
    #[inline]
    pub const fn contains(&self, pos: u32) -> bool {
        pos >= self.start && pos < self.end
    }

    /// True when `self` ends at or before `other` starts.
    #[inline]
    pub const fn precedes(&self, other: &Range) -> bool {
        self.end <= other.start
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    #[inline]
    fn from(r: Range) -> Self {
        r.start_usize()..r.end_usize()
    }
}
