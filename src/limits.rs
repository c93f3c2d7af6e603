//! DoS prevention constants.
//!
//! These limits keep scanning linear and bound the size of generated
//! markup on pathological inputs.

/// Words longer than this (in bytes) are never linked.
pub const MAX_WORD_LEN: usize = 2048;

/// Maximum input size addressable by a token span.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Maximum length of a URL scheme (`https`, `ftp`, ...).
pub const MAX_SCHEME_LEN: usize = 32;

/// Inline capacity of the per-word unit buffer before it spills to the heap.
pub const INLINE_WORD_UNITS: usize = 64;
