//! Byte and character classification.
//!
//! All tables here are `static` data built at compile time and never mutated,
//! so concurrent parse calls share them without locking.
//!
//! ## The Single-Script Approximation
//!
//! A chunk is routed by its first byte only:
//!
//! ```text
//! "search"      -> Alphabetic  (one word)
//! "ค้นหา"        -> Ambiguous   (segmented)
//! "abcไทย"      -> Alphabetic  (one word, Thai tail is not segmented)
//! "ไทยabc"      -> Ambiguous   (segmenter cuts at the script change)
//! ```
//!
//! Mixed-script chunks that start with a Latin letter are therefore indexed
//! whole. Changing this changes the contents of existing indexes.

/// Routing decision for a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Space-delimited alphabetic text; the chunk is one word.
    Alphabetic,
    /// Text that needs boundary detection.
    Ambiguous,
}

const fn build_whitespace() -> [bool; 256] {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\r' as usize] = true;
    table[b'\n' as usize] = true;
    table
}

const fn build_alphabetic() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0;
    while b < 256 {
        table[b] = (b as u8).is_ascii_alphabetic();
        b += 1;
    }
    table
}

static WHITESPACE: [bool; 256] = build_whitespace();

// Every supported source encoding is ASCII-compatible, so one table serves all.
static ALPHABETIC: [bool; 256] = build_alphabetic();

/// Whether `byte` separates chunks (space, tab, CR, LF).
#[inline]
#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    WHITESPACE[byte as usize]
}

/// Classify a chunk by its first byte.
///
/// An empty slice is [`Script::Ambiguous`]; the space tokenizer never
/// produces one.
///
/// ```rust
/// use thaift::{classify, Script};
///
/// assert_eq!(classify(b"hello"), Script::Alphabetic);
/// assert_eq!(classify("สวัสดี".as_bytes()), Script::Ambiguous);
/// assert_eq!(classify(b"42"), Script::Ambiguous);
/// ```
#[must_use]
pub fn classify(chunk: &[u8]) -> Script {
    match chunk.first() {
        Some(&b) if ALPHABETIC[b as usize] => Script::Alphabetic,
        _ => Script::Ambiguous,
    }
}

/// Thai block, U+0E00..=U+0E7F.
#[inline]
pub(crate) fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E00}'..='\u{0E7F}')
}

/// Thai vowels written before the consonant they follow in speech.
/// A word never ends on one.
#[inline]
pub(crate) fn is_leading_vowel(c: char) -> bool {
    matches!(c, '\u{0E40}'..='\u{0E44}')
}

/// Spacing vowels and marks that never start a word.
#[inline]
pub(crate) fn is_following_vowel(c: char) -> bool {
    matches!(c, '\u{0E30}' | '\u{0E32}' | '\u{0E33}' | '\u{0E45}')
}
