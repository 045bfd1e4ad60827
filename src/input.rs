//! Input spans and whitespace chunking.
//!
//! The space tokenizer is the first stage of every parse call. It walks the
//! input byte by byte and yields maximal runs of non-whitespace bytes:
//!
//! ```text
//! Input:  "  hello\t\tโลก \n"
//!            ^^^^^    ^^^
//! Chunks: (2, 5)  "hello"
//!         (9, 9)  "โลก"     <- 3 chars × 3 bytes in UTF-8
//! ```
//!
//! Whitespace is exactly space, tab, CR and LF. Those are ASCII, and every
//! supported encoding is ASCII-compatible, so a whitespace byte can never be
//! the middle of a multi-byte character.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::classify::is_whitespace;
use crate::encoding::SourceEncoding;

/// An immutable view over the text of one parse call.
///
/// ```rust
/// use thaift::{InputSpan, SourceEncoding};
///
/// let span = InputSpan::from("hello world");
/// assert_eq!(span.len(), 11);
/// assert_eq!(span.encoding(), SourceEncoding::Utf8);
/// assert_eq!(span.chunks().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpan<'a> {
    bytes: &'a [u8],
    encoding: SourceEncoding,
}

impl<'a> InputSpan<'a> {
    /// Wrap raw bytes declared to be in `encoding`.
    #[must_use]
    pub const fn new(bytes: &'a [u8], encoding: SourceEncoding) -> Self {
        Self { bytes, encoding }
    }

    /// The raw input bytes.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The declared source encoding.
    #[must_use]
    pub const fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the input has no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The bytes covered by `chunk`.
    #[must_use]
    pub fn slice(&self, chunk: Chunk) -> &'a [u8] {
        &self.bytes[chunk.span()]
    }

    /// Whitespace-delimited chunks of this input.
    #[must_use]
    pub fn chunks(&self) -> Chunks<'a> {
        Chunks::new(self.bytes)
    }
}

impl<'a> From<&'a str> for InputSpan<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes(), SourceEncoding::Utf8)
    }
}

/// A whitespace-free byte range of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Byte offset of the first byte in the input.
    pub start: usize,
    /// Length in bytes (never zero when produced by [`Chunks`]).
    pub len: usize,
}

impl Chunk {
    /// Create a chunk.
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The byte span of this chunk in the input.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Lazy iterator over the chunks of an input.
///
/// Once exhausted it stays exhausted.
///
/// ```rust
/// use thaift::{Chunk, InputSpan};
///
/// let chunks: Vec<Chunk> = InputSpan::from("  foo").chunks().collect();
/// assert_eq!(chunks, vec![Chunk::new(2, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let bytes = self.bytes;

        while self.pos < bytes.len() && is_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && !is_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }

        Some(Chunk::new(start, self.pos - start))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        // At most one chunk per two bytes, plus a trailing one.
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for Chunks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str) -> Vec<(usize, usize)> {
        InputSpan::from(text)
            .chunks()
            .map(|c| (c.start, c.len))
            .collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(chunks("hello world"), vec![(0, 5), (6, 5)]);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(chunks("  foo"), vec![(2, 3)]);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(chunks("a \t\r\n b\n"), vec![(0, 1), (6, 1)]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(chunks("").is_empty());
        assert!(chunks(" \t\r\n  ").is_empty());
    }

    #[test]
    fn test_multibyte_chunk() {
        let text = "ab สวัสดี";
        let found = chunks(text);
        assert_eq!(found, vec![(0, 2), (3, text.len() - 3)]);
    }

    #[test]
    fn test_fused() {
        let mut it = InputSpan::from("x").chunks();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_size_hint_bounds_count() {
        let text = "a b c d e";
        let it = InputSpan::from(text).chunks();
        let (_, upper) = it.size_hint();
        assert!(upper.unwrap() >= it.count());
    }

    #[test]
    fn test_slice() {
        let span = InputSpan::from("hello world");
        let second = span.chunks().nth(1).unwrap();
        assert_eq!(span.slice(second), b"world");
        assert_eq!(second.span(), 6..11);
    }
}
