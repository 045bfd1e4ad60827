//! The indexing collaborator boundary.
//!
//! Every word the tokenizer finds is handed, synchronously and in order, to a
//! [`WordSink`]. In a search engine that is the code that adds terms to the
//! index or to the query; in tests it is usually a [`WordCollector`].
//!
//! Closures work too:
//!
//! ```rust
//! use thaift::{InputSpan, ParseMode, Tokenizer, TokenMetadata, Word, SinkError};
//!
//! let mut spans = Vec::new();
//! let mut sink = |word: Word<'_>, _meta: &TokenMetadata| -> Result<(), SinkError> {
//!     spans.push(word.span());
//!     Ok(())
//! };
//!
//! Tokenizer::default()
//!     .parse(InputSpan::from("hello world"), ParseMode::Indexing, &mut sink)
//!     .unwrap();
//! assert_eq!(spans, vec![0..5, 6..11]);
//! ```

use crate::word::{TokenMetadata, Word};

/// Error returned by a collaborator that refuses a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("collaborator returned status {status}: {message}")]
pub struct SinkError {
    /// Host status code.
    pub status: i32,
    /// Human-readable reason.
    pub message: String,
}

impl SinkError {
    /// Create an error with a status code and message.
    #[must_use]
    pub fn new(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Receiver of emitted words.
pub trait WordSink {
    /// Accept one word.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] to reject the word. What happens next depends on
    /// the tokenizer's [`ErrorPolicy`](crate::ErrorPolicy).
    fn submit_word(&mut self, word: Word<'_>, metadata: &TokenMetadata) -> Result<(), SinkError>;
}

impl<F> WordSink for F
where
    F: FnMut(Word<'_>, &TokenMetadata) -> Result<(), SinkError>,
{
    fn submit_word(&mut self, word: Word<'_>, metadata: &TokenMetadata) -> Result<(), SinkError> {
        self(word, metadata)
    }
}

/// An owned copy of an emitted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedWord {
    /// The word's bytes, in the input encoding.
    pub bytes: Vec<u8>,
    /// Byte offset where the word starts in the input.
    pub start: usize,
    /// Byte offset where the word ends (exclusive).
    pub end: usize,
    /// Zero-based index of the word in the parse call.
    pub index: usize,
    /// Metadata the word was submitted with.
    pub metadata: TokenMetadata,
}

impl CollectedWord {
    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the word has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The byte span of this word in the input.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The word as text, if the input was UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// A sink that keeps a copy of every word it accepts.
///
/// ```rust
/// use thaift::{InputSpan, ParseMode, Tokenizer, WordCollector};
///
/// let mut collector = WordCollector::new();
/// Tokenizer::default()
///     .parse(InputSpan::from("  foo"), ParseMode::Indexing, &mut collector)
///     .unwrap();
///
/// let words = collector.into_words();
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].span(), 2..5);
/// assert_eq!(words[0].text(), Some("foo"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordCollector {
    words: Vec<CollectedWord>,
}

impl WordCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Words collected so far.
    #[must_use]
    pub fn words(&self) -> &[CollectedWord] {
        &self.words
    }

    /// Take the collected words.
    #[must_use]
    pub fn into_words(self) -> Vec<CollectedWord> {
        self.words
    }
}

impl WordSink for WordCollector {
    fn submit_word(&mut self, word: Word<'_>, metadata: &TokenMetadata) -> Result<(), SinkError> {
        let span = word.span();
        self.words.push(CollectedWord {
            bytes: word.as_bytes().to_vec(),
            start: span.start,
            end: span.end,
            index: self.words.len(),
            metadata: *metadata,
        });
        Ok(())
    }
}
