//! Words and the metadata that travels with them.

use std::ops::Range;

/// How the host is using the parse call.
///
/// The tokenizer segments identically in every mode; the collaborator uses
/// the mode to decide how to read [`TokenMetadata`] (stopwords, boolean
/// operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Building the index from a document.
    #[default]
    Indexing,
    /// Parsing a natural-language search string.
    Query,
    /// Parsing a boolean-mode search string.
    BooleanQuery,
}

/// Kind of token reported to the collaborator.
///
/// Hosts also know parenthesis, stopword and end-of-input tokens; this
/// tokenizer never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TokenType {
    /// An indexable word.
    #[default]
    Word,
}

/// Fixed record handed to the collaborator with every word.
///
/// Boolean operator fields are always neutral: this tokenizer does not
/// interpret `+`, `-`, `~`, `*` or quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenMetadata {
    /// Always [`TokenType::Word`].
    pub token_type: TokenType,
    /// Mode of the parse call.
    pub mode: ParseMode,
    /// Required (+1) / excluded (-1) marker; always 0.
    pub yes_no: i8,
    /// Relevance weight adjustment; always 0.
    pub weight_adjust: i8,
    /// Whether the word's weight is negated (`~`); always false.
    pub negated: bool,
    /// Whether the word is a prefix search (`*`); always false.
    pub truncated: bool,
    /// Whether the word is inside a quoted phrase; always false.
    pub quoted: bool,
    /// Byte offset of the word in the input.
    pub position: usize,
    /// Character preceding the word; always a space.
    pub prev: u8,
}

impl TokenMetadata {
    /// Metadata for a plain word at `position`.
    ///
    /// ```rust
    /// use thaift::{ParseMode, TokenMetadata, TokenType};
    ///
    /// let meta = TokenMetadata::plain_word(6, ParseMode::Query);
    /// assert_eq!(meta.token_type, TokenType::Word);
    /// assert_eq!(meta.position, 6);
    /// assert_eq!(meta.prev, b' ');
    /// assert!(!meta.truncated);
    /// ```
    #[must_use]
    pub const fn plain_word(position: usize, mode: ParseMode) -> Self {
        Self {
            token_type: TokenType::Word,
            mode,
            yes_no: 0,
            weight_adjust: 0,
            negated: false,
            truncated: false,
            quoted: false,
            position,
            prev: b' ',
        }
    }
}

/// A word: a borrowed slice of the input plus its offset.
///
/// The bytes are exactly the input bytes, in the input's encoding.
///
/// ```rust
/// use thaift::Word;
///
/// let text = b"hello world";
/// let word = Word::new(&text[6..11], 6);
/// assert_eq!(word.span(), 6..11);
/// assert_eq!(word.as_bytes(), b"world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Word<'a> {
    /// Create a word from its bytes and its offset in the input.
    #[must_use]
    pub const fn new(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset }
    }

    /// Byte offset in the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the word has no bytes. Never true for emitted words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The word's bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The byte span of this word in the input.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }
}

impl std::fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Word {{ span: {}..{}, len: {} }}",
            self.offset,
            self.offset + self.len(),
            self.len()
        )
    }
}
