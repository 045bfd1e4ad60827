//! # thaift
//!
//! Full-text tokenizing for documents that mix Thai and Latin text.
//!
//! ## The Problem
//!
//! A full-text index is built from words. Most tokenizers find words by
//! splitting on whitespace, which works for English and fails for Thai:
//! Thai is written without spaces between words, so a whitespace split
//! turns a whole sentence into one unsearchable "word".
//!
//! ```text
//! Input:  "hello สวัสดีชาวโลก"
//!
//! Whitespace only:   [hello] [สวัสดีชาวโลก]          <- one Thai "word"
//! This crate:        [hello] [สวัสดี] [ชาว] [โลก]
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!  input bytes ──> whitespace chunks ──> classify first byte
//!                                          │
//!                    ┌─── ASCII letter ────┤
//!                    v                     v  anything else
//!               whole chunk          normalize to UTF-8
//!               is one word          (per-char width table)
//!                    │                     │
//!                    │                     v
//!                    │               Segmenter: cut points
//!                    │               (character indices)
//!                    │                     │
//!                    │                     v
//!                    │               cut points -> byte ranges
//!                    │               via source widths
//!                    v                     v
//!                  WordSink::submit_word(word, metadata)
//! ```
//!
//! Every emitted word is a byte range of the *input*, in the input's own
//! encoding. Word lengths are never computed as characters × a fixed width:
//! a TIS-620 Thai character is one byte, the same character in UTF-8 is three.
//!
//! ## Segmenters
//!
//! | Segmenter | Strategy | Dictionary |
//! |-----------|----------|------------|
//! | [`DictionarySegmenter`] | Maximal matching over grapheme clusters | Built-in or loaded |
//! | [`UnicodeWordSegmenter`] | UAX #29 word boundaries | None |
//!
//! Any type implementing [`Segmenter`] can be plugged in.
//!
//! ## Quick Start
//!
//! ```rust
//! use thaift::{InputSpan, ParseMode, Tokenizer, WordCollector};
//!
//! let tokenizer = Tokenizer::default();
//! let mut collector = WordCollector::new();
//!
//! tokenizer
//!     .parse(InputSpan::from("ฉันรักภาษาไทย and Rust"), ParseMode::Indexing, &mut collector)
//!     .unwrap();
//!
//! let words: Vec<_> = collector.words().iter().filter_map(|w| w.text()).collect();
//! assert_eq!(words, vec!["ฉัน", "รัก", "ภาษาไทย", "and", "Rust"]);
//! ```
//!
//! Legacy single-byte input keeps its own offsets:
//!
//! ```rust
//! use thaift::{InputSpan, ParseMode, SourceEncoding, Tokenizer, WordCollector};
//!
//! let bytes = SourceEncoding::Tis620.encode("ฉันรักภาษาไทย").unwrap();
//! let mut collector = WordCollector::new();
//! Tokenizer::default()
//!     .parse(InputSpan::new(&bytes, SourceEncoding::Tis620), ParseMode::Indexing, &mut collector)
//!     .unwrap();
//!
//! let spans: Vec<_> = collector.words().iter().map(|w| w.span()).collect();
//! assert_eq!(spans, vec![0..3, 3..6, 6..13]);
//! ```
//!
//! ## Known Limitation
//!
//! A chunk is classified by its first byte only. `"abcไทย"` starts with an
//! ASCII letter, so the whole chunk is emitted as one word and its Thai part
//! is never segmented.

mod classify;
mod config;
mod dictionary;
mod emit;
mod encoding;
mod error;
mod input;
mod plugin;
mod segment;
mod session;
mod sink;
mod uax29;
mod word;

pub use classify::{classify, is_whitespace, Script};
pub use config::{ConfigError, ErrorPolicy, TokenizerConfig};
pub use dictionary::{Dictionary, DictionarySegmenter};
pub use encoding::{
    normalize, CharWidth, CharWidthTable, Defect, NormalizedBuffer, SourceEncoding,
    NORMALIZED_MAX_CHAR_WIDTH,
};
pub use error::{Error, Result};
pub use input::{Chunk, Chunks, InputSpan};
pub use plugin::{FulltextParser, PluginDescriptor, DESCRIPTOR};
pub use segment::{find_cut_points, CutPoints};
pub use session::{ParseSummary, SessionState, Tokenizer};
pub use sink::{CollectedWord, SinkError, WordCollector, WordSink};
pub use uax29::UnicodeWordSegmenter;
pub use word::{ParseMode, TokenMetadata, TokenType, Word};

/// A word boundary finder.
///
/// Given a run of normalized text with no whitespace, report the character
/// indices where one word ends and the next begins. The tokenizer only ever
/// calls this for chunks that do not start with an ASCII letter.
///
/// Implementations must push strictly increasing indices `c` with
/// `0 < c < text.chars().count()`; anything else fails the parse with
/// [`Error::InvalidCutPoints`]. Pushing nothing means the whole text is one
/// word.
///
/// ```rust
/// use thaift::{DictionarySegmenter, Segmenter, UnicodeWordSegmenter};
///
/// fn cuts(segmenter: &dyn Segmenter, text: &str) -> Vec<usize> {
///     let mut cuts = Vec::new();
///     segmenter.find_boundaries(text, &mut cuts);
///     cuts
/// }
///
/// let dictionary = DictionarySegmenter::default();
/// assert_eq!(cuts(&dictionary, "สวัสดีชาวโลก"), vec![6, 9]);
/// assert_eq!(cuts(&UnicodeWordSegmenter, "12,5"), Vec::<usize>::new());
/// ```
pub trait Segmenter: Send + Sync {
    /// Push the internal word boundaries of `text` onto `cuts`.
    ///
    /// `cuts` arrives empty, with capacity for one entry per character.
    fn find_boundaries(&self, text: &str, cuts: &mut Vec<usize>);

    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;
}
