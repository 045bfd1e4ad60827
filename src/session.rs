//! The tokenizer session: one parse call, end to end.
//!
//! ```text
//!            ┌──────────────────────────────────────────────┐
//!            v                                              │
//! Idle -> Scanning ──Alphabetic──> EmittingAlphabeticWord ──┤
//!            │      └─Ambiguous──> Normalizing              │
//!            │                       -> Segmenting          │
//!            │                       -> EmittingSegmented ──┘
//!            └── no more chunks ──> Done
//! ```
//!
//! Every buffer a chunk needs is owned by that chunk's iteration and dropped
//! before the next chunk is pulled, on success and on every error path.

use tracing::{debug, debug_span, trace};

use crate::classify::{classify, Script};
use crate::config::{ErrorPolicy, TokenizerConfig};
use crate::emit::Emitter;
use crate::encoding::normalize;
use crate::error::{Error, Result};
use crate::input::InputSpan;
use crate::segment::find_cut_points;
use crate::sink::WordSink;
use crate::word::ParseMode;
use crate::{DictionarySegmenter, Segmenter};

/// Where a session is in its state machine; recorded in trace logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before the first chunk is pulled.
    Idle,
    /// Pulling the next chunk.
    Scanning,
    /// Submitting an alphabetic chunk as one word.
    EmittingAlphabeticWord,
    /// Decoding an ambiguous chunk.
    Normalizing,
    /// Running the boundary-finder.
    Segmenting,
    /// Submitting the words of a segmented chunk.
    EmittingSegmentedWords,
    /// Input exhausted.
    Done,
}

/// Counters for a successful parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Words accepted by the sink.
    pub words: usize,
    /// Whitespace-delimited chunks seen.
    pub chunks: usize,
    /// Chunks emitted whole as alphabetic words.
    pub alphabetic_chunks: usize,
    /// Chunks run through the boundary-finder.
    pub segmented_chunks: usize,
    /// Malformed byte sequences replaced during decoding.
    pub defects: usize,
    /// Words the sink refused. Non-zero only under
    /// [`ErrorPolicy::Permissive`], where it turns the result into
    /// [`Error::PartiallyRejected`].
    pub rejected: usize,
}

/// A document and query tokenizer.
///
/// Holds a boundary-finder and configuration; all per-call state lives in
/// [`Tokenizer::parse`]. A `Tokenizer` can be shared across threads and used
/// for concurrent parse calls.
///
/// # Examples
///
/// ```rust
/// use thaift::{InputSpan, ParseMode, Tokenizer, WordCollector};
///
/// let tokenizer = Tokenizer::default();
/// let mut collector = WordCollector::new();
///
/// let summary = tokenizer
///     .parse(InputSpan::from("hello สวัสดีชาวโลก"), ParseMode::Indexing, &mut collector)
///     .unwrap();
///
/// let words: Vec<_> = collector.words().iter().filter_map(|w| w.text()).collect();
/// assert_eq!(words, vec!["hello", "สวัสดี", "ชาว", "โลก"]);
/// assert_eq!(summary.words, 4);
/// assert_eq!(summary.segmented_chunks, 1);
/// ```
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration.
    #[must_use]
    pub fn new(segmenter: impl Segmenter + 'static) -> Self {
        Self::with_config(segmenter, TokenizerConfig::default())
    }

    /// Create a tokenizer with an explicit configuration.
    #[must_use]
    pub fn with_config(segmenter: impl Segmenter + 'static, config: TokenizerConfig) -> Self {
        Self {
            segmenter: Box::new(segmenter),
            config,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The boundary-finder in use.
    #[must_use]
    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    /// Split `input` into words and submit each one to `sink`, in order.
    ///
    /// `mode` is passed through in every word's metadata and does not change
    /// where words are cut.
    ///
    /// # Errors
    ///
    /// - [`Error::AllocationFailure`] if a per-chunk buffer cannot be reserved.
    ///   No words are submitted after this.
    /// - [`Error::InvalidCutPoints`] if the segmenter breaks its contract.
    /// - [`Error::Rejected`] on the first word the sink refuses, under
    ///   [`ErrorPolicy::Strict`].
    /// - [`Error::PartiallyRejected`] after the whole input was processed, if
    ///   any word was refused under [`ErrorPolicy::Permissive`].
    pub fn parse<S>(
        &self,
        input: InputSpan<'_>,
        mode: ParseMode,
        sink: &mut S,
    ) -> Result<ParseSummary>
    where
        S: WordSink + ?Sized,
    {
        let span = debug_span!(
            "parse",
            bytes = input.len(),
            encoding = %input.encoding(),
            ?mode,
            segmenter = self.segmenter.name(),
        );
        let _enter = span.enter();

        let policy = self.config.error_policy();
        let mut emitter = Emitter::new(input, mode, policy, sink);
        let mut summary = ParseSummary::default();
        trace!(state = ?SessionState::Idle);

        for chunk in input.chunks() {
            trace!(state = ?SessionState::Scanning, start = chunk.start, len = chunk.len);
            summary.chunks += 1;
            let bytes = input.slice(chunk);

            match classify(bytes) {
                Script::Alphabetic => {
                    trace!(state = ?SessionState::EmittingAlphabeticWord);
                    summary.alphabetic_chunks += 1;
                    emitter.emit_whole(chunk)?;
                }
                Script::Ambiguous => {
                    trace!(state = ?SessionState::Normalizing);
                    let buffer = normalize(bytes, input.encoding(), &self.config)?;
                    if !buffer.defects().is_empty() {
                        debug!(
                            start = chunk.start,
                            defects = buffer.defects().len(),
                            "replaced malformed input"
                        );
                        summary.defects += buffer.defects().len();
                    }

                    trace!(state = ?SessionState::Segmenting, chars = buffer.char_count());
                    let cuts = find_cut_points(self.segmenter.as_ref(), &buffer)?;

                    trace!(state = ?SessionState::EmittingSegmentedWords, words = cuts.len() + 1);
                    summary.segmented_chunks += 1;
                    emitter.emit_segmented(chunk, buffer.widths(), &cuts)?;
                }
            }
        }

        summary.words = emitter.emitted();
        summary.rejected = emitter.rejected();
        debug!(
            state = ?SessionState::Done,
            words = summary.words,
            chunks = summary.chunks,
            defects = summary.defects,
            "parse finished"
        );

        match policy {
            ErrorPolicy::Permissive if summary.rejected > 0 => Err(Error::PartiallyRejected {
                rejected: summary.rejected,
                emitted: summary.words,
            }),
            _ => Ok(summary),
        }
    }
}

impl Default for Tokenizer {
    /// Dictionary segmentation with the built-in word list.
    fn default() -> Self {
        Self::new(DictionarySegmenter::default())
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("segmenter", &self.segmenter.name())
            .field("config", &self.config)
            .finish()
    }
}
