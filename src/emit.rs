//! The word emitter: from cut points back to input bytes.
//!
//! Cut points are character indices into the *normalized* text. The input
//! may use a different number of bytes per character, so byte lengths are
//! accumulated from the source widths in the [`CharWidthTable`], never
//! computed as characters × a fixed width:
//!
//! ```text
//! Chunk at offset 40, 10 Thai chars, UTF-8 (3 bytes each), cuts [3, 7]
//!
//! segment  chars   bytes       word
//! 0        0..3    9           (40, 9)
//! 1        3..7    12          (49, 12)
//! 2        7..10   9           (61, 9)
//!
//! Same chunk in TIS-620 (1 byte each): (40, 3), (43, 4), (47, 3)
//! ```

use tracing::warn;

use crate::config::ErrorPolicy;
use crate::encoding::CharWidthTable;
use crate::error::{Error, Result};
use crate::input::{Chunk, InputSpan};
use crate::segment::CutPoints;
use crate::sink::WordSink;
use crate::word::{ParseMode, TokenMetadata, Word};

/// Submits words for one parse call and applies the error policy.
pub(crate) struct Emitter<'a, 's, S: WordSink + ?Sized> {
    input: InputSpan<'a>,
    mode: ParseMode,
    policy: ErrorPolicy,
    sink: &'s mut S,
    emitted: usize,
    rejected: usize,
}

impl<'a, 's, S: WordSink + ?Sized> Emitter<'a, 's, S> {
    pub(crate) fn new(
        input: InputSpan<'a>,
        mode: ParseMode,
        policy: ErrorPolicy,
        sink: &'s mut S,
    ) -> Self {
        Self {
            input,
            mode,
            policy,
            sink,
            emitted: 0,
            rejected: 0,
        }
    }

    /// Words the sink accepted.
    pub(crate) fn emitted(&self) -> usize {
        self.emitted
    }

    /// Words the sink refused (permissive policy only).
    pub(crate) fn rejected(&self) -> usize {
        self.rejected
    }

    /// Emit a whole chunk as one word.
    pub(crate) fn emit_whole(&mut self, chunk: Chunk) -> Result<()> {
        self.submit(chunk.start, chunk.len)
    }

    /// Emit the segments of `chunk` described by `cuts`.
    pub(crate) fn emit_segmented(
        &mut self,
        chunk: Chunk,
        widths: &CharWidthTable,
        cuts: &CutPoints,
    ) -> Result<()> {
        let mut offset = chunk.start;
        for segment in cuts.segments() {
            let len = widths.source_len(segment.start, segment.end);
            // Only possible when a cut splits characters decoded from one
            // source sequence.
            if len == 0 {
                continue;
            }
            self.submit(offset, len)?;
            offset += len;
        }
        debug_assert_eq!(offset, chunk.end(), "segments must tile the chunk");
        Ok(())
    }

    fn submit(&mut self, offset: usize, len: usize) -> Result<()> {
        let word = Word::new(&self.input.bytes()[offset..offset + len], offset);
        let metadata = TokenMetadata::plain_word(offset, self.mode);

        match self.sink.submit_word(word, &metadata) {
            Ok(()) => {
                self.emitted += 1;
                Ok(())
            }
            Err(source) => match self.policy {
                ErrorPolicy::Strict => Err(Error::Rejected {
                    offset,
                    len,
                    source,
                }),
                ErrorPolicy::Permissive => {
                    warn!(offset, len, error = %source, "word rejected, continuing");
                    self.rejected += 1;
                    Ok(())
                }
            },
        }
    }
}
