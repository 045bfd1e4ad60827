//! Cut points and the boundary segmenter adapter.
//!
//! A [`Segmenter`] reports where words end inside a normalized chunk, in
//! character units. The adapter owns the output buffer and checks the result
//! before anything downstream trusts it:
//!
//! ```text
//! Chunk (10 chars):  c0 c1 c2 | c3 c4 c5 c6 | c7 c8 c9
//! Cut points:        [3, 7]
//! Segments:          [0, 3)  [3, 7)  [7, 10)
//! ```
//!
//! `0` and `n` are implicit and never reported.

use crate::encoding::NormalizedBuffer;
use crate::error::{Error, Result};
use crate::Segmenter;

/// Validated internal word boundaries of a chunk.
///
/// Strictly increasing, each in `(0, char_count)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutPoints {
    cuts: Vec<usize>,
    char_count: usize,
}

impl CutPoints {
    /// Validate raw cut points for a chunk of `char_count` characters.
    ///
    /// # Errors
    ///
    /// Returns the reason as a string if a cut is `0`, `>= char_count`, or not
    /// strictly greater than its predecessor.
    ///
    /// ```rust
    /// use thaift::CutPoints;
    ///
    /// let cuts = CutPoints::new(vec![3, 7], 10).unwrap();
    /// assert_eq!(cuts.segments().collect::<Vec<_>>(), vec![0..3, 3..7, 7..10]);
    ///
    /// assert!(CutPoints::new(vec![0], 10).is_err());
    /// assert!(CutPoints::new(vec![5, 5], 10).is_err());
    /// ```
    pub fn new(cuts: Vec<usize>, char_count: usize) -> std::result::Result<Self, String> {
        let mut prev = 0;
        for &cut in &cuts {
            if cut <= prev {
                return Err(format!("cut {cut} does not follow {prev}"));
            }
            if cut >= char_count {
                return Err(format!("cut {cut} outside chunk of {char_count} chars"));
            }
            prev = cut;
        }
        Ok(Self { cuts, char_count })
    }

    /// The cut indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.cuts
    }

    /// Number of cuts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Whether there are no internal boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Characters in the chunk.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Character ranges of the segments, in order.
    ///
    /// Always yields `len() + 1` ranges when the chunk is non-empty.
    pub fn segments(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        let starts = std::iter::once(0).chain(self.cuts.iter().copied());
        let ends = self
            .cuts
            .iter()
            .copied()
            .chain(std::iter::once(self.char_count));
        starts
            .zip(ends)
            .map(|(start, end)| start..end)
            .filter(|range| !range.is_empty())
    }
}

/// Run `segmenter` over `buffer` and validate its output.
///
/// The output vector is reserved for one cut per character before the
/// segmenter runs.
///
/// # Errors
///
/// [`Error::AllocationFailure`] if the output cannot be reserved, and
/// [`Error::InvalidCutPoints`] if the segmenter breaks its contract.
pub fn find_cut_points(segmenter: &dyn Segmenter, buffer: &NormalizedBuffer) -> Result<CutPoints> {
    let n = buffer.char_count();
    let mut cuts = Vec::new();
    cuts.try_reserve_exact(n).map_err(|_| Error::AllocationFailure {
        requested: n * std::mem::size_of::<usize>(),
    })?;

    segmenter.find_boundaries(buffer.as_str(), &mut cuts);

    CutPoints::new(cuts, n).map_err(|reason| Error::InvalidCutPoints {
        segmenter: segmenter.name(),
        reason,
    })
}
