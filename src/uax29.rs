//! Segmentation on Unicode word boundaries (UAX #29).
//!
//! UAX #29 has no dictionary, so scripts written without spaces are cut at
//! nearly every character. This segmenter is a dictionary-free fallback and a
//! reference for plugging other Unicode segmentation libraries into the
//! pipeline.

use unicode_segmentation::UnicodeSegmentation;

use crate::Segmenter;

/// Cuts at every UAX #29 word boundary.
///
/// ```rust
/// use thaift::{Segmenter, UnicodeWordSegmenter};
///
/// let mut cuts = Vec::new();
/// UnicodeWordSegmenter.find_boundaries("ab,cd", &mut cuts);
/// assert_eq!(cuts, vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn find_boundaries(&self, text: &str, cuts: &mut Vec<usize>) {
        let mut chars = 0;
        for word in text.split_word_bounds() {
            if chars > 0 {
                cuts.push(chars);
            }
            chars += word.chars().count();
        }
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
