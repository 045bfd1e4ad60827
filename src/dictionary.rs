//! Dictionary-based segmentation for Thai.
//!
//! Thai is written without spaces between words. Finding the boundaries
//! needs a word list and a search over the ways a run of text can be covered
//! by it.
//!
//! ## Units
//!
//! The segmenter never cuts inside a grapheme cluster (a consonant and its
//! stacked vowel and tone marks), and applies two orthographic rules on top:
//!
//! ```text
//! เ แ โ ใ ไ      leading vowels: never the last character of a word
//! ะ า ำ ๅ        following vowels: never the first character of a word
//!
//! "โลก" -> units [โล][ก]      (not [โ][ล][ก])
//! "ชาว" -> units [ชา][ว]      (not [ช][า][ว])
//! ```
//!
//! ## Maximal Matching
//!
//! Within a run of Thai units, every way of covering the run with dictionary
//! words and single unknown units is scored as
//! `(units not covered by a word, number of words)` and the lowest score wins.
//! Ties go to the first split found scanning left to right.
//!
//! ```text
//! "สวัสดีชาวโลก"
//!   สวัสดี | ชาว | โลก       score (0, 3)   <- chosen
//!   สวัสดี | ชา | ว | โลก    score (1, 4)
//! ```
//!
//! Adjacent unknown units are merged into one word, so unfamiliar names stay
//! together instead of shattering into single letters.
//!
//! Non-Thai runs (digits, Latin, punctuation) are never split, and every
//! change between Thai and non-Thai is a boundary. The vowel rules only
//! join Thai to Thai: `"เ1"` is two units.

use std::collections::HashSet;
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::classify::{is_following_vowel, is_leading_vowel, is_thai};
use crate::error::Result;
use crate::Segmenter;

const BUILTIN_WORDS: &str = include_str!("../data/thai_words.txt");

/// An immutable set of words.
///
/// # Examples
///
/// ```rust
/// use thaift::Dictionary;
///
/// let dict = Dictionary::parse("# greetings\nสวัสดี\n\nโลก\n");
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains("โลก"));
/// assert_eq!(dict.max_word_chars(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    max_word_chars: usize,
}

impl Dictionary {
    /// The word list compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS)
    }

    /// Parse a word list: one word per line, `#` starts a comment line,
    /// surrounding whitespace and blank lines are ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Load a word list from a UTF-8 file, in the format of [`Dictionary::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read or is
    /// not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Whether `word` is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in characters of the longest word.
    #[must_use]
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            self.max_word_chars = self.max_word_chars.max(word.chars().count());
            self.words.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Self::default();
        dict.extend(iter);
        dict
    }
}

/// Maximal-matching segmenter over a [`Dictionary`].
///
/// # Examples
///
/// ```rust
/// use thaift::{Dictionary, DictionarySegmenter, Segmenter};
///
/// let segmenter = DictionarySegmenter::new(Dictionary::from_iter(["สวัสดี", "ชาว", "โลก"]));
/// let mut cuts = Vec::new();
/// segmenter.find_boundaries("สวัสดีชาวโลก", &mut cuts);
/// assert_eq!(cuts, vec![6, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct DictionarySegmenter {
    dictionary: Dictionary,
}

impl DictionarySegmenter {
    /// Create a segmenter over `dictionary`.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// The word list in use.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Push the internal cuts of one Thai run.
    ///
    /// `bounds` holds the character index of every unit start in the run,
    /// followed by the run end; `offsets` maps character index to byte offset.
    fn segment_run(
        &self,
        text: &str,
        offsets: &[usize],
        bounds: &[usize],
        cuts: &mut Vec<usize>,
    ) {
        let m = bounds.len() - 1;
        let max_chars = self.dictionary.max_word_chars();

        // best[j]: lowest (unknown units, words) covering units 0..j.
        let mut best = vec![(usize::MAX, usize::MAX); m + 1];
        // back[j]: (start unit of the last word, whether it is a dictionary word)
        let mut back = vec![(0, false); m + 1];
        best[0] = (0, 0);

        for i in 0..m {
            let (unknown, words) = best[i];

            for j in i + 1..=m {
                if bounds[j] - bounds[i] > max_chars {
                    break;
                }
                let candidate = &text[offsets[bounds[i]]..offsets[bounds[j]]];
                if self.dictionary.contains(candidate) && (unknown, words + 1) < best[j] {
                    best[j] = (unknown, words + 1);
                    back[j] = (i, true);
                }
            }

            if (unknown + 1, words + 1) < best[i + 1] {
                best[i + 1] = (unknown + 1, words + 1);
                back[i + 1] = (i, false);
            }
        }

        let mut pieces = Vec::new();
        let mut j = m;
        while j > 0 {
            let (i, known) = back[j];
            pieces.push((i, known));
            j = i;
        }
        pieces.reverse();

        let mut prev_known = true;
        for (n, &(start, known)) in pieces.iter().enumerate() {
            let merge = !known && !prev_known;
            if n > 0 && !merge {
                cuts.push(bounds[start]);
            }
            prev_known = known;
        }
    }
}

impl Default for DictionarySegmenter {
    fn default() -> Self {
        Self::new(Dictionary::builtin())
    }
}

impl Segmenter for DictionarySegmenter {
    fn find_boundaries(&self, text: &str, cuts: &mut Vec<usize>) {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        if n == 0 {
            return;
        }

        let mut offsets: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        offsets.push(text.len());

        // Character indices where a word may start.
        let mut allowed = vec![false; n];
        let mut k = 0;
        for grapheme in text.graphemes(true) {
            allowed[k] = true;
            k += grapheme.chars().count();
        }
        for k in 1..n {
            let (prev, next) = (chars[k - 1], chars[k]);
            if !is_thai(prev) || !is_thai(next) {
                continue;
            }
            if is_leading_vowel(prev) || is_following_vowel(next) {
                allowed[k] = false;
            }
        }

        let units: Vec<usize> = (0..n).filter(|&k| allowed[k]).collect();

        let mut run_start = 0;
        while run_start < units.len() {
            let thai = is_thai(chars[units[run_start]]);
            let mut run_end = run_start + 1;
            while run_end < units.len() && is_thai(chars[units[run_end]]) == thai {
                run_end += 1;
            }

            if run_start > 0 {
                cuts.push(units[run_start]);
            }
            if thai {
                let end = units.get(run_end).copied().unwrap_or(n);
                let mut bounds = units[run_start..run_end].to_vec();
                bounds.push(end);
                self.segment_run(text, &offsets, &bounds, cuts);
            }

            run_start = run_end;
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuts(segmenter: &DictionarySegmenter, text: &str) -> Vec<usize> {
        let mut out = Vec::new();
        segmenter.find_boundaries(text, &mut out);
        out
    }

    fn words<'a>(text: &'a str, cuts: &[usize]) -> Vec<&'a str> {
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        let mut bounds = vec![0];
        bounds.extend_from_slice(cuts);
        bounds.push(offsets.len() - 1);
        bounds
            .windows(2)
            .map(|w| &text[offsets[w[0]]..offsets[w[1]]])
            .collect()
    }

    fn small() -> DictionarySegmenter {
        DictionarySegmenter::new(Dictionary::from_iter([
            "สวัสดี", "ชาว", "ชา", "โลก", "กิน", "ข้าว", "ภาษา", "ไทย",
        ]))
    }

    #[test]
    fn test_basic_split() {
        let text = "สวัสดีชาวโลก";
        assert_eq!(words(text, &cuts(&small(), text)), vec!["สวัสดี", "ชาว", "โลก"]);
    }

    #[test]
    fn test_leading_vowel_before_digit() {
        let text = "ไทยเ1";
        let found = cuts(&small(), text);
        assert_eq!(found, vec![3, 4]);
        assert_eq!(words(text, &found), vec!["ไทย", "เ", "1"]);
    }

    #[test]
    fn test_following_vowel_after_latin() {
        assert_eq!(cuts(&small(), "xาไทย"), vec![1, 2]);
    }

    #[test]
    fn test_cuts_in_characters() {
        assert_eq!(cuts(&small(), "กินข้าว"), vec![3]);
    }

    #[test]
    fn test_fewest_words_wins() {
        let seg = DictionarySegmenter::new(Dictionary::from_iter(["ภาษา", "ไทย", "ภาษาไทย"]));
        assert!(cuts(&seg, "ภาษาไทย").is_empty());
    }

    #[test]
    fn test_unknown_units_merge() {
        let text = "สวัสดีกขค";
        assert_eq!(words(text, &cuts(&small(), text)), vec!["สวัสดี", "กขค"]);
    }

    #[test]
    fn test_no_cut_inside_cluster() {
        // Nothing known: the run stays one unknown word.
        let seg = DictionarySegmenter::new(Dictionary::default());
        assert!(cuts(&seg, "ต้น").is_empty());
    }

    #[test]
    fn test_leading_vowel_stays_with_consonant() {
        let seg = DictionarySegmenter::new(Dictionary::from_iter(["โลก", "ไทย"]));
        let text = "ไทยโลก";
        assert_eq!(words(text, &cuts(&seg, text)), vec!["ไทย", "โลก"]);
    }

    #[test]
    fn test_script_transitions() {
        let text = "ไทย123ภาษา";
        assert_eq!(words(text, &cuts(&small(), text)), vec!["ไทย", "123", "ภาษา"]);
    }

    #[test]
    fn test_non_thai_not_split() {
        assert!(cuts(&small(), "12,345.67").is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(cuts(&small(), "").is_empty());
    }

    #[test]
    fn test_builtin_dictionary() {
        let seg = DictionarySegmenter::default();
        assert!(seg.dictionary().contains("สวัสดี"));
        assert!(!seg.dictionary().contains("# Pronouns and people"));

        let text = "ฉันรักภาษาไทย";
        assert_eq!(words(text, &cuts(&seg, text)), vec!["ฉัน", "รัก", "ภาษาไทย"]);
    }

    #[test]
    fn test_extend_ignores_empty_words() {
        let mut dict = Dictionary::default();
        dict.extend(["", "ก"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.max_word_chars(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load("/nonexistent/thaift/words.txt");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
