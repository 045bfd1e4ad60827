//! Property-based tests for tokenizing.
//!
//! These tests verify that a parse call maintains key invariants:
//! - Coverage: words cover exactly the non-whitespace bytes of the input
//! - Non-empty: no word is empty or contains whitespace
//! - Ordered: words are in source order and never overlap
//! - Offsets: word bytes are input bytes, in the input encoding

use proptest::prelude::*;
use thaift::{
    classify, is_whitespace, normalize, CollectedWord, CutPoints, DictionarySegmenter, InputSpan,
    ParseMode, Segmenter, SourceEncoding, Tokenizer, TokenizerConfig, UnicodeWordSegmenter,
    WordCollector,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Mixed Thai, Latin and whitespace that TIS-620 can represent.
fn thai_latin_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[\\x{0E01}-\\x{0E3A}\\x{0E3F}-\\x{0E5B}a-zA-Z0-9 \\t\\n.,]{0,120}")
        .unwrap()
}

/// Thai words from a small vocabulary, joined with and without spaces.
fn thai_sentence() -> impl Strategy<Value = String> {
    let vocabulary = [
        "ฉัน", "รัก", "ภาษาไทย", "สวัสดี", "ชาว", "โลก", "กิน", "ข้าว", "hello", "2024",
    ];
    let part = (prop::sample::select(vocabulary.to_vec()), any::<bool>());
    prop::collection::vec(part, 0..16).prop_map(|parts| {
        let mut text = String::new();
        for (word, space) in parts {
            text.push_str(word);
            if space {
                text.push(' ');
            }
        }
        text
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn collect(tokenizer: &Tokenizer, input: InputSpan<'_>) -> Vec<CollectedWord> {
    let mut collector = WordCollector::new();
    tokenizer
        .parse(input, ParseMode::Indexing, &mut collector)
        .unwrap();
    collector.into_words()
}

/// Words cover every non-whitespace byte exactly once and no whitespace byte.
fn words_cover_non_whitespace(words: &[CollectedWord], bytes: &[u8]) -> bool {
    let mut covered = vec![false; bytes.len()];
    for word in words {
        for flag in &mut covered[word.span()] {
            if *flag {
                return false;
            }
            *flag = true;
        }
    }
    bytes
        .iter()
        .zip(&covered)
        .all(|(&b, &c)| c != is_whitespace(b))
}

fn words_are_ordered(words: &[CollectedWord]) -> bool {
    words.windows(2).all(|w| w[0].end <= w[1].start)
}

fn words_match_input(words: &[CollectedWord], bytes: &[u8]) -> bool {
    words
        .iter()
        .all(|w| !w.is_empty() && w.bytes == bytes[w.span()] && w.metadata.position == w.start)
}

// =============================================================================
// Parse Properties
// =============================================================================

proptest! {
    #[test]
    fn utf8_words_cover_input(text in thai_latin_text()) {
        let words = collect(&Tokenizer::default(), InputSpan::from(text.as_str()));
        prop_assert!(words_cover_non_whitespace(&words, text.as_bytes()));
        prop_assert!(words_are_ordered(&words));
        prop_assert!(words_match_input(&words, text.as_bytes()));
    }

    #[test]
    fn arbitrary_bytes_cover_input(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let encodings = [
            SourceEncoding::Utf8,
            SourceEncoding::Tis620,
            SourceEncoding::Latin1,
            SourceEncoding::Other(encoding_rs::SHIFT_JIS),
            SourceEncoding::Other(encoding_rs::BIG5),
        ];
        for encoding in encodings {
            let words = collect(&Tokenizer::default(), InputSpan::new(&bytes, encoding));
            prop_assert!(words_cover_non_whitespace(&words, &bytes));
            prop_assert!(words_are_ordered(&words));
            prop_assert!(words_match_input(&words, &bytes));
        }
    }

    #[test]
    fn words_never_contain_whitespace(text in thai_latin_text()) {
        let words = collect(&Tokenizer::new(UnicodeWordSegmenter), InputSpan::from(text.as_str()));
        for word in &words {
            prop_assert!(!word.bytes.iter().any(|&b| is_whitespace(b)));
        }
    }

    #[test]
    fn alphabetic_chunks_are_single_words(text in thai_latin_text()) {
        let input = InputSpan::from(text.as_str());
        let words = collect(&Tokenizer::default(), input);

        for chunk in input.chunks() {
            if text.as_bytes()[chunk.start].is_ascii_alphabetic() {
                prop_assert!(words.iter().any(|w| w.span() == chunk.span()));
            }
        }
    }

    #[test]
    fn tis620_and_utf8_agree(text in thai_sentence()) {
        let tis = SourceEncoding::Tis620.encode(&text).unwrap();
        let tokenizer = Tokenizer::default();

        let utf8_words = collect(&tokenizer, InputSpan::from(text.as_str()));
        let tis_words = collect(&tokenizer, InputSpan::new(&tis, SourceEncoding::Tis620));
        prop_assert_eq!(utf8_words.len(), tis_words.len());

        let config = TokenizerConfig::new();
        for (utf8, legacy) in utf8_words.iter().zip(&tis_words) {
            let decoded = normalize(&legacy.bytes, SourceEncoding::Tis620, &config).unwrap();
            prop_assert_eq!(Some(decoded.as_str()), utf8.text());
            // One TIS-620 byte per character.
            prop_assert_eq!(legacy.len(), decoded.char_count());
        }
    }

    #[test]
    fn mode_does_not_change_words(text in thai_sentence()) {
        let tokenizer = Tokenizer::default();
        let mut spans = Vec::new();
        for mode in [ParseMode::Indexing, ParseMode::Query, ParseMode::BooleanQuery] {
            let mut collector = WordCollector::new();
            tokenizer.parse(InputSpan::from(text.as_str()), mode, &mut collector).unwrap();
            spans.push(collector.words().iter().map(CollectedWord::span).collect::<Vec<_>>());
        }
        prop_assert_eq!(&spans[0], &spans[1]);
        prop_assert_eq!(&spans[1], &spans[2]);
    }
}

// =============================================================================
// Classifier and Segmenter Properties
// =============================================================================

proptest! {
    #[test]
    fn classify_depends_on_first_byte_only(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        prop_assert_eq!(classify(&bytes), classify(&bytes[..1]));
        prop_assert_eq!(classify(&bytes), classify(&bytes));
    }

    #[test]
    fn segmenters_respect_contract(text in "[^ \\t\\r\\n]{0,60}") {
        let n = text.chars().count();
        let dictionary = DictionarySegmenter::default();
        let segmenters: [&dyn Segmenter; 2] = [&dictionary, &UnicodeWordSegmenter];

        for segmenter in segmenters {
            let mut cuts = Vec::new();
            segmenter.find_boundaries(&text, &mut cuts);
            prop_assert!(CutPoints::new(cuts, n).is_ok(), "{} broke contract", segmenter.name());
        }
    }
}
