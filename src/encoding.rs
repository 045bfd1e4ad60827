//! Source encodings and the encoding normalizer.
//!
//! Boundary-finders work on Unicode text, but the input arrives in whatever
//! encoding the host declared. Each ambiguous chunk is decoded into a UTF-8
//! [`NormalizedBuffer`] together with a [`CharWidthTable`] that remembers, per
//! character, how many bytes it took in the source and in the buffer:
//!
//! ```text
//! TIS-620 source:  B5 E9 B9      (3 bytes)
//! Normalized:      "ต้น"          (9 bytes)
//! Widths:          ต  source 1, normalized 3
//!                  ้  source 1, normalized 3
//!                  น  source 1, normalized 3
//! ```
//!
//! Cut points come back in character units; the width table is what turns
//! them into byte ranges of the original input.
//!
//! ## Malformed Input
//!
//! Bytes that do not decode are replaced by U+FFFD and recorded as a
//! [`Defect`]. The replacement keeps the full source width of the bad
//! sequence, so offsets stay exact and nothing is dropped.
//!
//! ## Legacy Encodings
//!
//! UTF-8 and ISO-8859-1 are decoded directly. Everything else, TIS-620
//! included, goes through an `encoding_rs` decoder that is fed one byte at a
//! time: whatever characters come out of a call are charged with the bytes
//! consumed since the previous character.

use encoding_rs::{DecoderResult, Encoding, WINDOWS_874};

use crate::config::TokenizerConfig;
use crate::error::{Error, Result};

/// Largest UTF-8 encoding of one character.
pub const NORMALIZED_MAX_CHAR_WIDTH: usize = 4;

/// Encoding of the bytes handed to a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// TIS-620, the Thai national single-byte character set. Decoded as
    /// windows-874, its superset.
    Tis620,
    /// ISO-8859-1.
    Latin1,
    /// Any other encoding `encoding_rs` knows.
    Other(&'static Encoding),
}

impl SourceEncoding {
    /// Look up an encoding by its WHATWG label, as a host would declare it.
    ///
    /// ```rust
    /// use thaift::SourceEncoding;
    ///
    /// assert_eq!(SourceEncoding::for_label(b"tis-620"), Some(SourceEncoding::Tis620));
    /// assert_eq!(SourceEncoding::for_label(b"utf8"), Some(SourceEncoding::Utf8));
    /// assert_eq!(
    ///     SourceEncoding::for_label(b"shift_jis"),
    ///     Some(SourceEncoding::Other(encoding_rs::SHIFT_JIS))
    /// );
    /// assert_eq!(SourceEncoding::for_label(b"no-such-charset"), None);
    /// ```
    #[must_use]
    pub fn for_label(label: &[u8]) -> Option<Self> {
        Encoding::for_label(label).map(|encoding| {
            if encoding == encoding_rs::UTF_8 {
                Self::Utf8
            } else if encoding == WINDOWS_874 {
                Self::Tis620
            } else {
                Self::Other(encoding)
            }
        })
    }

    /// Conventional name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Tis620 => "tis-620",
            Self::Latin1 => "iso-8859-1",
            Self::Other(encoding) => encoding.name(),
        }
    }

    /// Encode `text` into this encoding.
    ///
    /// Returns `None` if a character has no representation.
    ///
    /// ```rust
    /// use thaift::SourceEncoding;
    ///
    /// assert_eq!(SourceEncoding::Tis620.encode("กa"), Some(vec![0xA1, b'a']));
    /// assert_eq!(SourceEncoding::Latin1.encode("ก"), None);
    /// ```
    #[must_use]
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            Self::Utf8 => Some(text.as_bytes().to_vec()),
            Self::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
            Self::Tis620 => encode_with(WINDOWS_874, text),
            Self::Other(encoding) => encode_with(encoding, text),
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn encode_with(encoding: &'static Encoding, text: &str) -> Option<Vec<u8>> {
    let (bytes, used, unmappable) = encoding.encode(text);
    (!unmappable && used == encoding).then(|| bytes.into_owned())
}

/// Byte widths of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharWidth {
    /// Bytes in the source encoding. Zero for the second and later
    /// characters of a sequence that decodes to several.
    pub source: usize,
    /// Bytes in the normalized buffer.
    pub normalized: u8,
}

/// Per-character byte widths, indexed by character position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharWidthTable {
    widths: Vec<CharWidth>,
}

impl CharWidthTable {
    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Widths of character `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CharWidth> {
        self.widths.get(index).copied()
    }

    /// Iterate over all widths in order.
    pub fn iter(&self) -> impl Iterator<Item = CharWidth> + '_ {
        self.widths.iter().copied()
    }

    /// Source bytes spanned by characters `from..to`.
    #[must_use]
    pub fn source_len(&self, from: usize, to: usize) -> usize {
        self.widths[from..to]
            .iter()
            .map(|w| w.source)
            .sum()
    }
}

/// A malformed byte sequence, relative to the start of its chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defect {
    /// Offset of the first bad byte.
    pub offset: usize,
    /// Number of bytes replaced.
    pub len: usize,
}

/// A chunk decoded to UTF-8, with widths for mapping back.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBuffer {
    text: String,
    widths: CharWidthTable,
    defects: Vec<Defect>,
}

impl NormalizedBuffer {
    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.widths.len()
    }

    /// Per-character widths.
    #[must_use]
    pub fn widths(&self) -> &CharWidthTable {
        &self.widths
    }

    /// Malformed sequences replaced during decoding.
    #[must_use]
    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    fn push(&mut self, ch: char, source: usize) {
        self.text.push(ch);
        self.widths.widths.push(CharWidth {
            source,
            normalized: ch.len_utf8() as u8,
        });
    }

    fn push_defect(&mut self, offset: usize, len: usize) {
        self.defects.push(Defect { offset, len });
        self.push(char::REPLACEMENT_CHARACTER, len);
    }
}

/// Decode `bytes` from `encoding` into a fresh [`NormalizedBuffer`].
///
/// The text buffer is reserved for the worst case, `bytes.len()` ×
/// [`NORMALIZED_MAX_CHAR_WIDTH`], before decoding starts.
///
/// # Errors
///
/// [`Error::AllocationFailure`] if the worst-case reservation exceeds the
/// configured buffer limit or cannot be satisfied.
///
/// # Examples
///
/// ```rust
/// use thaift::{normalize, SourceEncoding, TokenizerConfig};
///
/// let buffer = normalize(&[0xA1, 0xD2], SourceEncoding::Tis620, &TokenizerConfig::default()).unwrap();
/// assert_eq!(buffer.as_str(), "กา");
/// assert_eq!(buffer.char_count(), 2);
/// assert_eq!(buffer.widths().source_len(0, 2), 2);
/// ```
pub fn normalize(
    bytes: &[u8],
    encoding: SourceEncoding,
    config: &TokenizerConfig,
) -> Result<NormalizedBuffer> {
    let requested = bytes
        .len()
        .checked_mul(NORMALIZED_MAX_CHAR_WIDTH)
        .ok_or(Error::AllocationFailure {
            requested: usize::MAX,
        })?;
    config.check_reservation(requested)?;

    let mut buffer = NormalizedBuffer::default();
    buffer
        .text
        .try_reserve_exact(requested)
        .map_err(|_| Error::AllocationFailure { requested })?;
    // One entry per character, at most one character per byte.
    buffer
        .widths
        .widths
        .try_reserve_exact(bytes.len())
        .map_err(|_| Error::AllocationFailure {
            requested: bytes.len() * std::mem::size_of::<CharWidth>(),
        })?;

    match encoding {
        SourceEncoding::Utf8 => {
            let mut offset = 0;
            for part in bytes.utf8_chunks() {
                for ch in part.valid().chars() {
                    buffer.push(ch, ch.len_utf8());
                }
                offset += part.valid().len();

                let invalid = part.invalid();
                if !invalid.is_empty() {
                    buffer.push_defect(offset, invalid.len());
                    offset += invalid.len();
                }
            }
        }
        SourceEncoding::Latin1 => {
            for &b in bytes {
                buffer.push(char::from(b), 1);
            }
        }
        SourceEncoding::Tis620 => decode_with(WINDOWS_874, bytes, &mut buffer)?,
        SourceEncoding::Other(encoding) => decode_with(encoding, bytes, &mut buffer)?,
    }

    Ok(buffer)
}

fn decode_with(
    encoding: &'static Encoding,
    bytes: &[u8],
    buffer: &mut NormalizedBuffer,
) -> Result<()> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut pos = 0;
    // Source bytes consumed since the last character was recorded.
    let mut pending = 0;

    loop {
        let last = pos == bytes.len();
        let input = if last { &[][..] } else { &bytes[pos..=pos] };
        let before = buffer.text.len();
        let (result, read) =
            decoder.decode_to_string_without_replacement(input, &mut buffer.text, last);
        pos += read;
        pending += read;

        for ch in buffer.text[before..].chars() {
            buffer.widths.widths.push(CharWidth {
                source: std::mem::take(&mut pending),
                normalized: ch.len_utf8() as u8,
            });
        }

        match result {
            DecoderResult::InputEmpty if last => break,
            DecoderResult::InputEmpty => {}
            DecoderResult::Malformed(..) => {
                buffer.push_defect(pos - pending, pending);
                pending = 0;
            }
            DecoderResult::OutputFull => {
                let needed = decoder
                    .max_utf8_buffer_length_without_replacement(input.len())
                    .ok_or(Error::AllocationFailure {
                        requested: usize::MAX,
                    })?;
                buffer
                    .text
                    .try_reserve(needed)
                    .map_err(|_| Error::AllocationFailure { requested: needed })?;
            }
        }
    }

    if pending > 0 {
        buffer.push_defect(bytes.len() - pending, pending);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(bytes: &[u8], encoding: SourceEncoding) -> NormalizedBuffer {
        normalize(bytes, encoding, &TokenizerConfig::default()).unwrap()
    }

    #[test]
    fn test_utf8_widths() {
        let text = "aé€😀";
        let buffer = norm(text.as_bytes(), SourceEncoding::Utf8);

        assert_eq!(buffer.as_str(), text);
        let sources: Vec<usize> = buffer.widths().iter().map(|w| w.source).collect();
        assert_eq!(sources, vec![1, 2, 3, 4]);
        assert!(buffer.defects().is_empty());
    }

    #[test]
    fn test_tis620_widths() {
        let bytes = SourceEncoding::Tis620.encode("ต้นไม้").unwrap();
        assert_eq!(bytes.len(), 6);

        let buffer = norm(&bytes, SourceEncoding::Tis620);
        assert_eq!(buffer.as_str(), "ต้นไม้");
        assert_eq!(buffer.char_count(), 6);
        assert_eq!(buffer.widths().source_len(0, 6), 6);
        assert!(buffer.widths().iter().all(|w| w.normalized == 3));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = b"ab\xFFcd";
        let buffer = norm(bytes, SourceEncoding::Utf8);

        assert_eq!(buffer.as_str(), "ab\u{FFFD}cd");
        assert_eq!(buffer.defects(), &[Defect { offset: 2, len: 1 }]);
        assert_eq!(buffer.widths().source_len(0, buffer.char_count()), bytes.len());
    }

    #[test]
    fn test_truncated_utf8_keeps_width() {
        // First two bytes of a three-byte Thai character.
        let bytes = b"\xE0\xB8";
        let buffer = norm(bytes, SourceEncoding::Utf8);

        assert_eq!(buffer.char_count(), 1);
        assert_eq!(buffer.defects(), &[Defect { offset: 0, len: 2 }]);
        assert_eq!(buffer.widths().source_len(0, 1), 2);
    }

    #[test]
    fn test_tis620_undefined_byte() {
        let buffer = norm(&[0xA1, 0xDB, 0xA1], SourceEncoding::Tis620);
        assert_eq!(buffer.as_str(), "ก\u{FFFD}ก");
        assert_eq!(buffer.defects(), &[Defect { offset: 1, len: 1 }]);
    }

    #[test]
    fn test_latin1_never_fails() {
        let bytes: Vec<u8> = (0..=255).collect();
        let buffer = norm(&bytes, SourceEncoding::Latin1);
        assert_eq!(buffer.char_count(), 256);
        assert!(buffer.defects().is_empty());
    }

    #[test]
    fn test_windows_874_extensions_decode() {
        // Ellipsis and no-break space are outside TIS-620 proper.
        let buffer = norm(&[0xA1, 0x85, 0xA0, 0xA1], SourceEncoding::Tis620);
        assert_eq!(buffer.as_str(), "ก\u{2026}\u{A0}ก");
        assert!(buffer.defects().is_empty());
        assert_eq!(buffer.widths().source_len(0, 4), 4);
    }

    #[test]
    fn test_multibyte_legacy_widths() {
        let encoding = SourceEncoding::Other(encoding_rs::SHIFT_JIS);
        let bytes = encoding.encode("日本a").unwrap();
        assert_eq!(bytes.len(), 5);

        let buffer = norm(&bytes, encoding);
        assert_eq!(buffer.as_str(), "日本a");
        let sources: Vec<usize> = buffer.widths().iter().map(|w| w.source).collect();
        assert_eq!(sources, vec![2, 2, 1]);
    }

    #[test]
    fn test_truncated_legacy_sequence() {
        let encoding = SourceEncoding::Other(encoding_rs::SHIFT_JIS);
        // Lead byte of a two-byte character with nothing after it.
        let buffer = norm(&[b'a', 0x93], encoding);

        assert_eq!(buffer.as_str(), "a\u{FFFD}");
        assert_eq!(buffer.defects(), &[Defect { offset: 1, len: 1 }]);
        assert_eq!(buffer.widths().source_len(0, buffer.char_count()), 2);
    }

    #[test]
    fn test_legacy_widths_always_cover_input() {
        let bytes: Vec<u8> = (0..=255).rev().collect();
        for encoding in [encoding_rs::SHIFT_JIS, encoding_rs::EUC_KR, encoding_rs::BIG5] {
            let buffer = norm(&bytes, SourceEncoding::Other(encoding));
            assert_eq!(
                buffer.widths().source_len(0, buffer.char_count()),
                bytes.len(),
                "{}",
                encoding.name()
            );
        }
    }

    #[test]
    fn test_for_label() {
        assert_eq!(SourceEncoding::for_label(b"TIS-620"), Some(SourceEncoding::Tis620));
        assert_eq!(SourceEncoding::for_label(b"windows-874"), Some(SourceEncoding::Tis620));
        assert_eq!(SourceEncoding::for_label(b"utf-8"), Some(SourceEncoding::Utf8));
        assert_eq!(
            SourceEncoding::for_label(b"euc-kr"),
            Some(SourceEncoding::Other(encoding_rs::EUC_KR))
        );
        assert_eq!(SourceEncoding::for_label(b"bogus"), None);
    }

    #[test]
    fn test_buffer_limit() {
        let config = TokenizerConfig::new().with_buffer_limit(16).unwrap();
        assert!(normalize(b"abcd", SourceEncoding::Utf8, &config).is_ok());

        let result = normalize(b"abcde", SourceEncoding::Utf8, &config);
        assert!(matches!(
            result,
            Err(Error::AllocationFailure { requested: 20 })
        ));
    }

    #[test]
    fn test_tis620_round_trip_of_thai_block() {
        let text: String = ('\u{0E01}'..='\u{0E3A}').chain('\u{0E3F}'..='\u{0E5B}').collect();
        let bytes = SourceEncoding::Tis620.encode(&text).unwrap();
        assert_eq!(norm(&bytes, SourceEncoding::Tis620).as_str(), text);
    }

    #[test]
    fn test_names() {
        assert_eq!(SourceEncoding::Tis620.to_string(), "tis-620");
        assert_eq!(SourceEncoding::Other(encoding_rs::SHIFT_JIS).to_string(), "Shift_JIS");
    }
}
