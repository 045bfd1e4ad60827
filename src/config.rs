//! Tokenizer configuration.
//!
//! ## Error Policy
//!
//! The indexing collaborator can refuse a word. Two behaviours are supported:
//!
//! ```text
//! Input: "aaa bbb ccc", collaborator rejects "bbb"
//!
//! Strict:     submit aaa, submit bbb -> Err(Rejected)     (ccc never sent)
//! Permissive: submit aaa, submit bbb, submit ccc -> Err(PartiallyRejected)
//! ```
//!
//! Permissive matches older full-text parser plugins, which summed the status
//! codes of every submission and kept going. Strict is the default: a failed
//! parse call should not leave a half-indexed document behind without anyone
//! noticing.
//!
//! ## Buffer Limit
//!
//! Each ambiguous chunk is re-encoded into a buffer reserved for the worst
//! case (`chunk_len × 4` bytes). `buffer_limit` caps that reservation; a chunk
//! whose worst case exceeds it fails the parse with `AllocationFailure`.

use crate::error::{Error, Result};

/// How collaborator rejections propagate out of a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the parse call on the first rejected word.
    #[default]
    Strict,
    /// Keep submitting words; fail at the end if any were rejected.
    Permissive,
}

/// Configuration for a [`Tokenizer`](crate::Tokenizer).
///
/// # Examples
///
/// ```rust
/// use thaift::{ErrorPolicy, TokenizerConfig};
///
/// let config = TokenizerConfig::new()
///     .with_error_policy(ErrorPolicy::Permissive)
///     .with_buffer_limit(1 << 20)
///     .unwrap();
///
/// assert_eq!(config.error_policy(), ErrorPolicy::Permissive);
/// assert_eq!(config.buffer_limit(), Some(1 << 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerConfig {
    error_policy: ErrorPolicy,
    buffer_limit: Option<usize>,
}

impl TokenizerConfig {
    /// Default configuration: strict policy, no buffer limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            error_policy: ErrorPolicy::Strict,
            buffer_limit: None,
        }
    }

    /// The collaborator error policy.
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Upper bound in bytes for a single per-chunk buffer, if any.
    #[must_use]
    pub const fn buffer_limit(&self) -> Option<usize> {
        self.buffer_limit
    }

    /// Set the collaborator error policy.
    #[must_use]
    pub const fn with_error_policy(self, error_policy: ErrorPolicy) -> Self {
        Self {
            error_policy,
            ..self
        }
    }

    /// Cap the size of any single per-chunk buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit == 0`.
    pub fn with_buffer_limit(self, limit: usize) -> std::result::Result<Self, ConfigError> {
        if limit == 0 {
            Err(ConfigError::ZeroBufferLimit)
        } else {
            Ok(Self {
                buffer_limit: Some(limit),
                ..self
            })
        }
    }

    /// Check a worst-case reservation of `bytes` against the limit.
    pub(crate) fn check_reservation(&self, bytes: usize) -> Result<()> {
        match self.buffer_limit {
            Some(limit) if bytes > limit => Err(Error::AllocationFailure { requested: bytes }),
            _ => Ok(()),
        }
    }
}

/// Error when configuring a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A buffer limit of zero would reject every ambiguous chunk.
    #[error("buffer limit must be > 0")]
    ZeroBufferLimit,
}
