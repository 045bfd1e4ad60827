//! Error types for thaift.

use crate::config::ConfigError;
use crate::sink::SinkError;

/// Errors that can end a parse call.
///
/// Encoding defects are not errors: malformed input is replaced and counted
/// (see [`ParseSummary::defects`](crate::ParseSummary::defects)).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A per-chunk buffer could not be reserved.
    #[error("allocation failure: could not reserve {requested} bytes")]
    AllocationFailure {
        /// Bytes requested for the buffer.
        requested: usize,
    },

    /// The boundary-finder returned cut points outside its contract.
    #[error("invalid cut points from segmenter '{segmenter}': {reason}")]
    InvalidCutPoints {
        /// Name of the offending segmenter.
        segmenter: &'static str,
        /// What was wrong with the output.
        reason: String,
    },

    /// The collaborator rejected a word (strict policy).
    #[error("word at {offset}..{} rejected: {source}", .offset + .len)]
    Rejected {
        /// Document offset of the rejected word.
        offset: usize,
        /// Byte length of the rejected word.
        len: usize,
        /// The collaborator's error.
        source: SinkError,
    },

    /// The collaborator rejected one or more words (permissive policy).
    #[error("{rejected} of {} words rejected", .rejected + .emitted)]
    PartiallyRejected {
        /// Words the collaborator refused.
        rejected: usize,
        /// Words the collaborator accepted.
        emitted: usize,
    },

    /// Invalid tokenizer configuration.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Reading a dictionary failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for thaift operations.
pub type Result<T> = std::result::Result<T, Error>;

