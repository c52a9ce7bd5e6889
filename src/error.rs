//! Error types for sequence operations.
//!
//! Engine-level failures are reported through [`SequenceError`]. Failures
//! raised inside caller-supplied functions are never wrapped: the `try_*`
//! operations return the caller's own error type unchanged, and only require
//! `E: From<SequenceError>` when the operation itself can also fail (for
//! example [`Sequence::try_tabulate`](crate::Sequence::try_tabulate) with a
//! negative length).

use thiserror::Error;

/// Errors raised by the sequence engine itself.
///
/// Index and length values are carried as `i128` so that the original
/// argument, signed or unsigned, is reported exactly as the caller passed it.
///
/// # Examples
///
/// ```rust
/// use parseq::{Sequence, SequenceError};
///
/// let sequence = Sequence::from(vec![0, 1, 2]);
/// assert_eq!(
///     sequence.nth(5),
///     Err(SequenceError::Range { index: 5, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SequenceError {
    /// An index argument was outside `0..length`.
    #[error("index {index} out of range for sequence of length {length}")]
    Range {
        /// The index as passed by the caller.
        index: i128,
        /// Length of the sequence that was indexed.
        length: usize,
    },

    /// A construction argument was outside the operation's domain.
    #[error("invalid sequence length {length}: length must be non-negative")]
    Domain {
        /// The length as passed by the caller.
        length: i128,
    },
}

impl SequenceError {
    /// Returns `true` for [`SequenceError::Range`].
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Returns `true` for [`SequenceError::Domain`].
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
