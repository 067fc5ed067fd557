//! Error type shared by the generator, the permutation helpers and the
//! configuration loader.

use thiserror::Error;

/// Errors raised by `pseudo_random`.
///
/// Every operation validates its arguments before touching generator state,
/// so an `Err` always means the seed and digit setting are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PseudoRandomError {
    #[error("{name}: {reason}")]
    /// An argument was outside its documented domain.
    InvalidArgument {
        /// Name of the offending argument (`seed`, `digits`, `min`, ...).
        name: &'static str,
        /// Human readable constraint that was violated.
        reason: String,
    },
    #[error("io error: {0}")]
    /// Underlying filesystem failure while loading configuration.
    Io(String),
    #[error("decode error: {0}")]
    /// Configuration text could not be parsed.
    Decode(String),
}

impl PseudoRandomError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PseudoRandomError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Error for a value that should have been an array-like sequence.
    pub(crate) fn not_array() -> Self {
        Self::invalid("array", "not array")
    }

    /// Returns `true` when an argument failed validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PseudoRandomError::InvalidArgument { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PseudoRandomError>;
