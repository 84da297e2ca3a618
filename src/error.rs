//! Error types for name resolution and masking.

use thiserror::Error;

/// Errors raised while resolving a textual name into one of the closed
/// enumerations of this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The name does not denote any [`Category`](crate::classify::Category)
    /// or complement class.
    #[error("Unknown character category: {0}")]
    UnknownCategory(String),

    /// The name does not denote any [`CaseStyle`](crate::case::CaseStyle).
    #[error("Unknown case style: {0}")]
    UnknownCaseStyle(String),

    /// The character is not one of the joining
    /// [`Separator`](crate::separator::Separator)s.
    #[error("Unknown separator: {0:?}")]
    UnknownSeparator(char),
}

/// Errors raised by the fallible masking entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The inclusive range does not satisfy `0 <= start <= end < len`.
    #[error("Invalid mask range {start}..={end} for input of length {len}")]
    InvalidRange {
        /// Requested first masked position.
        start: isize,
        /// Requested last masked position.
        end: isize,
        /// Length of the input in characters.
        len: usize,
    },
}

/// A specialized `Result` type for masking operations.
pub type Result<T> = std::result::Result<T, MaskError>;
