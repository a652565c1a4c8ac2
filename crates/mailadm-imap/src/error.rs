//! Error types for response line decoding.

use thiserror::Error;

/// Errors that can occur while decoding a response line.
///
/// Every variant describes a syntax problem in the input line itself. None of
/// them are retryable; a line that fails to decode should be treated as a
/// protocol violation by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A quoted string was opened but never closed.
    #[error("Unterminated quoted string starting at position {position}")]
    UnterminatedQuotedString {
        /// Byte position of the opening quote.
        position: usize,
    },

    /// A `(` was never matched by a closing `)`.
    #[error("Unterminated list starting at position {position}")]
    UnterminatedList {
        /// Byte position of the opening parenthesis.
        position: usize,
    },

    /// A literal header `{n}` was malformed.
    #[error("Invalid literal header at position {position}: {reason}")]
    InvalidLiteralHeader {
        /// Byte position where the header scan stopped.
        position: usize,
        /// Description of what went wrong.
        reason: &'static str,
    },

    /// Fewer payload bytes follow a literal header than it announced.
    #[error(
        "Truncated literal at position {position}: expected {expected} bytes, {available} available"
    )]
    TruncatedLiteral {
        /// Byte position where the payload starts.
        position: usize,
        /// Byte count announced by the header.
        expected: usize,
        /// Byte count actually present in the line.
        available: usize,
    },

    /// Decoded token bytes are not valid UTF-8.
    #[error("Invalid UTF-8 in token at position {position}")]
    InvalidUtf8 {
        /// Byte position where the token starts.
        position: usize,
    },

    /// Lists are nested deeper than the configured limit.
    #[error("List at position {position} nested deeper than {max}")]
    NestingTooDeep {
        /// Byte position of the opening parenthesis past the limit.
        position: usize,
        /// Configured maximum depth.
        max: usize,
    },

    /// A structural character appeared where no token may start.
    #[error("Unexpected {found:?} at position {position}")]
    UnexpectedDelimiter {
        /// Byte position of the delimiter.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The line exceeds the configured maximum length.
    #[error("Line of {length} bytes exceeds maximum of {max}")]
    LineTooLong {
        /// Length of the rejected line.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl Error {
    /// Returns the byte position where scanning stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match *self {
            Self::UnterminatedQuotedString { position }
            | Self::UnterminatedList { position }
            | Self::InvalidLiteralHeader { position, .. }
            | Self::TruncatedLiteral { position, .. }
            | Self::InvalidUtf8 { position }
            | Self::NestingTooDeep { position, .. }
            | Self::UnexpectedDelimiter { position, .. } => position,
            Self::LineTooLong { .. } => 0,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
