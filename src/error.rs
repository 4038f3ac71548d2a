//! Error types for phoneword generation and translation.

use thiserror::Error;

/// Errors that can occur while validating, generating, or translating
/// phonewords.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhonewordError {
    /// A character outside the allowed alphabet was found.
    ///
    /// The allowed alphabet depends on the entry point: digits and
    /// separators for raw numbers, digits/uppercase letters/spacers for
    /// marked tokens.
    #[error("Invalid character '{found}' in {context}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Where it was found ("number", "template", "marked token", ...).
        context: &'static str,
    },

    /// A template or number has a malformed shape.
    ///
    /// Covers doubled, leading, or trailing separators and empty
    /// vocabulary tokens.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A token's content length disagrees with its template.
    #[error("Length mismatch: template holds {expected} digits, token holds {actual}")]
    LengthMismatch {
        /// Digit capacity of the template.
        expected: usize,
        /// Content length of the token.
        actual: usize,
    },

    /// A letter has no entry in the letter map.
    ///
    /// Raised eagerly at vocabulary-index construction and during
    /// translation of alphabetic segments.
    #[error("Character '{0}' has no letter-map entry")]
    UnmappedCharacter(char),
}

/// A specialized `Result` type for phoneword operations.
pub type Result<T> = std::result::Result<T, PhonewordError>;
