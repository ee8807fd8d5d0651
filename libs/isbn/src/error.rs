//! Error types for ISBN validation.

use thiserror::Error;

use crate::Format;

/// Reasons a candidate code fails to classify as an ISBN.
///
/// Every variant is an expected, recoverable outcome. [`crate::parse_identifier`]
/// collapses all of them to `None`; [`crate::Identifier::parse`] reports which
/// one applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// The normalized code has a length no ISBN format accepts.
    #[error("invalid ISBN length: {length} characters")]
    LengthMismatch { length: usize },

    /// A position that must hold a digit (or a trailing `X` for ISBN-10) holds
    /// something else. Positions are 1-indexed over the normalized code.
    #[error("invalid character {character:?} at position {position}")]
    NonDigitCharacter { position: usize, character: char },

    /// The code is well formed but its check character is wrong.
    #[error("{format} checksum mismatch: expected check character '{expected}', found '{found}'")]
    ChecksumMismatch {
        format: Format,
        expected: char,
        found: char,
    },
}

impl IsbnError {
    /// Returns true if the code was rejected on length alone.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IsbnError::LengthMismatch { .. })
    }

    /// Returns true if the code contained a character no ISBN position allows.
    pub fn is_character_error(&self) -> bool {
        matches!(self, IsbnError::NonDigitCharacter { .. })
    }

    /// Returns true if the code parsed cleanly but failed its checksum.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, IsbnError::ChecksumMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        let length = IsbnError::LengthMismatch { length: 7 };
        assert!(length.is_length_error());
        assert!(!length.is_checksum_error());

        let character = IsbnError::NonDigitCharacter {
            position: 4,
            character: 'A',
        };
        assert!(character.is_character_error());
        assert!(!character.is_length_error());

        let checksum = IsbnError::ChecksumMismatch {
            format: Format::Isbn13,
            expected: '2',
            found: '9',
        };
        assert!(checksum.is_checksum_error());
        assert!(!checksum.is_character_error());
    }

    #[test]
    fn test_error_messages() {
        let err = IsbnError::NonDigitCharacter {
            position: 10,
            character: 'x',
        };
        assert_eq!(err.to_string(), "invalid character 'x' at position 10");

        let err = IsbnError::ChecksumMismatch {
            format: Format::Isbn10,
            expected: '5',
            found: 'X',
        };
        assert_eq!(
            err.to_string(),
            "ISBN-10 checksum mismatch: expected check character '5', found 'X'"
        );
    }
}
