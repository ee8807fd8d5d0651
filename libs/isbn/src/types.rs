//! The classified identifier and its format tag.

use serde::{Deserialize, Serialize};

use crate::checksum::{self, ISBN10_LEN, ISBN13_LEN};
use crate::{normalize, IsbnError, ParseOptions};

// =============================================================================
// Format
// =============================================================================

/// The ISBN standard a code satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Isbn10,
    Isbn13,
}

impl Format {
    /// Number of characters a normalized code of this format has.
    #[must_use]
    pub const fn expected_length(&self) -> usize {
        match self {
            Format::Isbn10 => ISBN10_LEN,
            Format::Isbn13 => ISBN13_LEN,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Isbn10 => write!(f, "ISBN-10"),
            Format::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

// =============================================================================
// Identifier
// =============================================================================

/// A validated ISBN.
///
/// Only obtainable through parsing, so every instance holds a normalized code
/// that satisfies the checksum of its [`Format`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    code: String,
    format: Format,
}

impl Identifier {
    /// Parses and classifies `raw` with strict validation.
    ///
    /// Spaces and hyphens are stripped first. ISBN-13 is always tried before
    /// ISBN-10.
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        Self::parse_with(raw, &ParseOptions::default())
    }

    /// Parses and classifies `raw` using `options`.
    ///
    /// When neither format matches, the ISBN-13 failure is reported unless it
    /// was only a length mismatch, in which case the ISBN-10 failure is.
    pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Self, IsbnError> {
        let code = normalize(raw);
        let strictness = options.strictness;

        let outcome = checksum::validate_isbn13_with(&code, strictness).or_else(|isbn13_err| {
            checksum::validate_isbn10_with(&code, strictness).map_err(|isbn10_err| {
                if isbn13_err.is_length_error() {
                    isbn10_err
                } else {
                    isbn13_err
                }
            })
        });

        match outcome {
            Ok(format) => {
                tracing::trace!(%code, %format, "classified isbn");
                Ok(Self { code, format })
            }
            Err(error) => {
                tracing::trace!(%code, %error, "rejected isbn candidate");
                Err(error)
            }
        }
    }

    /// The normalized code, without spaces or hyphens.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The final character of the code: a digit, or `X` for some ISBN-10s.
    #[must_use]
    pub fn check_character(&self) -> char {
        self.code.chars().next_back().unwrap_or_default()
    }

    /// Converts to the equivalent ISBN-13.
    ///
    /// ISBN-10s gain the `978` prefix and a recomputed check digit; ISBN-13s
    /// are returned unchanged. Fails only for ISBN-10s accepted in legacy
    /// mode whose body contains non-digits.
    pub fn to_isbn13(&self) -> Result<Self, IsbnError> {
        if self.format == Format::Isbn13 {
            return Ok(self.clone());
        }

        let mut digits = vec![9, 7, 8];
        digits.extend(checksum::parse_digits(self.code.chars().take(ISBN10_LEN - 1))?);
        digits.push(checksum::isbn13_expected(&digits));

        Ok(Self {
            code: digits.into_iter().map(checksum::digit_char).collect(),
            format: Format::Isbn13,
        })
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for Identifier {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Classifies `raw` as an ISBN, or returns `None` if it is not one.
#[must_use]
pub fn parse_identifier(raw: &str) -> Option<Identifier> {
    Identifier::parse(raw).ok()
}

/// Returns true if `raw` classifies as either ISBN format.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    parse_identifier(raw).is_some()
}

// =============================================================================
// Tests
// =============================================================================
