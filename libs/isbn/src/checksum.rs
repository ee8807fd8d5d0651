//! Check digit arithmetic and per-format validators.
//!
//! Validators take an already normalized code (see [`crate::normalize()`]) and
//! answer with the [`Format`] the code satisfies or the reason it does not.
//!
//! ## ISBN-13
//!
//! Positions 1..12 are weighted alternately 1 and 3 (odd positions 1, even
//! positions 3). The check digit at position 13 is `(10 - sum % 10) % 10`.
//!
//! ## ISBN-10
//!
//! Position `i` (1-indexed) is weighted `11 - i`. The final character may be
//! an uppercase `X` standing for 10. A code is valid when the weighted sum is
//! divisible by 11.

use crate::{Format, IsbnError, Strictness};

/// Number of characters in a normalized ISBN-13.
pub const ISBN13_LEN: usize = 13;

/// Number of characters in a normalized ISBN-10.
pub const ISBN10_LEN: usize = 10;

/// Check character standing for the value 10 in an ISBN-10.
pub const ISBN10_TEN: char = 'X';

// =============================================================================
// Check digit computation
// =============================================================================

/// Computes the ISBN-13 check digit for twelve leading digits.
///
/// Each element must be in `0..=9`.
#[must_use]
pub fn isbn13_check_digit(digits: &[u8; 12]) -> u8 {
    isbn13_expected(digits)
}

/// Computes the ISBN-10 check value (`0..=10`) for nine leading digits.
///
/// Each element must be in `0..=9`. Render the result with [`isbn10_check_char`].
#[must_use]
pub fn isbn10_check_value(digits: &[u8; 9]) -> u8 {
    isbn10_expected(digits)
}

/// Renders an ISBN-10 check value, using `X` for 10.
#[must_use]
pub fn isbn10_check_char(value: u8) -> char {
    if value == 10 {
        ISBN10_TEN
    } else {
        digit_char(value)
    }
}

fn isbn13_weight(position: usize) -> u32 {
    if position % 2 == 0 {
        3
    } else {
        1
    }
}

/// Weighted sum of leading ISBN-13 digits, positions counted from 1.
fn isbn13_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| u32::from(digit) * isbn13_weight(index + 1))
        .sum()
}

pub(crate) fn isbn13_expected(digits: &[u8]) -> u8 {
    // The modulus keeps the result in 0..=9.
    ((10 - isbn13_sum(digits) % 10) % 10) as u8
}

/// Weighted sum of ISBN-10 values in collection order: 10, 9, 8, ...
fn isbn10_sum(values: &[u8]) -> u32 {
    values
        .iter()
        .zip((1..=ISBN10_LEN as u32).rev())
        .map(|(&value, weight)| u32::from(value) * weight)
        .sum()
}

fn isbn10_expected(values: &[u8]) -> u8 {
    ((11 - isbn10_sum(values) % 11) % 11) as u8
}

pub(crate) fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit % 10)
}

fn digit_at(position: usize, character: char) -> Result<u8, IsbnError> {
    character
        .to_digit(10)
        .map(|d| d as u8)
        .ok_or(IsbnError::NonDigitCharacter {
            position,
            character,
        })
}

/// Reads decimal digits, failing on the first character that is not one.
pub(crate) fn parse_digits(chars: impl Iterator<Item = char>) -> Result<Vec<u8>, IsbnError> {
    chars
        .enumerate()
        .map(|(index, c)| digit_at(index + 1, c))
        .collect()
}

fn length_gate(code: &str, expected: usize) -> Result<(), IsbnError> {
    let length = code.chars().count();
    if length == expected {
        Ok(())
    } else {
        Err(IsbnError::LengthMismatch { length })
    }
}

fn last_char(code: &str) -> char {
    code.chars().next_back().unwrap_or_default()
}

// =============================================================================
// ISBN-13
// =============================================================================

/// Validates a normalized code as ISBN-13, rejecting any non-digit character.
pub fn validate_isbn13(code: &str) -> Result<Format, IsbnError> {
    validate_isbn13_with(code, Strictness::Strict)
}

/// Validates a normalized code as ISBN-13 under the given strictness.
pub fn validate_isbn13_with(code: &str, strictness: Strictness) -> Result<Format, IsbnError> {
    length_gate(code, ISBN13_LEN)?;

    let (body, check) = match strictness {
        Strictness::Strict => {
            let mut digits = parse_digits(code.chars())?;
            let check = digits.pop().unwrap_or_default();
            (digits, check)
        }
        Strictness::Legacy => {
            // Non-digits are skipped but still consume their position, so the
            // weighting of later digits is unaffected. A missing check digit
            // counts as 0.
            let (body, check) = code.chars().enumerate().fold(
                (vec![0u8; ISBN13_LEN - 1], 0u8),
                |(mut body, check), (index, c)| match c.to_digit(10) {
                    Some(d) if index + 1 < ISBN13_LEN => {
                        body[index] = d as u8;
                        (body, check)
                    }
                    Some(d) => (body, d as u8),
                    None => (body, check),
                },
            );
            (body, check)
        }
    };

    let expected = isbn13_expected(&body);
    if check == expected {
        Ok(Format::Isbn13)
    } else {
        Err(IsbnError::ChecksumMismatch {
            format: Format::Isbn13,
            expected: digit_char(expected),
            found: last_char(code),
        })
    }
}

// =============================================================================
// ISBN-10
// =============================================================================

/// Validates a normalized code as ISBN-10, rejecting any character other than
/// a digit or a trailing uppercase `X`.
pub fn validate_isbn10(code: &str) -> Result<Format, IsbnError> {
    validate_isbn10_with(code, Strictness::Strict)
}

/// Validates a normalized code as ISBN-10 under the given strictness.
pub fn validate_isbn10_with(code: &str, strictness: Strictness) -> Result<Format, IsbnError> {
    length_gate(code, ISBN10_LEN)?;

    let values = match strictness {
        Strictness::Strict => code
            .chars()
            .enumerate()
            .map(|(index, c)| match c {
                ISBN10_TEN if index + 1 == ISBN10_LEN => Ok(10),
                _ => digit_at(index + 1, c),
            })
            .collect::<Result<Vec<u8>, _>>()?,
        Strictness::Legacy => {
            // Only digits are collected and they are weighted in the order
            // they were found; a trailing `X` contributes 10 last.
            let (body, ten) = match code.strip_suffix(ISBN10_TEN) {
                Some(body) => (body, Some(10)),
                None => (code, None),
            };
            body.chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as u8)
                .chain(ten)
                .collect()
        }
    };

    if isbn10_sum(&values) % 11 == 0 {
        return Ok(Format::Isbn10);
    }

    let prefix = values.split_last().map_or(&[][..], |(_, prefix)| prefix);
    Err(IsbnError::ChecksumMismatch {
        format: Format::Isbn10,
        expected: isbn10_check_char(isbn10_expected(prefix)),
        found: last_char(code),
    })
}
