//! # bookid-isbn
//!
//! Normalization, checksum validation, and classification of book
//! identifiers (ISBN-10 and ISBN-13).
//!
//! ## Design Principles
//!
//! - Validation failure is an ordinary outcome, returned as `None` or an
//!   [`IsbnError`], never a panic
//! - An [`Identifier`] can only be obtained by parsing, so holding one means
//!   the code passed its checksum
//! - Every function is pure; nothing is shared or mutated between calls
//!
//! ## Input Format
//!
//! Spaces and hyphens are insignificant and stripped before validation:
//!
//! - `9780471486480`
//! - `978-0-471-48648-0`
//! - `978 0 471 48648 0`
//!
//! A normalized code of 13 characters is checked as ISBN-13, one of 10
//! characters as ISBN-10. ISBN-13 is always tried first.
//!
//! ```
//! use bookid_isbn::{parse_identifier, Format};
//!
//! let id = parse_identifier("0-321-14653-0").unwrap();
//! assert_eq!(id.format(), Format::Isbn10);
//! assert_eq!(id.code(), "0321146530");
//!
//! assert!(parse_identifier("0-321-14653-9").is_none());
//! ```

mod checksum;
mod error;
mod normalize;
mod options;
mod types;

pub use checksum::{
    isbn10_check_char, isbn10_check_value, isbn13_check_digit, validate_isbn10,
    validate_isbn10_with, validate_isbn13, validate_isbn13_with, ISBN10_LEN, ISBN10_TEN,
    ISBN13_LEN,
};
pub use error::IsbnError;
pub use normalize::{is_formatting_char, normalize};
pub use options::{ParseOptions, Strictness};
pub use types::*;
