//! Property-based tests for normalization and classification.

use bookid_isbn::{
    isbn10_check_char, isbn10_check_value, isbn13_check_digit, normalize, parse_identifier,
    Format,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// A valid ISBN-13 built from twelve random digits.
fn arb_isbn13() -> impl Strategy<Value = String> {
    prop::array::uniform12(0u8..=9).prop_map(|body| {
        let mut code = render(&body);
        code.push(char::from(b'0' + isbn13_check_digit(&body)));
        code
    })
}

/// A valid ISBN-10 built from nine random digits.
fn arb_isbn10() -> impl Strategy<Value = String> {
    prop::array::uniform9(0u8..=9).prop_map(|body| {
        let mut code = render(&body);
        code.push(isbn10_check_char(isbn10_check_value(&body)));
        code
    })
}

/// Inserts a space or hyphen before each character selected by `mask`.
fn with_separators(code: &str, mask: &[(bool, bool)]) -> String {
    code.chars()
        .zip(mask.iter().cycle())
        .flat_map(|(c, &(insert, hyphen))| {
            let sep = insert.then_some(if hyphen { '-' } else { ' ' });
            sep.into_iter().chain(std::iter::once(c))
        })
        .collect()
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_removes_only_spaces_and_hyphens(s in ".*") {
        let expected: String = s.chars().filter(|c| *c != ' ' && *c != '-').collect();
        prop_assert_eq!(normalize(&s), expected);
    }

    /// Codes whose normalized length is neither 10 nor 13 never classify.
    #[test]
    fn wrong_length_never_classifies(s in "[0-9X -]{0,20}") {
        let len = normalize(&s).chars().count();
        prop_assume!(len != 10 && len != 13);
        prop_assert!(parse_identifier(&s).is_none());
    }

    #[test]
    fn computed_isbn13_classifies(code in arb_isbn13()) {
        let id = parse_identifier(&code);
        prop_assert_eq!(id.map(|id| id.format()), Some(Format::Isbn13));
    }

    #[test]
    fn computed_isbn10_classifies(code in arb_isbn10()) {
        let id = parse_identifier(&code);
        prop_assert_eq!(id.map(|id| id.format()), Some(Format::Isbn10));
    }

    /// Changing the check digit of a valid ISBN-13 always breaks it.
    #[test]
    fn altered_isbn13_check_rejected(code in arb_isbn13(), bump in 1u8..=9) {
        let check = code.as_bytes()[12] - b'0';
        let mut altered = code[..12].to_string();
        altered.push(char::from(b'0' + (check + bump) % 10));
        prop_assert!(parse_identifier(&altered).is_none());
    }

    #[test]
    fn separators_do_not_change_classification(
        code in prop_oneof![arb_isbn13(), arb_isbn10()],
        mask in prop::collection::vec(any::<(bool, bool)>(), 1..13),
    ) {
        let formatted = with_separators(&code, &mask);
        let plain = parse_identifier(&code);
        let spaced = parse_identifier(&formatted);
        prop_assert!(plain.is_some());
        prop_assert_eq!(spaced, plain);
    }

    /// Lowercase `x` never stands in for the ISBN-10 check value 10.
    #[test]
    fn lowercase_x_rejected(
        code in arb_isbn10().prop_filter("check value 10", |c| c.ends_with('X')),
    ) {
        let lowered = code.replace('X', "x");
        prop_assert!(parse_identifier(&lowered).is_none());
    }

    #[test]
    fn isbn10_converts_to_valid_isbn13(code in arb_isbn10()) {
        let id = parse_identifier(&code).unwrap().to_isbn13().unwrap();
        prop_assert_eq!(id.format(), Format::Isbn13);
        prop_assert!(id.code().starts_with("978"));
        prop_assert_eq!(&id.code()[3..12], &code[..9]);
        prop_assert_eq!(parse_identifier(id.code()), Some(id.clone()));
    }
}
