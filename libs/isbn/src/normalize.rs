//! Removal of non-semantic formatting from raw input.

/// Returns true for characters that carry no meaning inside an ISBN.
///
/// Only the ASCII space and hyphen qualify. Tabs, Unicode dashes and other
/// separators are preserved and later rejected by validation.
#[must_use]
pub fn is_formatting_char(c: char) -> bool {
    matches!(c, ' ' | '-')
}

/// Strips spaces and hyphens from `raw`, keeping every other character in order.
///
/// Never fails; an input made only of formatting yields an empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&c| !is_formatting_char(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_spaces_and_hyphens() {
        assert_eq!(normalize("978 0 471 48648 0"), "9780471486480");
        assert_eq!(normalize("978-0-13-149505-0"), "9780131495050");
        assert_eq!(normalize(" - -"), "");
    }

    #[test]
    fn test_preserves_other_characters() {
        assert_eq!(normalize("isbn: 12-34x\t5"), "isbn:1234x\t5");
        assert_eq!(normalize("0\u{2013}321"), "0\u{2013}321");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("0-321 14653-0");
        assert_eq!(normalize(&once), once);
    }
}
