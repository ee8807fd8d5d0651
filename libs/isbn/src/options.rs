//! Parsing configuration.

use serde::{Deserialize, Serialize};

/// How validators treat characters that are not decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Any non-digit outside the ISBN-10 check position rejects the code.
    #[default]
    Strict,

    /// Non-digits are skipped silently, matching older catalog data that was
    /// validated this way. Letters embedded mid-code can be accepted.
    Legacy,
}

/// Options for [`crate::Identifier::parse_with`].
///
/// Deserializable so host applications can embed it in their own config.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub strictness: Strictness,
}

impl ParseOptions {
    /// Strict parsing, the default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}
