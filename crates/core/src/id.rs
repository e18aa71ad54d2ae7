//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product in the downstream store.
///
/// The store keys products by a 24-character lowercase hexadecimal string.
/// This gateway validates the format but never mints identifiers; for
/// creation the downstream consumer assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Check whether `s` is exactly 24 lowercase hex characters.
    ///
    /// Anchored at both ends: no partial matches, no uppercase, empty
    /// strings rejected.
    pub fn is_valid(s: &str) -> bool {
        s.len() == 24
            && s.bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Parse a string into a `ProductId`, validating the format.
    pub fn parse(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if !Self::is_valid(&s) {
            return Err(DomainError::invalid_id(
                "Invalid product ID format. Must be 24 lowercase hex characters",
            ));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_24_lowercase_hex() {
        assert!(ProductId::is_valid("507f1f77bcf86cd799439011"));
        assert!(ProductId::is_valid("aaaaaaaaaaaaaaaaaaaaaaaa"));
        assert!(ProductId::is_valid("000000000000000000000000"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(!ProductId::is_valid(""));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!ProductId::is_valid("abc123"));
        assert!(!ProductId::is_valid("507f1f77bcf86cd79943901")); // 23
        assert!(!ProductId::is_valid("507f1f77bcf86cd7994390111")); // 25
    }

    #[test]
    fn rejects_uppercase_hex() {
        assert!(!ProductId::is_valid("507F1F77BCF86CD799439011"));
        assert!(!ProductId::is_valid("507f1f77bcf86cd79943901A"));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(!ProductId::is_valid("507f1f77bcf86cd79943901g"));
        assert!(!ProductId::is_valid("507f1f77-bcf8-6cd7-9943-"));
    }

    #[test]
    fn parse_reports_format_rule() {
        let err = ProductId::parse("not-valid").unwrap_err();
        assert!(err.to_string().contains("Invalid product ID format"));
    }

    #[test]
    fn parse_round_trips_display() {
        let id = ProductId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
    }

    proptest! {
        /// Property: every 24-char string drawn from [0-9a-f] is accepted.
        #[test]
        fn valid_hex_strings_accepted(s in "[0-9a-f]{24}") {
            prop_assert!(ProductId::is_valid(&s));
            prop_assert!(ProductId::parse(s).is_ok());
        }

        /// Property: a single non-hex byte anywhere makes the id invalid.
        #[test]
        fn strings_with_invalid_chars_rejected(
            s in "[0-9a-f]{24}",
            idx in 0usize..24,
            bad in proptest::char::range('g', 'z'),
        ) {
            let mut bytes = s.into_bytes();
            bytes[idx] = bad as u8;
            let s = String::from_utf8(bytes).unwrap();
            prop_assert!(!ProductId::is_valid(&s));
        }

        /// Property: length other than 24 is rejected regardless of content.
        #[test]
        fn wrong_lengths_rejected(s in "[0-9a-f]{1,40}") {
            if s.len() != 24 {
                prop_assert!(!ProductId::is_valid(&s));
            }
        }
    }
}
