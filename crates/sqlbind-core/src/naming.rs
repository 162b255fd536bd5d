// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier translation between camelCase and underscore_case.
//!
//! This is the naming convention used everywhere in sqlbind: type names
//! become table names, camelCase property names become column names, and
//! result-set columns are matched back the same way.
//!
//! # Round Trip
//!
//! For identifiers of the form `[a-z]+([A-Z][a-z0-9]*)*` the translation
//! is lossless:
//!
//! ```rust
//! use sqlbind_core::naming::{to_camel, to_underscore};
//!
//! assert_eq!(to_underscore("purOrderId"), "pur_order_id");
//! assert_eq!(to_camel("pur_order_id"), "purOrderId");
//! ```
//!
//! Input outside that grammar (already underscored, leading digits, empty
//! strings) degrades silently rather than failing.

/// Convert a camelCase identifier to underscore_case.
///
/// The first character is capitalized, a separator is inserted after every
/// capital-led token, the result is lowercased and the trailing separator
/// is trimmed. Empty input yields empty output.
pub fn to_underscore(name: &str) -> String {
    let capitalized = capitalize(name);

    let mut out = String::with_capacity(capitalized.len() + 4);
    for (i, c) in capitalized.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }

    let mut underscored = out.to_lowercase();
    if underscored.ends_with('_') {
        underscored.pop();
    }
    underscored
}

/// Convert an underscore_case identifier to camelCase.
///
/// Segments after the first are capitalized and concatenated. Empty
/// segments produced by doubled or trailing separators vanish in the
/// concatenation.
pub fn to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, segment) in name.split('_').enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            out.push_str(&capitalize(segment));
        }
    }
    out
}

/// Capitalize the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_from_pascal() {
        assert_eq!(to_underscore("PurOrderId"), "pur_order_id");
    }

    #[test]
    fn underscore_from_camel() {
        assert_eq!(to_underscore("purOrderId"), "pur_order_id");
        assert_eq!(to_underscore("orderNo"), "order_no");
    }

    #[test]
    fn underscore_single_word() {
        assert_eq!(to_underscore("user"), "user");
        assert_eq!(to_underscore("User"), "user");
    }

    #[test]
    fn underscore_with_digits() {
        assert_eq!(to_underscore("addressLine2"), "address_line2");
    }

    #[test]
    fn underscore_empty_input() {
        assert_eq!(to_underscore(""), "");
    }

    #[test]
    fn camel_basic() {
        assert_eq!(to_camel("pur_order_id"), "purOrderId");
        assert_eq!(to_camel("order_no"), "orderNo");
    }

    #[test]
    fn camel_single_segment() {
        assert_eq!(to_camel("user"), "user");
    }

    #[test]
    fn camel_skips_empty_segments() {
        assert_eq!(to_camel("a__b"), "aB");
        assert_eq!(to_camel("a_b_"), "aB");
    }

    #[test]
    fn camel_empty_input() {
        assert_eq!(to_camel(""), "");
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("order"), "Order");
        assert_eq!(capitalize("Order"), "Order");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn round_trip_over_identifier_grammar() {
        let identifiers = [
            "a",
            "ab",
            "purOrderId",
            "orderNo",
            "createdAt",
            "addressLine2",
            "aB",
            "customerA1",
            "veryLongIdentifierWithManyTokens",
        ];
        for ident in identifiers {
            assert_eq!(to_camel(&to_underscore(ident)), ident, "round trip failed for {ident}");
        }
    }
}
