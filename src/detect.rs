//! Card brand detection from prefix and length.
//!
//! The detector walks an ordered rule table and returns the first brand
//! whose prefix and total length both match. Only plain ASCII digit strings
//! can match; anything else is [`CardBrand::Unknown`].
//!
//! | Order | Brand | Prefix | Length |
//! |-------|-------|--------|--------|
//! | 1 | MasterCard | 51-55 | 16 |
//! | 2 | Visa | 4 | 13, 16 |
//! | 3 | Amex | 34, 37 | 15 |
//! | 4 | Dinners | one of `0 1 2 3 5` | 12 |
//! | 4 | Dinners | 36, 38 | 14 |
//! | 5 | Discover | 6011 | 16 |
//! | 6 | Enroute | 2014, 2149 | 15 |
//! | 7 | JCB | 3 | 16 |
//! | 7 | JCB | 2131, 1800 | 15 |
//!
//! # Dinners 300-305
//!
//! The classic Diners Club / Carte Blanche range 300-305 is matched by the
//! character class `[300-305]`, which is the set `{0, 1, 2, 3, 5}` for a
//! single digit. The detector keeps that behavior: a 12-digit number starting
//! with any of those digits is Dinners, and a 14-digit `300…`-`305…` number
//! is not.
//!
//! # Trailing newline
//!
//! A PCRE `$` anchor also matches before a final `\n`, so a regex rendition
//! of this table accepts `"4111111111111111\n"` as Visa. This detector takes
//! the number as a plain digit string and returns `Unknown` for it.

use crate::card::{type_to_name, CardBrand};

/// Detects the card brand of a digit string.
///
/// # Example
///
/// ```
/// use card_record::{detect_type, CardBrand};
///
/// assert_eq!(detect_type("4111111111111111"), CardBrand::Visa);
/// assert_eq!(detect_type("378282246310005"), CardBrand::Amex);
/// assert_eq!(detect_type("4111-1111-1111-1111"), CardBrand::Unknown);
/// ```
pub fn detect_type(number: &str) -> CardBrand {
    let digits = number.as_bytes();
    if !digits.iter().all(u8::is_ascii_digit) {
        return CardBrand::Unknown;
    }

    // Rules are tried top to bottom; the first match wins.
    match digits {
        [b'5', b'1'..=b'5', rest @ ..] if rest.len() == 14 => CardBrand::MasterCard,

        [b'4', rest @ ..] if rest.len() == 12 || rest.len() == 15 => CardBrand::Visa,

        [b'3', b'4' | b'7', rest @ ..] if rest.len() == 13 => CardBrand::Amex,

        // `[300-305]`: one digit from {0, 1, 2, 3, 5}
        [b'0'..=b'3' | b'5', rest @ ..] if rest.len() == 11 => CardBrand::Dinners,
        [b'3', b'6' | b'8', rest @ ..] if rest.len() == 12 => CardBrand::Dinners,

        [b'6', b'0', b'1', b'1', rest @ ..] if rest.len() == 12 => CardBrand::Discover,

        [b'2', b'0', b'1', b'4', rest @ ..] | [b'2', b'1', b'4', b'9', rest @ ..]
            if rest.len() == 11 =>
        {
            CardBrand::Enroute
        }

        [b'3', rest @ ..] if rest.len() == 15 => CardBrand::Jcb,
        [b'2', b'1', b'3', b'1', rest @ ..] | [b'1', b'8', b'0', b'0', rest @ ..]
            if rest.len() == 11 =>
        {
            CardBrand::Jcb
        }

        _ => CardBrand::Unknown,
    }
}

/// Detects the card brand and resolves it to its display name.
///
/// Returns `None` when no rule matches.
///
/// ```
/// use card_record::detect_type_name;
///
/// assert_eq!(detect_type_name("5500005555555559"), Some("MASTERCARD"));
/// assert_eq!(detect_type_name("1234"), None);
/// ```
#[inline]
pub fn detect_type_name(number: &str) -> Option<&'static str> {
    type_to_name(detect_type(number))
}
