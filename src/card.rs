//! Card brand types.
//!
//! This module provides the `CardBrand` enum for identifying card networks,
//! their stable numeric codes and their display names.

use std::fmt;

/// Card networks recognized by the detector.
///
/// The discriminants are the stable brand codes (`Unknown` is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CardBrand {
    /// No rule matched.
    #[default]
    Unknown = 0,
    /// MasterCard - Prefix 51-55, length 16
    MasterCard = 1,
    /// Visa - Prefix 4, lengths 13, 16
    Visa = 2,
    /// American Express - Prefix 34, 37, length 15
    Amex = 3,
    /// Diners Club / Carte Blanche - Prefix 36, 38 (length 14), see [`crate::detect`]
    Dinners = 4,
    /// Discover - Prefix 6011, length 16
    Discover = 5,
    /// enRoute - Prefix 2014, 2149, length 15
    Enroute = 6,
    /// JCB - Prefix 3 (length 16) or 2131, 1800 (length 15)
    Jcb = 7,
}

impl CardBrand {
    /// All brands in code order, `Unknown` first.
    pub const ALL: [CardBrand; 8] = [
        Self::Unknown,
        Self::MasterCard,
        Self::Visa,
        Self::Amex,
        Self::Dinners,
        Self::Discover,
        Self::Enroute,
        Self::Jcb,
    ];

    /// Returns the numeric brand code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a numeric brand code back to a brand.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::MasterCard),
            2 => Some(Self::Visa),
            3 => Some(Self::Amex),
            4 => Some(Self::Dinners),
            5 => Some(Self::Discover),
            6 => Some(Self::Enroute),
            7 => Some(Self::Jcb),
            _ => None,
        }
    }

    /// Returns the display name, or `None` for [`CardBrand::Unknown`].
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::MasterCard => Some("MASTERCARD"),
            Self::Visa => Some("VISA"),
            Self::Amex => Some("AMEX"),
            Self::Dinners => Some("DINNERS"),
            Self::Discover => Some("DISCOVER"),
            Self::Enroute => Some("ENROUTE"),
            Self::Jcb => Some("JCB"),
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("UNKNOWN"))
    }
}

/// Resolves a brand to its display name.
///
/// `Unknown` cannot be classified and resolves to `None`, never to a string.
///
/// # Example
///
/// ```
/// use card_record::{type_to_name, CardBrand};
///
/// assert_eq!(type_to_name(CardBrand::Visa), Some("VISA"));
/// assert_eq!(type_to_name(CardBrand::Unknown), None);
/// ```
#[inline]
pub const fn type_to_name(brand: CardBrand) -> Option<&'static str> {
    brand.name()
}
