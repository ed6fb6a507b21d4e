//! Error codes for card records.
//!
//! A [`crate::CardRecord`] keeps two independent error channels: one for the
//! card number (`NumberError`) and one for the expiry date (`ExpiryError`).
//! [`CardError`] wraps either side when the caller only wants "the" error.

use std::fmt;

/// Errors raised by number-related operations.
///
/// The discriminants are the stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NumberError {
    /// An accessor was called while the record had no card number.
    InvalidState = 1,
    /// Classification was requested with no number and no prior brand.
    BadArgument = 2,
    /// The number matches no brand rule.
    UnknownType = 3,
    /// The number failed the mod-10 checksum.
    BadNumber = 4,
    /// The number is malformed.
    BadFormat = 5,
    /// The brand could not be resolved to a name.
    UndetectableType = 6,
}

impl NumberError {
    /// Returns the numeric error code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the fixed user-facing message, if this code has one.
    ///
    /// `BadArgument` has no message of its own.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::InvalidState => Some("Invalid call for this method"),
            Self::BadArgument => None,
            Self::UnknownType => Some("Invalid card type"),
            Self::BadNumber => Some("Invalid card number"),
            Self::BadFormat => Some("Invalid format"),
            Self::UndetectableType => Some("Cannot detect the type of your card"),
        }
    }
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => f.write_str("No card number or card type to work with"),
        }
    }
}

impl std::error::Error for NumberError {}

/// Errors raised by expiry-related operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ExpiryError {
    /// The expiry did not reduce to 4 or 6 digits.
    InvalidExpiry = 7,
}

impl ExpiryError {
    /// Returns the numeric error code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the fixed user-facing message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidExpiry => "Invalid expiry date",
        }
    }
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExpiryError {}

/// Either channel's error, as reported by [`crate::CardRecord::errno`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardError {
    /// A number-channel error.
    Number(NumberError),
    /// An expiry-channel error.
    Expiry(ExpiryError),
}

impl CardError {
    /// Returns the numeric error code (1-7; 0 is "no error").
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Number(e) => e.code(),
            Self::Expiry(e) => e.code(),
        }
    }
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(e) => e.fmt(f),
            Self::Expiry(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Number(e) => Some(e),
            Self::Expiry(e) => Some(e),
        }
    }
}

impl From<NumberError> for CardError {
    fn from(e: NumberError) -> Self {
        Self::Number(e)
    }
}

impl From<ExpiryError> for CardError {
    fn from(e: ExpiryError) -> Self {
        Self::Expiry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_messages() {
        assert_eq!(
            NumberError::InvalidState.to_string(),
            "Invalid call for this method"
        );
        assert_eq!(NumberError::UnknownType.to_string(), "Invalid card type");
        assert_eq!(NumberError::BadNumber.to_string(), "Invalid card number");
        assert_eq!(NumberError::BadFormat.to_string(), "Invalid format");
        assert_eq!(
            NumberError::UndetectableType.to_string(),
            "Cannot detect the type of your card"
        );
        assert_eq!(NumberError::BadArgument.message(), None);
    }

    #[test]
    fn test_expiry_message() {
        assert_eq!(ExpiryError::InvalidExpiry.to_string(), "Invalid expiry date");
    }

    #[test]
    fn test_codes() {
        assert_eq!(NumberError::InvalidState.code(), 1);
        assert_eq!(NumberError::BadArgument.code(), 2);
        assert_eq!(NumberError::UnknownType.code(), 3);
        assert_eq!(NumberError::BadNumber.code(), 4);
        assert_eq!(NumberError::BadFormat.code(), 5);
        assert_eq!(NumberError::UndetectableType.code(), 6);
        assert_eq!(ExpiryError::InvalidExpiry.code(), 7);
        assert_eq!(CardError::from(NumberError::BadNumber).code(), 4);
        assert_eq!(CardError::from(ExpiryError::InvalidExpiry).code(), 7);
    }

    #[test]
    fn test_card_error_source() {
        use std::error::Error;

        let err = CardError::from(NumberError::BadNumber);
        assert_eq!(err.to_string(), "Invalid card number");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NumberError>();
        assert_send_sync::<ExpiryError>();
        assert_send_sync::<CardError>();
    }
}
