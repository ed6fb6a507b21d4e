//! Card expiry date normalization.
//!
//! Expiry dates arrive in many shapes (`YY/MM`, `YY-MM`, `YYMM`, `YYYYMM`,
//! `YYYY/MM`, ...). Normalization drops every character that is not an ASCII
//! digit and reads what is left:
//!
//! - 4 digits: `YYMM`
//! - 6 digits: `YYYYMM`, keeping the last two digits of the year
//! - anything else is rejected
//!
//! There is no calendar check: month `00` or `13` is kept as given.
//!
//! # Example
//!
//! ```
//! use card_record::expiry::normalize_expiry;
//!
//! let expiry = normalize_expiry("2025/01").unwrap();
//! assert_eq!(expiry.as_str(), "2501");
//! assert_eq!(expiry.year(), "25");
//! assert_eq!(expiry.month(), "01");
//!
//! assert!(normalize_expiry("1/1").is_err());
//! ```

use crate::error::ExpiryError;
use std::fmt;

/// A normalized `YYMM` expiry value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Expiry {
    yymm: String,
}

impl Expiry {
    /// Returns the canonical four-digit `YYMM` form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.yymm
    }

    /// Two-digit year.
    #[inline]
    pub fn year(&self) -> &str {
        &self.yymm[..2]
    }

    /// Two-digit month, not range-checked.
    #[inline]
    pub fn month(&self) -> &str {
        &self.yymm[2..]
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.yymm)
    }
}

impl TryFrom<String> for Expiry {
    type Error = ExpiryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize_expiry(&value)
    }
}

impl From<Expiry> for String {
    fn from(expiry: Expiry) -> Self {
        expiry.yymm
    }
}

/// Normalizes a raw expiry string to `YYMM`.
///
/// Returns [`ExpiryError::InvalidExpiry`] unless exactly 4 or 6 digits remain
/// after removing non-digits.
pub fn normalize_expiry(raw: &str) -> Result<Expiry, ExpiryError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let (year, month) = match digits.len() {
        4 => (&digits[0..2], &digits[2..4]),
        6 => (&digits[2..4], &digits[4..6]),
        _ => return Err(ExpiryError::InvalidExpiry),
    };

    Ok(Expiry {
        yymm: format!("{}{}", year, month),
    })
}
