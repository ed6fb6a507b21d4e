//! The stateful card record.
//!
//! A [`CardRecord`] holds the four raw card fields and remembers the outcome
//! of the last number-related and expiry-related operation. Operations report
//! failure through their return value and leave the reason in the record, to
//! be read back with [`CardRecord::errno`] or [`CardRecord::error`].

use crate::card::{type_to_name, CardBrand};
use crate::detect::detect_type;
use crate::error::{CardError, ExpiryError, NumberError};
use crate::expiry::{normalize_expiry, Expiry};
use crate::luhn;
use crate::mask::{last_four, mask_number};
use std::fmt;
use tracing::debug;
use zeroize::Zeroize;

/// A payment card record: number, holder name, expiry and CVV.
///
/// # Example
///
/// ```
/// use card_record::{CardRecord, CardError, NumberError};
///
/// let mut card = CardRecord::new("5500005555555559", "Jane Doe", "2025/01", "123");
/// assert!(card.check());
/// assert_eq!(card.card_type(), Some("MASTERCARD"));
/// assert_eq!(card.expiry().map(|e| e.as_str()), Some("2501"));
///
/// card.set_number("5500005555555550");
/// assert!(!card.check());
/// assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadNumber)));
/// assert_eq!(card.error(), Some("Invalid card number"));
/// ```
#[derive(Clone, Default)]
pub struct CardRecord {
    number: String,
    holder_name: String,
    expiry: Option<Expiry>,
    cvv: String,
    brand: CardBrand,
    number_error: Option<NumberError>,
    expiry_error: Option<ExpiryError>,
}

impl CardRecord {
    /// Creates a record from the four raw inputs.
    ///
    /// The expiry is normalized immediately; a malformed expiry leaves the
    /// record without one and sets [`ExpiryError::InvalidExpiry`].
    pub fn new(
        number: impl Into<String>,
        holder_name: impl Into<String>,
        expiry: &str,
        cvv: impl Into<String>,
    ) -> Self {
        let mut record = Self::default();
        record.set(number, holder_name, expiry, cvv);
        record
    }

    /// Replaces all four fields at once, normalizing the expiry.
    pub fn set(
        &mut self,
        number: impl Into<String>,
        holder_name: impl Into<String>,
        expiry: &str,
        cvv: impl Into<String>,
    ) -> &mut Self {
        self.set_number(number);
        self.set_holder_name(holder_name);
        self.set_cvv(cvv);
        self.set_expiry(expiry);
        self
    }

    /// Returns the card number, or `None` (and sets
    /// [`NumberError::InvalidState`]) when it is empty.
    pub fn number(&mut self) -> Option<&str> {
        if self.number.is_empty() {
            self.number_error = Some(NumberError::InvalidState);
            return None;
        }
        Some(&self.number)
    }

    /// Stores the card number as given.
    pub fn set_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.number.zeroize();
        self.number = number.into();
        self
    }

    /// Returns the holder name.
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Stores the holder name as given.
    pub fn set_holder_name(&mut self, holder_name: impl Into<String>) -> &mut Self {
        self.holder_name = holder_name.into();
        self
    }

    /// Returns the normalized expiry, if the last parse succeeded.
    pub fn expiry(&self) -> Option<&Expiry> {
        self.expiry.as_ref()
    }

    /// Parses and stores an expiry date.
    ///
    /// Returns `false` on failure, in which case the stored expiry is cleared
    /// and [`ExpiryError::InvalidExpiry`] is recorded.
    pub fn set_expiry(&mut self, raw: &str) -> bool {
        match normalize_expiry(raw) {
            Ok(expiry) => {
                self.expiry = Some(expiry);
                self.expiry_error = None;
                true
            }
            Err(e) => {
                self.expiry = None;
                self.expiry_error = Some(e);
                false
            }
        }
    }

    /// Returns the CVV as given.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Stores the CVV verbatim.
    pub fn set_cvv(&mut self, cvv: impl Into<String>) -> &mut Self {
        self.cvv.zeroize();
        self.cvv = cvv.into();
        self
    }

    /// Brand as of the last [`card_type`](Self::card_type) call.
    #[inline]
    pub fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Last four digits of the number, safe for display.
    pub fn last_four(&self) -> String {
        last_four(&self.number)
    }

    /// Classifies the stored number and returns the brand's display name.
    ///
    /// With no number and no previously computed brand this records
    /// [`NumberError::BadArgument`] and returns `None`. With no number but a
    /// previously computed brand, that brand is reused.
    ///
    /// When no rule matches, [`NumberError::UnknownType`] is recorded and then
    /// superseded by [`NumberError::UndetectableType`], since `Unknown` has no
    /// display name. An unclassifiable number therefore never ends on
    /// `UnknownType` here; [`check`](Self::check) is what reports that code.
    pub fn card_type(&mut self) -> Option<&'static str> {
        if self.number.is_empty() {
            if !self.brand.is_known() {
                self.number_error = Some(NumberError::BadArgument);
                debug!(error = NumberError::BadArgument.code(), "no card number to classify");
                return None;
            }
        } else {
            self.brand = detect_type(&self.number);
        }

        if !self.brand.is_known() {
            self.number_error = Some(NumberError::UnknownType);
        }

        let name = type_to_name(self.brand);
        if name.is_none() {
            self.number_error = Some(NumberError::UndetectableType);
        }

        debug!(
            number = %mask_number(&self.number),
            brand = %self.brand,
            "classified card number"
        );
        name
    }

    /// Validates the card number: a known brand and a passing mod-10 walk.
    ///
    /// Clears the brand and the number error first. Expiry and CVV are not
    /// looked at.
    pub fn check(&mut self) -> bool {
        self.brand = CardBrand::Unknown;
        self.number_error = None;

        let brand = detect_type(&self.number);
        if !brand.is_known() {
            self.number_error = Some(NumberError::UnknownType);
            debug!(
                number = %mask_number(&self.number),
                error = NumberError::UnknownType.code(),
                "card number matches no brand"
            );
            return false;
        }

        let remainder = luhn::mod10(&self.number);
        if remainder != 0 {
            self.number_error = Some(NumberError::BadNumber);
            debug!(
                number = %mask_number(&self.number),
                %brand,
                remainder,
                "card number failed checksum"
            );
            return false;
        }

        debug!(number = %mask_number(&self.number), %brand, "card number passed");
        true
    }

    /// Most recent error, number channel first.
    pub fn errno(&self) -> Option<CardError> {
        self.number_error
            .map(CardError::Number)
            .or(self.expiry_error.map(CardError::Expiry))
    }

    /// Human-readable message for the most recent error, number channel first.
    ///
    /// Number errors without a message of their own fall through to the
    /// expiry channel. Returns `None` when there is nothing to report.
    pub fn error(&self) -> Option<&'static str> {
        self.number_error
            .and_then(NumberError::message)
            .or(self.expiry_error.map(ExpiryError::message))
    }

    /// Last number-channel error.
    #[inline]
    pub fn last_number_error(&self) -> Option<NumberError> {
        self.number_error
    }

    /// Last expiry-channel error.
    #[inline]
    pub fn last_expiry_error(&self) -> Option<ExpiryError> {
        self.expiry_error
    }
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRecord")
            .field("number", &mask_number(&self.number))
            .field("holder_name", &self.holder_name)
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .field("brand", &self.brand)
            .field("number_error", &self.number_error)
            .field("expiry_error", &self.expiry_error)
            .finish()
    }
}

impl Drop for CardRecord {
    fn drop(&mut self) {
        self.number.zeroize();
        self.cvv.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_expiry() {
        let card = CardRecord::new("4111111111111111", "John Smith", "25-01", "123");
        assert_eq!(card.expiry().map(Expiry::as_str), Some("2501"));
        assert_eq!(card.last_expiry_error(), None);
        assert_eq!(card.errno(), None);
        assert_eq!(card.error(), None);
    }

    #[test]
    fn test_new_with_bad_expiry() {
        let card = CardRecord::new("4111111111111111", "John Smith", "abcde", "123");
        assert!(card.expiry().is_none());
        assert_eq!(card.errno(), Some(CardError::Expiry(ExpiryError::InvalidExpiry)));
        assert_eq!(card.error(), Some("Invalid expiry date"));
    }

    #[test]
    fn test_check_valid() {
        let mut card = CardRecord::new("5500005555555559", "", "2501", "");
        assert!(card.check());
        assert_eq!(card.last_number_error(), None);
    }

    #[test]
    fn test_check_bad_checksum() {
        let mut card = CardRecord::new("5500005555555550", "", "2501", "");
        assert!(!card.check());
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadNumber)));
    }

    #[test]
    fn test_check_unknown_type() {
        let mut card = CardRecord::new("1234567890", "", "2501", "");
        assert!(!card.check());
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::UnknownType)));
        assert_eq!(card.error(), Some("Invalid card type"));
    }

    #[test]
    fn test_check_resets_brand_and_error() {
        let mut card = CardRecord::new("4111111111111111", "", "2501", "");
        assert_eq!(card.card_type(), Some("VISA"));
        assert_eq!(card.brand(), CardBrand::Visa);

        card.set_number("4111111111111112");
        assert!(!card.check());
        assert_eq!(card.brand(), CardBrand::Unknown);

        card.set_number("4111111111111111");
        assert!(card.check());
        assert_eq!(card.errno(), None);
    }

    #[test]
    fn test_check_does_not_touch_expiry_channel() {
        let mut card = CardRecord::new("4111111111111111", "", "1", "");
        assert!(card.check());
        assert_eq!(card.errno(), Some(CardError::Expiry(ExpiryError::InvalidExpiry)));
    }

    #[test]
    fn test_card_type_without_number() {
        let mut card = CardRecord::default();
        assert_eq!(card.card_type(), None);
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadArgument)));
    }

    #[test]
    fn test_card_type_reuses_previous_brand() {
        let mut card = CardRecord::new("378282246310005", "", "2501", "");
        assert_eq!(card.card_type(), Some("AMEX"));

        card.set_number("");
        assert_eq!(card.card_type(), Some("AMEX"));
        assert_eq!(card.last_number_error(), None);
    }

    #[test]
    fn test_card_type_unknown_number() {
        let mut card = CardRecord::new("999", "", "2501", "");
        assert_eq!(card.card_type(), None);
        assert_eq!(
            card.errno(),
            Some(CardError::Number(NumberError::UndetectableType))
        );
        assert_eq!(card.error(), Some("Cannot detect the type of your card"));
    }

    #[test]
    fn test_card_type_and_check_disagree_on_unknown() {
        let mut card = CardRecord::new("4111", "", "2501", "");
        assert_eq!(card.card_type(), None);
        assert_eq!(card.last_number_error(), Some(NumberError::UndetectableType));

        assert!(!card.check());
        assert_eq!(card.last_number_error(), Some(NumberError::UnknownType));
    }

    #[test]
    fn test_set_number_replaces_previous_value() {
        let mut card = CardRecord::new("4111111111111111", "", "2501", "987");
        card.set_number("55").set_cvv("1");
        assert_eq!(card.number(), Some("55"));
        assert_eq!(card.cvv(), "1");

        card.set_number("5500005555555559");
        assert_eq!(card.number(), Some("5500005555555559"));
        assert!(card.check());
    }

    #[test]
    fn test_number_getter_on_empty() {
        let mut card = CardRecord::default();
        assert_eq!(card.number(), None);
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::InvalidState)));
        assert_eq!(card.error(), Some("Invalid call for this method"));

        card.set_number("4111111111111111");
        assert_eq!(card.number(), Some("4111111111111111"));
    }

    #[test]
    fn test_number_error_takes_precedence() {
        let mut card = CardRecord::new("4111111111111112", "", "nope", "");
        assert!(!card.check());
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadNumber)));
        assert_eq!(card.error(), Some("Invalid card number"));
        assert_eq!(card.last_expiry_error(), Some(ExpiryError::InvalidExpiry));
    }

    #[test]
    fn test_bad_argument_message_falls_through() {
        let mut card = CardRecord::new("", "", "x", "");
        assert_eq!(card.card_type(), None);
        assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadArgument)));
        assert_eq!(card.error(), Some("Invalid expiry date"));

        card.set_expiry("2501");
        assert_eq!(card.error(), None);
    }

    #[test]
    fn test_set_expiry_reparse() {
        let mut card = CardRecord::default();
        assert!(!card.set_expiry("1"));
        assert!(card.expiry().is_none());
        assert!(card.set_expiry("2030/12"));
        assert_eq!(card.expiry().map(Expiry::as_str), Some("3012"));
        assert_eq!(card.last_expiry_error(), None);
    }

    #[test]
    fn test_field_round_trip() {
        let mut card = CardRecord::default();
        card.set_holder_name("  Zoë O'Brien ").set_cvv("0042");
        assert_eq!(card.holder_name(), "  Zoë O'Brien ");
        assert_eq!(card.cvv(), "0042");
    }

    #[test]
    fn test_debug_is_masked() {
        let card = CardRecord::new("4111111111111111", "John", "2501", "987");
        let debug = format!("{:?}", card);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("****-****-****-1111"));
        assert!(!debug.contains("987"));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardRecord>();
    }
}
