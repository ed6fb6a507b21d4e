//! # card_record
//!
//! Payment card record validation for Rust.
//!
//! ## Features
//!
//! - Card brand detection from prefix and length (7 brands)
//! - Mod-10 checksum validation
//! - Expiry date normalization to `YYMM`
//! - Sticky, two-channel error reporting (number and expiry)
//! - Masked `Debug` output and zeroized buffers on drop
//!
//! ## Quick Start
//!
//! ```rust
//! use card_record::{CardRecord, CardBrand};
//!
//! let mut card = CardRecord::new("4111111111111111", "John Smith", "2030/12", "123");
//!
//! assert!(card.check());
//! assert_eq!(card.card_type(), Some("VISA"));
//! assert_eq!(card.brand(), CardBrand::Visa);
//! assert_eq!(card.expiry().unwrap().as_str(), "3012");
//!
//! // Safe for logging - never exposes full card number
//! println!("{:?}", card);
//! ```
//!
//! ## Error Reporting
//!
//! Operations return `bool` or `Option` and leave the reason in the record.
//! The number channel takes precedence over the expiry channel.
//!
//! ```rust
//! use card_record::{CardRecord, CardError, ExpiryError, NumberError};
//!
//! let mut card = CardRecord::new("4111111111111112", "", "1", "");
//! assert_eq!(card.errno(), Some(CardError::Expiry(ExpiryError::InvalidExpiry)));
//!
//! assert!(!card.check());
//! assert_eq!(card.errno(), Some(CardError::Number(NumberError::BadNumber)));
//! assert_eq!(card.error(), Some("Invalid card number"));
//! ```
//!
//! ## Free Functions
//!
//! ```rust
//! use card_record::{detect_type, detect_type_name, type_to_name, CardBrand};
//!
//! assert_eq!(detect_type("378282246310005"), CardBrand::Amex);
//! assert_eq!(detect_type_name("6011111111111117"), Some("DISCOVER"));
//! assert_eq!(type_to_name(CardBrand::Unknown), None);
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | MasterCard | 51-55 | 16 |
//! | Visa | 4 | 13, 16 |
//! | Amex | 34, 37 | 15 |
//! | Dinners | 36, 38 / class `[300-305]` | 14 / 12 |
//! | Discover | 6011 | 16 |
//! | Enroute | 2014, 2149 | 15 |
//! | JCB | 3 / 2131, 1800 | 16 / 15 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize brands, error codes and expiry values |
//!
//! ## Logging
//!
//! Classification and validation emit `tracing` events at `debug` level.
//! Card numbers only appear masked; the CVV never appears.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
pub mod record;

// Re-export main types at crate root
pub use card::{type_to_name, CardBrand};
pub use detect::{detect_type, detect_type_name};
pub use error::{CardError, ExpiryError, NumberError};
pub use expiry::{normalize_expiry, Expiry};
pub use record::CardRecord;
