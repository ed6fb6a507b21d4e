//! Fuzz target for card records.
//!
//! Drives a record through arbitrary field values and operations and checks
//! that nothing panics and the error channels stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use card_record::{CardError, CardRecord};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    SetNumber(String),
    SetHolderName(String),
    SetExpiry(String),
    SetCvv(String),
    Number,
    CardType,
    Check,
}

#[derive(Debug, Arbitrary)]
struct Input {
    number: String,
    holder_name: String,
    expiry: String,
    cvv: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut card = CardRecord::new(input.number, input.holder_name, &input.expiry, input.cvv);

    for op in input.ops {
        match op {
            Op::SetNumber(n) => {
                card.set_number(n);
            }
            Op::SetHolderName(h) => {
                card.set_holder_name(h.clone());
                assert_eq!(card.holder_name(), h);
            }
            Op::SetExpiry(e) => {
                let ok = card.set_expiry(&e);
                assert_eq!(ok, card.expiry().is_some());
                assert_eq!(ok, card.last_expiry_error().is_none());
            }
            Op::SetCvv(c) => {
                card.set_cvv(c.clone());
                assert_eq!(card.cvv(), c);
            }
            Op::Number => {
                let _ = card.number();
            }
            Op::CardType => {
                let name = card.card_type();
                assert_eq!(name.is_some(), card.brand().is_known());
            }
            Op::Check => {
                let ok = card.check();
                assert_eq!(ok, card.last_number_error().is_none());
            }
        }

        if let Some(n) = card.last_number_error() {
            assert_eq!(card.errno(), Some(CardError::Number(n)));
        }
        let _ = card.error();
        let _ = format!("{:?}", card);
    }
});
