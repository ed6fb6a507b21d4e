//! Fuzz target for the mod-10 walk.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_record::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Never panics, whatever the bytes
    let total = luhn::checksum_total(data);
    assert_eq!(luhn::mod10(data), total % 10);

    // Check digit generation on the digit-only projection
    let digits: String = data.bytes().map(|b| char::from(b'0' + b % 10)).collect();
    if digits.len() <= 64 {
        let check = luhn::check_digit(&digits).unwrap();
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(char::from(b'0' + check));
        assert!(luhn::passes(&with_check), "Adding check digit should make valid");
    }
});
