//! Fuzz target for expiry normalization.
//!
//! Tests that normalization never panics on arbitrary input.

#![no_main]

use card_record::expiry::normalize_expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = data.chars().filter(char::is_ascii_digit).count();

    match normalize_expiry(data) {
        Ok(exp) => {
            assert!(digits == 4 || digits == 6);
            assert_eq!(exp.as_str().len(), 4);
            let _ = exp.year();
            let _ = exp.month();
            let _ = exp.to_string();
        }
        Err(_) => assert!(digits != 4 && digits != 6),
    }
});
