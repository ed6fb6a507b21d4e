//! Fuzz target for brand detection.

#![no_main]

use card_record::{detect_type, detect_type_name, mask, type_to_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = detect_type(data);
    assert_eq!(detect_type_name(data), type_to_name(brand));

    if brand.is_known() {
        assert!(data.bytes().all(|b| b.is_ascii_digit()));
        assert!((12..=16).contains(&data.len()));
    }

    let _ = mask::mask_number(data);
    let _ = mask::last_four(data);
});
