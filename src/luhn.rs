//! Mod-10 checksum for card numbers.
//!
//! The walk starts at the rightmost digit and moves left two digits per
//! step: the digit at the current position is added as is, the digit to its
//! left is doubled and the decimal digits of the doubled value are added.
//! A number passes when the total is a multiple of 10.
//!
//! Positions left of the first digit (the last step of an odd-length number)
//! contribute 0, as do non-digit bytes.

/// Sum of the decimal digits of `2 * d` for `d` in 0-9.
const DOUBLE_TABLE: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Digit value at `idx`, or 0 when `idx` is out of range or not a digit.
#[inline]
fn digit_at(bytes: &[u8], idx: Option<usize>) -> u32 {
    match idx.and_then(|i| bytes.get(i)) {
        Some(b) if b.is_ascii_digit() => u32::from(b - b'0'),
        _ => 0,
    }
}

/// Runs the walk and returns the total (not reduced modulo 10).
pub fn checksum_total(number: &str) -> u32 {
    let bytes = number.as_bytes();
    let mut sum: u32 = 0;

    let mut i = bytes.len();
    while i > 0 {
        let kept = i - 1;
        sum += digit_at(bytes, Some(kept));
        sum += DOUBLE_TABLE[digit_at(bytes, kept.checked_sub(1)) as usize];
        i = i.saturating_sub(2);
    }

    sum
}

/// Returns `total mod 10`; zero means the number passes.
///
/// ```
/// use card_record::luhn::mod10;
///
/// assert_eq!(mod10("5500005555555559"), 0);
/// assert_ne!(mod10("5500005555555550"), 0);
/// ```
#[inline]
pub fn mod10(number: &str) -> u32 {
    checksum_total(number) % 10
}

/// Returns true if the number passes the mod-10 walk.
///
/// An empty string has a total of 0 and therefore passes; brand detection is
/// what rejects it in [`crate::CardRecord::check`].
#[inline]
pub fn passes(number: &str) -> bool {
    mod10(number) == 0
}

/// Computes the digit that makes `partial` followed by it pass the walk.
///
/// Returns `None` if `partial` contains anything but ASCII digits.
///
/// ```
/// use card_record::luhn::check_digit;
///
/// assert_eq!(check_digit("411111111111111"), Some(1));
/// assert_eq!(check_digit("4111-1111"), None);
/// ```
pub fn check_digit(partial: &str) -> Option<u8> {
    if !partial.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // The appended digit sits at the kept position, so every digit of
    // `partial` moves one place to the left: odd positions from its right
    // end are doubled.
    let sum: u32 = partial
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize]
            } else {
                d
            }
        })
        .sum();

    Some(((10 - (sum % 10)) % 10) as u8)
}
