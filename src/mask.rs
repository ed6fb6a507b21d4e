//! Masking of card numbers for display and logging.
//!
//! Only the last four digits of a number are ever shown. Everything else is
//! replaced with `*`, grouped by four.

/// Masks a card number showing only the last 4 digits.
///
/// Non-digit characters are dropped first. Numbers of 4 digits or fewer are
/// masked entirely.
///
/// # Example
///
/// ```
/// use card_record::mask::mask_number;
///
/// assert_eq!(mask_number("4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_number("378282246310005"), "****-****-***0005");
/// assert_eq!(mask_number("123"), "***");
/// ```
pub fn mask_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&digits[len - 4..]);
    result
}

/// Returns the last 4 digits of a number, or an empty string if it has fewer.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
