//! Basic card record example.
//!
//! Run with: `RUST_LOG=card_record=debug cargo run --example basic`

use card_record::{detect_type_name, mask, CardRecord};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Card Record Validation ===\n");

    // Example 1: A full record
    let mut card = CardRecord::new("5500005555555559", "Jane Doe", "2025/01", "123");
    println!("Record: {:?}", card);
    println!("  Valid: {}", if card.check() { "yes" } else { "no" });
    println!("  Type: {}", card.card_type().unwrap_or("-"));
    println!(
        "  Expiry (YYMM): {}",
        card.expiry().map(|e| e.as_str()).unwrap_or("-")
    );
    println!();

    // Example 2: Quick checks
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("201400000000009", "enRoute"),
        ("5500005555555550", "Invalid (bad checksum)"),
        ("1234567890", "Invalid (unknown type)"),
    ];

    println!("Quick validation checks:");
    let mut card = CardRecord::default();
    for (number, description) in test_cards {
        card.set_number(number);
        let valid = card.check();
        println!(
            "  {} - {} [{}]: {}",
            mask::mask_number(number),
            description,
            detect_type_name(number).unwrap_or("?"),
            if valid {
                "VALID".to_string()
            } else {
                format!("INVALID ({})", card.error().unwrap_or("unknown error"))
            }
        );
    }
    println!();

    // Example 3: Expiry formats
    println!("Expiry normalization:");
    for raw in ["25/01", "2501", "202501", "25-01", "1", "abcde"] {
        let mut card = CardRecord::default();
        if card.set_expiry(raw) {
            println!("  {:>8} -> {}", raw, card.expiry().map(|e| e.as_str()).unwrap_or(""));
        } else {
            println!("  {:>8} -> {}", raw, card.error().unwrap_or("?"));
        }
    }
}
