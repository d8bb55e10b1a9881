//! Boundary-input coercion for contact and vehicle fields
//!
//! Phone input arrives as free text from the collaborator and must be
//! tolerated in any partial or invalid shape without erroring. The
//! canonical `+1XXXXXXXXXX` form exists only once exactly ten digits are
//! present. Year input treats "unset" as a valid state, not a parse
//! failure.

/// Digits required for a complete North American number.
const PHONE_DIGITS: usize = 10;

/// Extract the digit characters from raw phone input, capped at ten.
fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// Progressive display formatting for partial phone input.
///
/// `"555"` → `"555"`, `"5551234"` → `"(555) 123-4"`, complete input →
/// `"(555) 123-4567"`. Never fails on junk; non-digits are dropped.
pub fn format_phone_partial(raw: &str) -> String {
    let d = phone_digits(raw);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

/// Canonical E.164-style form, produced only at exactly ten digits.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let d = phone_digits(raw);
    (d.len() == PHONE_DIGITS).then(|| format!("+1{d}"))
}

/// Parse a model-year field where empty input means "unset".
///
/// Invalid digits also coerce to unset rather than an error; the vehicle
/// gate does not depend on the year.
pub fn parse_year(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<u16>()
        .ok()
        .filter(|y| (1900..=2100).contains(y))
}
