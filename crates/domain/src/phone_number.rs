//! Canonicalization of North American phone numbers.
//!
//! Only the digits of the input matter. Ten digits form a local number,
//! eleven digits with a leading `1` form a number with country code. Anything
//! else is not blockable.

/// Returns only the ASCII digits of `raw`, in order.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A number is valid when it has exactly 10 digits, or 11 digits starting
/// with `1`. Separators and any other characters are ignored.
pub fn validate(raw: &str) -> bool {
    let cleaned = digits(raw);
    cleaned.len() == 10 || (cleaned.len() == 11 && cleaned.starts_with('1'))
}

/// Formats a number as `(DDD) DDD-DDDD` or `1-(DDD) DDD-DDDD`.
///
/// Input that is not a valid number is returned unchanged, so lookups on
/// arbitrary strings still have a key to search with.
pub fn normalize(raw: &str) -> String {
    let cleaned = digits(raw);

    match cleaned.len() {
        10 => format!("({}) {}-{}", &cleaned[..3], &cleaned[3..6], &cleaned[6..]),
        11 if cleaned.starts_with('1') => format!(
            "1-({}) {}-{}",
            &cleaned[1..4],
            &cleaned[4..7],
            &cleaned[7..]
        ),
        _ => raw.to_string(),
    }
}
