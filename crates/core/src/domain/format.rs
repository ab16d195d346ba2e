//! Numeric text rendering shared by letters and reports.
//!
//! Letters always show whole cents (`$668.00`). The report uses the shortest
//! decimal text that reads back to the same value (`16396.1`, `501.2`), so the
//! two paths are kept as separate functions.

/// Render an amount with exactly two decimal places.
pub fn fixed_two_decimals(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Render an amount with the shortest round-trip decimal text.
///
/// Whole values keep a single trailing `.0` so a column of amounts never
/// mixes integer-looking and decimal-looking cells.
pub fn default_rendering(amount: f64) -> String {
    let mut text = amount.to_string();
    if amount.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Round an amount to cents.
///
/// Rounding goes through the exact decimal expansion of the binary value, so
/// `326892.245` stored as `326892.24499..` rounds down rather than up.
pub fn round_cents(amount: f64) -> f64 {
    fixed_two_decimals(amount).parse().unwrap_or(amount)
}
