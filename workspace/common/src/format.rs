//! Display formatting for forecast values.
//!
//! Every formatter rounds to two decimals (half away from zero) through
//! `rust_decimal` so the output does not depend on binary float artifacts.
//! Absent or non-finite input never panics; it renders as [`PLACEHOLDER`].

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rendered in place of a value that is missing or cannot be represented.
pub const PLACEHOLDER: &str = "n/a";

pub const CURRENCY_SYMBOL: &str = "$";

fn round_two(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // "-0.00" is noise
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Plain two-decimal number, e.g. `6200.12`.
pub fn format_number(value: Option<f64>) -> String {
    match value.and_then(round_two) {
        Some(rounded) => format!("{:.2}", rounded),
        None => PLACEHOLDER.to_string(),
    }
}

/// Currency amount with symbol and thousands separators, e.g. `-$1,234.50`.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(rounded) = value.and_then(round_two) else {
        return PLACEHOLDER.to_string();
    };

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let unsigned = format!("{:.2}", rounded.abs());
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(integer), fraction)
}

/// Percentage with two decimals, e.g. `46.19%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value.and_then(round_two) {
        Some(rounded) => format!("{:.2}%", rounded),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed percentage change, e.g. `+73.01%` or `-4.20%`.
pub fn format_signed_percent(value: Option<f64>) -> String {
    match value.and_then(round_two) {
        Some(rounded) if rounded.is_sign_positive() && !rounded.is_zero() => {
            format!("+{:.2}%", rounded)
        }
        Some(rounded) => format!("{:.2}%", rounded),
        None => PLACEHOLDER.to_string(),
    }
}

/// ISO date label used on chart axes and tables.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reads back any string produced by the formatters in this module.
///
/// Returns `None` for the placeholder and for unparsable input.
pub fn parse_display_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '+') && !c.is_whitespace())
        .collect();
    let cleaned = cleaned.replacen(CURRENCY_SYMBOL, "", 1);

    if cleaned.is_empty() || cleaned == PLACEHOLDER {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
