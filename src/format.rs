//! Display helpers for Ugandan Shilling amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value with comma thousands separators, keeping only the
/// significant fractional digits.
///
/// ```
/// use paye_engine::format::group_thousands;
/// use rust_decimal::Decimal;
///
/// assert_eq!(group_thousands(Decimal::from(1_250_000)), "1,250,000");
/// assert_eq!(group_thousands(Decimal::new(9_000_050, 2)), "90,000.5");
/// ```
pub fn group_thousands(value: Decimal) -> String {
    group_digits(&value.normalize().to_string())
}

/// Formats an amount rounded to two decimal places with thousands
/// separators, e.g. `436,000.00`.
pub fn format_ugx(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    group_digits(&format!("{:.2}", rounded))
}

fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_group_thousands_small_values_have_no_separator() {
        assert_eq!(group_thousands(dec("0")), "0");
        assert_eq!(group_thousands(dec("999")), "999");
    }

    #[test]
    fn test_group_thousands_inserts_separators() {
        assert_eq!(group_thousands(dec("1000")), "1,000");
        assert_eq!(group_thousands(dec("410000")), "410,000");
        assert_eq!(group_thousands(dec("12345678")), "12,345,678");
    }

    #[test]
    fn test_group_thousands_drops_trailing_zeros() {
        assert_eq!(group_thousands(dec("90000.00")), "90,000");
        assert_eq!(group_thousands(dec("30.0")), "30");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(dec("-1234.5")), "-1,234.5");
    }

    #[test]
    fn test_format_ugx_uses_two_decimals() {
        assert_eq!(format_ugx(dec("436000")), "436,000.00");
        assert_eq!(format_ugx(dec("27000.5")), "27,000.50");
    }

    #[test]
    fn test_format_ugx_rounds_half_away_from_zero() {
        assert_eq!(format_ugx(dec("41666.665")), "41,666.67");
        assert_eq!(format_ugx(dec("0.004")), "0.00");
    }
}
