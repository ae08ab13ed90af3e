//! Date and money display formatting.
//!
//! The mobile app receives dates in `dd-mm-YYYY` form and monetary
//! amounts as pre-formatted strings with a currency prefix, two decimal
//! places, and thousands grouping. Formatting happens once, at the
//! response boundary; stored values stay numeric.

use chrono::NaiveDate;

/// Format a date with the given `chrono` format string.
#[must_use]
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a monetary amount as `CUR 1,234.56`.
///
/// Amounts are rounded to two decimal places. Negative amounts carry a
/// leading minus sign before the currency code.
#[must_use]
pub fn fmt_money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{currency} {grouped}.{frac:02}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_default_convention() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        assert_eq!(format_date(date, "%d-%m-%Y"), "09-04-2023");
    }

    #[test]
    fn test_fmt_money_grouping() {
        assert_eq!(fmt_money(1_234_567.5, "INR"), "INR 1,234,567.50");
        assert_eq!(fmt_money(999.0, "INR"), "INR 999.00");
        assert_eq!(fmt_money(1000.0, "USD"), "USD 1,000.00");
    }

    #[test]
    fn test_fmt_money_rounds_to_cents() {
        assert_eq!(fmt_money(10.005, "INR"), "INR 10.01");
        assert_eq!(fmt_money(0.004, "INR"), "INR 0.00");
    }

    #[test]
    fn test_fmt_money_negative() {
        assert_eq!(fmt_money(-1250.75, "INR"), "-INR 1,250.75");
    }
}
