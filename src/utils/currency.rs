//! Currency formatting helpers.
//!
//! Fixed locale convention: `,` thousands separator, `.` decimal point,
//! always exactly two fraction digits.

use bigdecimal::BigDecimal;
use bigdecimal::RoundingMode;

/// Format a monetary amount with exactly two fraction digits and thousands
/// separators.
///
/// Zero and negative amounts format without special-casing:
/// `-1234.5` becomes `-1,234.50`.
pub fn format_amount(amount: &BigDecimal) -> String {
    let scaled = amount.with_scale_round(2, RoundingMode::HalfUp);
    let plain = scaled.to_string();

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Insert a `,` every three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn amount(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_two_fraction_digits_always() {
        assert_eq!(format_amount(&amount("150")), "150.00");
        assert_eq!(format_amount(&amount("150.0")), "150.00");
        assert_eq!(format_amount(&amount("150.00")), "150.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_amount(&amount("1234.5")), "1,234.50");
        assert_eq!(format_amount(&amount("1000")), "1,000.00");
        assert_eq!(format_amount(&amount("999")), "999.00");
        assert_eq!(format_amount(&amount("1234567.89")), "1,234,567.89");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(format_amount(&amount("0")), "0.00");
        assert_eq!(format_amount(&amount("-42.1")), "-42.10");
        assert_eq!(format_amount(&amount("-1234.5")), "-1,234.50");
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(format_amount(&amount("0.005")), "0.01");
        assert_eq!(format_amount(&amount("2.999")), "3.00");
    }

    proptest! {
        #[test]
        fn prop_always_two_fraction_digits(cents in -1_000_000_000i64..1_000_000_000i64) {
            let value = BigDecimal::new(cents.into(), 2);
            let formatted = format_amount(&value);
            let (_, frac) = formatted.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
            prop_assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn prop_groups_are_well_formed(cents in 0i64..1_000_000_000i64) {
            let value = BigDecimal::new(cents.into(), 2);
            let formatted = format_amount(&value);
            let (int_part, _) = formatted.split_once('.').unwrap();
            let groups: Vec<&str> = int_part.split(',').collect();
            // First group 1..=3 digits, every later group exactly 3
            prop_assert!((1..=3).contains(&groups[0].len()));
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
