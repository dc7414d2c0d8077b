use crate::error::AmountFormatError;
use crate::expand::to_decimal_parts;
use crate::fraction::Fraction;
use crate::human::{format_human, zero_skip_marker, SUBSCRIPT_OPEN, ZERO_SKIP_THRESHOLD};
use crate::options::FormatOptions;
use crate::pow10;
use num_bigint::BigInt;
use num_traits::Zero;

/// Space-constrained rendering of a raw on-chain amount.
///
/// At or above unit magnitude the fractional part is cut to exactly 2 digits
/// and zero-padded (`12` -> `12.00`); below it the first 3 significant digits
/// are shown, behind a zero-skip marker once the first non-zero digit sits
/// past the third fractional position. Truncates, never rounds:
/// `1.999999` -> `1.99`.
pub fn format_compact(value: &BigInt, decimals: u32, opts: &FormatOptions) -> Result<String, AmountFormatError> {
    if value.is_zero() {
        return Ok("0".to_owned());
    }
    let scale = pow10(decimals);
    let fraction = Fraction::new(value.clone(), scale.clone());
    let human = format_human(&fraction, opts)?;

    // magnitude test on the integers themselves, not on the formatted string
    if value.magnitude() >= scale.magnitude() {
        let (int_str, frac_str) = match human.split_once(opts.decimal_sep) {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (human.as_str(), ""),
        };
        let mut frac: String = frac_str.chars().filter(|c| c.is_ascii_digit()).take(2).collect();
        while frac.len() < 2 {
            frac.push('0');
        }
        return Ok(format!("{}{}{}", int_str, opts.decimal_sep, frac));
    }

    // a zero-skip rendering is already as compact as it gets
    if human.contains(SUBSCRIPT_OPEN) || (!opts.use_subscript && human.contains('(')) {
        return Ok(human);
    }

    let parts = to_decimal_parts(&fraction, opts.max_frac_digits)?;
    let frac = parts.frac_digits.as_str();
    let zeros = frac.bytes().take_while(|b| *b == b'0').count();
    if zeros == frac.len() {
        // every expanded digit was zero, nothing displayable at this scale
        return Ok("0".to_owned());
    }
    let sign = if parts.sign < 0 { "-" } else { "" };
    let shown_end = (zeros + 3).min(frac.len());
    if zeros < ZERO_SKIP_THRESHOLD - 1 {
        Ok(format!("{}0{}{}", sign, opts.decimal_sep, &frac[..shown_end]))
    } else {
        Ok(format!(
            "{}0{}{}{}",
            sign,
            opts.decimal_sep,
            zero_skip_marker(zeros, opts.use_subscript),
            &frac[zeros..shown_end]
        ))
    }
}

#[cfg(test)]
mod compact_tests {
    use super::*;
    use crate::options::{EN_FORMAT, PLAIN_FORMAT};

    fn compact(value: i64, decimals: u32) -> String {
        format_compact(&BigInt::from(value), decimals, &EN_FORMAT).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(compact(0, 18), "0");
    }

    #[test]
    fn test_above_one_pads_to_two_digits() {
        assert_eq!(compact(12, 0), "12.00");
        assert_eq!(compact(123, 1), "12.30");
        assert_eq!(compact(12345678, 4), "1,234.56");
    }

    #[test]
    fn test_above_one_truncates_never_rounds() {
        assert_eq!(compact(1999999, 6), "1.99");
        assert_eq!(compact(1009999, 6), "1.00");
    }

    #[test]
    fn test_exactly_one() {
        assert_eq!(compact(1000000, 6), "1.00");
    }

    #[test]
    fn test_below_one_three_significant_digits() {
        assert_eq!(compact(123456, 6), "0.123");
        assert_eq!(compact(12345, 6), "0.0123");
        assert_eq!(compact(1234, 6), "0.00123");
    }

    #[test]
    fn test_below_one_marker_past_third_position() {
        // first non-zero digit at the 4th fractional position
        assert_eq!(compact(123, 6), "0.₍3₎123");
        assert_eq!(
            format_compact(&BigInt::from(123), 6, &PLAIN_FORMAT).unwrap(),
            "0.(3)123"
        );
    }

    #[test]
    fn test_below_one_keeps_human_zero_skip() {
        assert_eq!(compact(123456789, 16), "0.₍7₎123456…");
    }

    #[test]
    fn test_short_tail_below_one() {
        assert_eq!(compact(5, 2), "0.05");
        assert_eq!(compact(5, 1), "0.5");
    }

    #[test]
    fn test_negative() {
        assert_eq!(compact(-1999999, 6), "-1.99");
        assert_eq!(compact(-1234, 6), "-0.00123");
    }

    #[test]
    fn test_display_level_underflow() {
        let mut opts = EN_FORMAT;
        opts.max_frac_digits = 3;
        // 1/10^8 expands to nothing but zeros within a 3 digit budget
        assert_eq!(format_compact(&BigInt::from(1), 8, &opts).unwrap(), "0");
    }
}
