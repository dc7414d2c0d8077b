use crate::error::AmountFormatError;
use crate::fraction::Fraction;
use num_traits::Zero;
use serde::Serialize;

/// Exact decimal expansion of a fraction, the input of every formatter.
///
/// `int_part` carries no sign and no leading zeros (except `"0"` itself).
/// `truncated` is set iff the long division was cut off by the digit budget
/// while the remainder was still non-zero; the digits present are exact
/// either way.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DecimalParts {
    pub sign: i8,
    pub int_part: String,
    pub frac_digits: String,
    pub truncated: bool,
}

/// Long division of `fraction` producing up to `max_frac_digits` exact
/// fractional digits.
///
/// The budget bounds the work done on repeating decimals such as `1/3`; it is
/// the only resource control in this crate and is checked before a digit is
/// produced, never after.
pub fn to_decimal_parts(fraction: &Fraction, max_frac_digits: usize) -> Result<DecimalParts, AmountFormatError> {
    if fraction.denom().is_zero() {
        return Err(AmountFormatError::DivisionByZero);
    }
    // checked before any division so zero never renders as "0."
    if fraction.numer().is_zero() {
        return Ok(DecimalParts {
            sign: 0,
            int_part: "0".to_owned(),
            frac_digits: String::new(),
            truncated: false,
        });
    }

    let sign = if fraction.numer().sign() == fraction.denom().sign() { 1 } else { -1 };
    let n = fraction.numer().magnitude();
    let d = fraction.denom().magnitude();

    let int_part = (n / d).to_string();
    let mut r = n % d;
    let mut frac_digits = String::new();
    if !r.is_zero() {
        for _ in 0..max_frac_digits {
            r = r * 10u32;
            let digit = &r / d;
            r = r % d;
            frac_digits.push_str(&digit.to_string());
            if r.is_zero() {
                break;
            }
        }
    }

    Ok(DecimalParts {
        sign,
        int_part,
        frac_digits,
        truncated: !r.is_zero(),
    })
}

#[cfg(test)]
mod expand_tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::Pow;

    fn parts(numer: i64, denom: i64, max_frac_digits: usize) -> DecimalParts {
        to_decimal_parts(&Fraction::new(numer.into(), denom.into()), max_frac_digits).unwrap()
    }

    #[test]
    fn test_zero_numer() {
        let expected = DecimalParts {
            sign: 0,
            int_part: "0".to_owned(),
            frac_digits: String::new(),
            truncated: false,
        };
        assert_eq!(expected, parts(0, 7, 200));
        assert_eq!(expected, parts(0, -7, 200));
    }

    #[test]
    fn test_zero_denom() {
        let err = to_decimal_parts(&Fraction::new(1.into(), 0.into()), 200).unwrap_err();
        assert_eq!(err, AmountFormatError::DivisionByZero);
    }

    #[test]
    fn test_terminating() {
        let quarter = parts(1, 4, 200);
        assert_eq!(quarter.sign, 1);
        assert_eq!(quarter.int_part, "0");
        assert_eq!(quarter.frac_digits, "25");
        assert!(!quarter.truncated);

        let twentieth = parts(1, 20, 200);
        assert_eq!(twentieth.frac_digits, "05");
        assert!(!twentieth.truncated);

        let exact = parts(3, 1, 200);
        assert_eq!(exact.int_part, "3");
        assert_eq!(exact.frac_digits, "");
        assert!(!exact.truncated);
    }

    #[test]
    fn test_repeating_hits_budget() {
        let third = parts(1, 3, 5);
        assert_eq!(third.int_part, "0");
        assert_eq!(third.frac_digits, "33333");
        assert!(third.truncated);

        let sevenths = parts(22, 7, 10);
        assert_eq!(sevenths.int_part, "3");
        assert_eq!(sevenths.frac_digits, "1428571428");
        assert!(sevenths.truncated);
    }

    #[test]
    fn test_unreduced_input() {
        let unreduced = parts(6, 4, 200);
        assert_eq!(unreduced.int_part, "1");
        assert_eq!(unreduced.frac_digits, "5");
        assert!(!unreduced.truncated);
    }

    #[test]
    fn test_sign_combinations() {
        assert_eq!(parts(-1, 4, 200).sign, -1);
        assert_eq!(parts(1, -4, 200).sign, -1);
        assert_eq!(parts(-1, -4, 200).sign, 1);
    }

    #[test]
    fn test_budget_growth_never_changes_digits() {
        // increasing the budget only appends, already-emitted digits are stable
        let mut previous = String::new();
        for budget in [1usize, 3, 7, 20, 100] {
            let expansion = parts(1234, 9999, budget);
            assert!(expansion.frac_digits.starts_with(&previous));
            previous = expansion.frac_digits;
        }
    }

    #[test]
    fn test_beyond_128_bits() {
        // 2^200 / 10^18 stays exact where native integers would overflow
        let numer = BigInt::from(2u32).pow(200u32);
        let fraction = Fraction::from_units(numer, 18);
        let expansion = to_decimal_parts(&fraction, 200).unwrap();
        assert_eq!(expansion.int_part, "1606938044258990275541962092341162602522202");
        assert_eq!(expansion.frac_digits, "993782792835301376");
        assert!(!expansion.truncated);
    }

    #[test]
    fn test_zero_budget_flags_truncation() {
        let cut = parts(1, 3, 0);
        assert_eq!(cut.frac_digits, "");
        assert!(cut.truncated);
    }
}
