use crate::error::AmountFormatError;
use crate::fraction::Fraction;
use crate::pow10;
use num_bigint::BigInt;

/// Converts a user-typed decimal literal into an exact fraction over
/// `10^decimals`.
///
/// Fractional digits beyond `decimals` are dropped, not rounded; user input
/// past the token's precision simply does not exist on chain. Anything other
/// than one optional sign, one optional `.` and digits is rejected with
/// [`AmountFormatError::MalformedLiteral`].
pub fn parse_decimal(literal: &str, decimals: u32) -> Result<Fraction, AmountFormatError> {
    let malformed = || AmountFormatError::MalformedLiteral(literal.to_owned());

    let trimmed = literal.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (int_str, frac_str) = match unsigned.split_once('.') {
        Some((int_str, frac_str)) => (int_str, frac_str),
        None => (unsigned, ""),
    };
    // a second separator lands in frac_str and fails the digit check
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(malformed());
    }
    if !int_str.bytes().all(|b| b.is_ascii_digit()) || !frac_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let decimals_len = decimals as usize;
    let mut digits = String::with_capacity(int_str.len() + decimals_len + 1);
    digits.push_str(if int_str.is_empty() { "0" } else { int_str });
    if frac_str.len() >= decimals_len {
        digits.push_str(&frac_str[..decimals_len]);
    } else {
        digits.push_str(frac_str);
        for _ in 0..decimals_len - frac_str.len() {
            digits.push('0');
        }
    }

    let mut numer: BigInt = digits.parse().map_err(|_| malformed())?;
    if negative {
        numer = -numer;
    }
    Ok(Fraction::new(numer, pow10(decimals)))
}
