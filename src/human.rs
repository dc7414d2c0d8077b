use crate::error::AmountFormatError;
use crate::expand::to_decimal_parts;
use crate::fraction::Fraction;
use crate::options::FormatOptions;

/// Appended whenever exact digits are hidden by a display or iteration budget.
pub(crate) const ELLIPSIS: &str = "…";

/// Leading fractional zeros at or above this run length collapse into the
/// zero-count marker. Exactly 4: `0.000123` stays literal, `0.0000123` does
/// not.
pub(crate) const ZERO_SKIP_THRESHOLD: usize = 4;

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
pub(crate) const SUBSCRIPT_OPEN: char = '₍';
const SUBSCRIPT_CLOSE: char = '₎';

/// The zero-count marker itself: `₍7₎` or the ASCII fallback `(7)`.
pub(crate) fn zero_skip_marker(zeros: usize, use_subscript: bool) -> String {
    if !use_subscript {
        return format!("({})", zeros);
    }
    let mut marker = String::new();
    marker.push(SUBSCRIPT_OPEN);
    for digit in zeros.to_string().bytes() {
        marker.push(SUBSCRIPT_DIGITS[(digit - b'0') as usize]);
    }
    marker.push(SUBSCRIPT_CLOSE);
    marker
}

/// Thousands grouping from the right. `digits` must hold ASCII digits only,
/// the sign is handled by the caller.
pub(crate) fn group_digits(digits: &str, group_sep: &str) -> String {
    if group_sep.is_empty() || digits.len() <= 3 {
        return digits.to_owned();
    }
    let mut grouped = String::with_capacity(digits.len() + (digits.len() / 3) * group_sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(group_sep);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a fraction for human eyes.
///
/// Values at or above unit magnitude get a grouped integer part and the whole
/// expanded fractional tail. Values below it get up to `mantissa_digits`
/// fractional digits, with runs of 4 or more leading zeros compressed into
/// the zero-skip marker (`0.₍7₎1234…`). Digits are only ever dropped, never
/// rounded, and a trailing `…` flags that some were.
pub fn format_human(fraction: &Fraction, opts: &FormatOptions) -> Result<String, AmountFormatError> {
    let parts = to_decimal_parts(fraction, opts.max_frac_digits)?;
    if parts.sign == 0 {
        return Ok("0".to_owned());
    }
    let sign = if parts.sign < 0 { "-" } else { "" };

    if parts.int_part != "0" {
        let mut out = format!("{}{}", sign, group_digits(&parts.int_part, opts.group_sep));
        if !parts.frac_digits.is_empty() {
            out.push_str(opts.decimal_sep);
            out.push_str(&parts.frac_digits);
            if parts.truncated {
                out.push_str(ELLIPSIS);
            }
        }
        return Ok(out);
    }

    // magnitude below 1: the interesting part is the run of leading zeros
    let frac = parts.frac_digits.as_str();
    let zeros = frac.bytes().take_while(|b| *b == b'0').count();
    let shown_end = (zeros + opts.mantissa_digits).min(frac.len());
    let hidden = parts.truncated || shown_end < frac.len();

    let mut out = String::new();
    out.push_str(sign);
    out.push('0');
    out.push_str(opts.decimal_sep);
    if zeros >= ZERO_SKIP_THRESHOLD {
        out.push_str(&zero_skip_marker(zeros, opts.use_subscript));
        out.push_str(&frac[zeros..shown_end]);
    } else {
        out.push_str(&frac[..shown_end]);
    }
    if hidden {
        out.push_str(ELLIPSIS);
    }
    Ok(out)
}
