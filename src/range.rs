use crate::error::AmountFormatError;
use crate::expand::to_decimal_parts;
use crate::fraction::Fraction;
use crate::human::{format_human, zero_skip_marker, ELLIPSIS, ZERO_SKIP_THRESHOLD};
use crate::options::FormatOptions;

/// Joins the two bounds when no compression applies.
const RANGE_SEP: &str = " – ";
/// Shown for a bound with no distinguishing digits left at the displayed
/// width. Display convenience only, not a numeric placeholder.
const EMPTY_TAIL: &str = "∅";

/// Renders two bounds of a range as one compressed expression when they share
/// the same tiny magnitude.
///
/// Both bounds must expand to a zero integer part with equal leading-zero
/// runs of at least 4 for compression to apply; the shared zero-skip marker
/// and common digit prefix are then emitted once, with the diverging tails
/// bracketed: `0.₍6₎1234[56–99]`. Anything else falls back to formatting each
/// bound independently.
pub fn format_range(lower: &Fraction, upper: &Fraction, opts: &FormatOptions) -> Result<String, AmountFormatError> {
    let parts_lower = to_decimal_parts(lower, opts.max_frac_digits)?;
    let parts_upper = to_decimal_parts(upper, opts.max_frac_digits)?;

    let fallback = |opts: &FormatOptions| -> Result<String, AmountFormatError> {
        Ok(format!(
            "{}{}{}",
            format_human(lower, opts)?,
            RANGE_SEP,
            format_human(upper, opts)?
        ))
    };

    // compression only makes sense when both bounds live strictly below 1
    // on the same side of zero
    if parts_lower.int_part != parts_upper.int_part
        || parts_lower.int_part != "0"
        || parts_lower.sign != parts_upper.sign
    {
        return fallback(opts);
    }

    let frac_lower = parts_lower.frac_digits.as_str();
    let frac_upper = parts_upper.frac_digits.as_str();
    let zeros_lower = frac_lower.bytes().take_while(|b| *b == b'0').count();
    let zeros_upper = frac_upper.bytes().take_while(|b| *b == b'0').count();
    if zeros_lower != zeros_upper || zeros_lower < ZERO_SKIP_THRESHOLD {
        return fallback(opts);
    }

    // mantissa-limited tails past the shared zero run
    let end_lower = (zeros_lower + opts.mantissa_digits).min(frac_lower.len());
    let end_upper = (zeros_upper + opts.mantissa_digits).min(frac_upper.len());
    let tail_lower = &frac_lower[zeros_lower..end_lower];
    let tail_upper = &frac_upper[zeros_upper..end_upper];

    let shared = tail_lower
        .bytes()
        .zip(tail_upper.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    let rest_lower = if shared < tail_lower.len() { &tail_lower[shared..] } else { EMPTY_TAIL };
    let rest_upper = if shared < tail_upper.len() { &tail_upper[shared..] } else { EMPTY_TAIL };

    let hidden = parts_lower.truncated
        || parts_upper.truncated
        || end_lower < frac_lower.len()
        || end_upper < frac_upper.len();

    let sign = if parts_lower.sign < 0 { "-" } else { "" };
    let mut out = format!(
        "{}0{}{}{}[{}–{}]",
        sign,
        opts.decimal_sep,
        zero_skip_marker(zeros_lower, opts.use_subscript),
        &tail_lower[..shared],
        rest_lower,
        rest_upper
    );
    if hidden {
        out.push_str(ELLIPSIS);
    }
    Ok(out)
}
