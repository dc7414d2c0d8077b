use derive_more::Display;

/// The two failure modes of this crate. Every other edge case (zero values,
/// terminating vs repeating expansions, magnitude boundaries) is modeled as
/// data in the returned value, not as an error.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum AmountFormatError {
    /// A fraction with a zero denominator reached an operation that divides.
    #[display(fmt = "division by zero: fraction denominator is 0")]
    DivisionByZero,
    /// A decimal literal contained something other than one optional sign,
    /// one optional separator and digits.
    #[display(fmt = "malformed decimal literal '{}'", _0)]
    MalformedLiteral(String),
}

impl std::error::Error for AmountFormatError {}
