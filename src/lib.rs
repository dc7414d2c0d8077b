//! Exact-precision decimal presentation of on-chain token amounts.
//!
//! Token quantities arrive as arbitrary-precision integers paired with a
//! `decimals` exponent (e.g. 18 for most ERC-20 tokens). This crate turns such
//! values into human-readable decimal strings and back without ever touching
//! floating point: the expansion is plain long division on big integers, so
//! every digit shown is exact and anything dropped is reported through a
//! `truncated` flag instead of being rounded away.
//!
//! The building blocks, bottom up:
//! - [`Fraction`] - an exact rational number, de/serializable in human
//!   readable form at the JSON boundary.
//! - [`to_decimal_parts`] - bounded long division producing the exact digit
//!   sequence of a fraction.
//! - [`format_human`], [`format_compact`], [`format_range`] - display
//!   renderers on top of the expansion, including the zero-skip notation that
//!   compresses long runs of leading fractional zeros for tiny values.
//! - [`parse_decimal`] - the inverse path for user-typed decimal literals.

mod compact;
mod error;
mod expand;
mod fraction;
mod human;
mod options;
mod parse;
mod range;

pub use compact::format_compact;
pub use error::AmountFormatError;
pub use expand::{to_decimal_parts, DecimalParts};
pub use fraction::{deserialize_amount, Fraction};
pub use human::format_human;
pub use options::{FormatOptions, DEFAULT_MAX_FRAC_DIGITS, EN_FORMAT, EU_FORMAT, PLAIN_FORMAT};
pub use parse::parse_decimal;
pub use range::format_range;

pub use bigdecimal;
pub use num_bigint;
pub use num_rational;

pub use bigdecimal::BigDecimal;
pub use num_bigint::{BigInt, BigUint};
pub use num_rational::BigRational;

use num_traits::Pow;

/// `10^exp` as a `BigInt`, the denominator form shared by every
/// units-to-fraction conversion in this crate.
pub(crate) fn pow10(exp: u32) -> BigInt { BigInt::from(10u32).pow(exp) }
