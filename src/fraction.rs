use crate::error::AmountFormatError;
use crate::pow10;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Pow, Zero};
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::str::FromStr;

/// Exact rational number carrying a token amount.
///
/// De/serializes with string-encoded numerator and denominator so that values
/// survive the JSON boundary without precision loss. Not required to be in
/// lowest terms; every algorithm in this crate tolerates unreduced fractions
/// such as `6/4`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// The denominator is not checked here; operations that divide return
    /// [`AmountFormatError::DivisionByZero`] when it is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Fraction { Fraction { numer, denom } }

    /// A raw on-chain amount over `10^decimals`.
    pub fn from_units(amount: BigInt, decimals: u32) -> Fraction {
        Fraction {
            numer: amount,
            denom: pow10(decimals),
        }
    }

    /// Numerator
    pub fn numer(&self) -> &BigInt { &self.numer }

    /// Denominator
    pub fn denom(&self) -> &BigInt { &self.denom }

    pub fn is_zero(&self) -> bool { self.numer.is_zero() }

    /// Reduces the fraction to lowest terms and moves the sign onto the
    /// numerator. Zero canonicalizes to `0/1`.
    pub fn simplify(&self) -> Result<Fraction, AmountFormatError> {
        if self.denom.is_zero() {
            return Err(AmountFormatError::DivisionByZero);
        }
        if self.numer.is_zero() {
            return Ok(Fraction {
                numer: BigInt::zero(),
                denom: BigInt::one(),
            });
        }
        let common = BigInt::from(gcd(self.numer.magnitude().clone(), self.denom.magnitude().clone()));
        let mut numer = &self.numer / &common;
        let mut denom = &self.denom / &common;
        if denom.sign() == Sign::Minus {
            numer = -numer;
            denom = -denom;
        }
        Ok(Fraction { numer, denom })
    }

    /// Exact decimal representation of the fraction.
    pub fn to_decimal(&self) -> Result<BigDecimal, AmountFormatError> {
        if self.denom.is_zero() {
            return Err(AmountFormatError::DivisionByZero);
        }
        Ok(BigDecimal::from(self.numer.clone()) / BigDecimal::from(self.denom.clone()))
    }
}

/// Euclidean algorithm on magnitudes, `gcd(0, x) = x`.
fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

impl From<BigRational> for Fraction {
    fn from(ratio: BigRational) -> Fraction {
        let (numer, denom) = ratio.into();
        Fraction { numer, denom }
    }
}

impl From<Fraction> for BigRational {
    fn from(fraction: Fraction) -> Self { BigRational::new(fraction.numer, fraction.denom) }
}

impl From<BigDecimal> for Fraction {
    fn from(dec: BigDecimal) -> Fraction {
        let (numer, scale) = dec.as_bigint_and_exponent();
        let ten = BigInt::from(10u32);
        if scale >= 0 {
            Fraction {
                numer,
                denom: ten.pow(scale as u64),
            }
        } else {
            Fraction {
                numer: numer * ten.pow((-scale) as u64),
                denom: BigInt::one(),
            }
        }
    }
}

impl From<u64> for Fraction {
    fn from(n: u64) -> Fraction { Fraction::new(n.into(), BigInt::one()) }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Fraction { Fraction::new(n.into(), BigInt::one()) }
}

impl From<(u64, u64)> for Fraction {
    fn from(tuple: (u64, u64)) -> Fraction { Fraction::new(tuple.0.into(), tuple.1.into()) }
}

/// Useful for tests
impl From<&'static str> for Fraction {
    fn from(str: &'static str) -> Fraction {
        let num: BigDecimal = str.parse().expect("Input should be string representing decimal num");
        num.into()
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Fraction", 2)?;
        state.serialize_field("numer", &self.numer.to_string())?;
        state.serialize_field("denom", &self.denom.to_string())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FractionHelper {
            numer: String,
            denom: String,
        }

        fn parse_part<E: de::Error>(part: &str) -> Result<BigInt, E> {
            part.parse()
                .map_err(|e| E::custom(format!("could not parse BigInt from str {}, err {}", part, e)))
        }

        let helper: FractionHelper = Deserialize::deserialize(deserializer)?;
        let numer = parse_part(&helper.numer)?;
        let denom = parse_part(&helper.denom)?;
        if denom.is_zero() {
            return Err(de::Error::custom("denom can not be 0"));
        }
        Ok(Fraction { numer, denom })
    }
}

/// Deserializes a [`Fraction`] from any of the amount forms upstream services
/// emit over JSON:
/// 1. decimal string, e.g. `"0.1"`,
/// 2. big rational representation,
/// 3. fraction object, e.g. `{ "numer": "2", "denom": "3" }`.
///
/// IMPORTANT: works properly from JSON only, use the concrete types directly
/// for other serde implementations.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Fraction, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;

    if let Ok(dec) = BigDecimal::from_str(raw.get().trim_matches('"')) {
        return Ok(dec.into());
    }

    if let Ok(rat) = serde_json::from_str::<BigRational>(raw.get()) {
        return Ok(rat.into());
    }

    if let Ok(fraction) = serde_json::from_str::<Fraction>(raw.get()) {
        return Ok(fraction);
    }

    Err(de::Error::custom(format!(
        "could not deserialize a token amount from {}",
        raw.get()
    )))
}
