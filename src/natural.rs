//! # BigNat — Non-Negative Arbitrary-Precision Decimal Integers
//!
//! A newtype over [`BigInt`] closed under addition and multiplication but
//! not subtraction: subtracting a larger value from a smaller one is
//! [`Error::NegativeResult`] through [`BigNat::checked_sub`], and the `-`
//! operator panics on it the way `/` panics on zero. Literals never carry a
//! sign.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::bigint::BigInt;
use crate::error::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigNat(BigInt);

impl BigNat {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn digit_len(&self) -> usize {
        self.0.digit_len()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Subtraction that reports underflow instead of panicking.
    pub fn checked_sub(&self, rhs: &BigNat) -> Result<BigNat, Error> {
        if self.0 < rhs.0 {
            return Err(Error::NegativeResult);
        }
        Ok(BigNat(&self.0 - &rhs.0))
    }

    pub fn checked_div(&self, rhs: &BigNat) -> Result<BigNat, Error> {
        self.0.checked_div(&rhs.0).map(BigNat)
    }

    pub fn checked_rem(&self, rhs: &BigNat) -> Result<BigNat, Error> {
        self.0.checked_rem(&rhs.0).map(BigNat)
    }
}

impl TryFrom<BigInt> for BigNat {
    type Error = Error;

    fn try_from(v: BigInt) -> Result<Self, Error> {
        if v.is_negative() {
            return Err(Error::NegativeResult);
        }
        Ok(BigNat(v))
    }
}

impl From<u64> for BigNat {
    fn from(v: u64) -> Self {
        BigNat(BigInt::from(v))
    }
}

impl From<u32> for BigNat {
    fn from(v: u32) -> Self {
        BigNat(BigInt::from(v))
    }
}

impl FromStr for BigNat {
    type Err = Error;

    /// Unsigned decimal literals only; a leading sign is malformed here even
    /// though [`BigInt`] would accept it.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.starts_with('-') {
            return Err(Error::InvalidLiteral(s.to_string()));
        }
        Ok(BigNat(s.parse()?))
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for BigNat {
    type Output = BigNat;
    fn add(self, rhs: BigNat) -> BigNat {
        BigNat(self.0 + rhs.0)
    }
}

impl Mul for BigNat {
    type Output = BigNat;
    fn mul(self, rhs: BigNat) -> BigNat {
        BigNat(self.0 * rhs.0)
    }
}

impl Sub for BigNat {
    type Output = BigNat;

    /// # Panics
    ///
    /// Panics when `rhs > self`; [`BigNat::checked_sub`] reports it instead.
    fn sub(self, rhs: BigNat) -> BigNat {
        self.checked_sub(&rhs).expect("subtraction below zero")
    }
}

impl Div for BigNat {
    type Output = BigNat;
    fn div(self, rhs: BigNat) -> BigNat {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Rem for BigNat {
    type Output = BigNat;
    fn rem(self, rhs: BigNat) -> BigNat {
        self.checked_rem(&rhs).expect("division by zero")
    }
}

impl Zero for BigNat {
    fn zero() -> Self {
        BigNat(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for BigNat {
    fn one() -> Self {
        BigNat(BigInt::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(s: &str) -> BigNat {
        s.parse().unwrap()
    }

    #[test]
    fn parse_accepts_unsigned_literals_only() {
        assert_eq!(nat("007").to_string(), "7");
        assert_eq!(nat("0").to_string(), "0");
        for bad in ["-1", "-0", "", "1.5"] {
            assert_eq!(
                bad.parse::<BigNat>(),
                Err(Error::InvalidLiteral(bad.to_string())),
                "literal {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn closed_operations() {
        assert_eq!(nat("999") + nat("1"), nat("1000"));
        assert_eq!(nat("12345") * nat("6789"), nat("83810205"));
    }

    #[test]
    fn checked_sub_reports_underflow() {
        assert_eq!(nat("10").checked_sub(&nat("3")), Ok(nat("7")));
        assert_eq!(nat("10").checked_sub(&nat("10")), Ok(nat("0")));
        assert_eq!(nat("3").checked_sub(&nat("10")), Err(Error::NegativeResult));
    }

    #[test]
    #[should_panic(expected = "subtraction below zero")]
    fn sub_operator_panics_on_underflow() {
        let _ = nat("3") - nat("10");
    }

    #[test]
    fn checked_division() {
        assert_eq!(nat("7").checked_div(&nat("2")), Ok(nat("3")));
        assert_eq!(nat("7").checked_rem(&nat("2")), Ok(nat("1")));
        assert_eq!(nat("7").checked_div(&nat("0")), Err(Error::DivisionByZero));
        assert_eq!(nat("7").checked_rem(&nat("0")), Err(Error::DivisionByZero));
    }

    #[test]
    fn conversion_from_bigint_guards_the_sign() {
        assert_eq!(BigNat::try_from(BigInt::from(42u32)), Ok(nat("42")));
        assert_eq!(
            BigNat::try_from(BigInt::from(-1i64)),
            Err(Error::NegativeResult)
        );
    }

    #[test]
    fn ordering_follows_magnitude() {
        assert!(nat("99") < nat("100"));
        assert!(nat("0") < nat("1"));
    }
}
