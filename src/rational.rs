//! # Rational — Exact Fractions over Integral Types
//!
//! [`Ratio<T>`] keeps a numerator and denominator in lowest terms with a
//! positive denominator; every constructor and operator re-establishes that
//! canonical form, so derived equality is value equality. The component type
//! only needs the [`Integral`] bundle of comparison and ring operations,
//! which [`BigInt`](crate::bigint::BigInt) and the signed machine integers
//! satisfy; [`BigRational`] is the arbitrary-precision alias.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::Error;

/// The operations [`Ratio`] needs from its component type: cloning, total
/// order, zero and one, and the signed ring operators.
pub trait Integral:
    Clone
    + Ord
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
}

impl<T> Integral for T where
    T: Clone
        + Ord
        + Zero
        + One
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>
{
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

pub type BigRational = Ratio<crate::bigint::BigInt>;

impl<T: Integral> Ratio<T> {
    /// Build `numer/denom` in canonical form. A zero denominator is
    /// [`Error::InvalidDenominator`].
    pub fn new(numer: T, denom: T) -> Result<Self, Error> {
        if denom.is_zero() {
            return Err(Error::InvalidDenominator);
        }
        Ok(Ratio { numer, denom }.reduced())
    }

    pub fn from_integer(v: T) -> Self {
        Ratio {
            numer: v,
            denom: T::one(),
        }
    }

    pub fn numer(&self) -> &T {
        &self.numer
    }

    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ratio::new(
            self.numer.clone() * rhs.denom.clone(),
            self.denom.clone() * rhs.numer.clone(),
        )
    }

    /// Divide out the gcd and move the sign to the numerator. The
    /// denominator must already be nonzero.
    fn reduced(self) -> Self {
        let g = gcd(abs(self.numer.clone()), abs(self.denom.clone()));
        let mut numer = self.numer / g.clone();
        let mut denom = self.denom / g;
        if denom < T::zero() {
            numer = -numer;
            denom = -denom;
        }
        Ratio { numer, denom }
    }
}

fn abs<T: Integral>(v: T) -> T {
    if v < T::zero() {
        -v
    } else {
        v
    }
}

fn gcd<T: Integral>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: Integral> Add for Ratio<T> {
    type Output = Ratio<T>;
    fn add(self, rhs: Ratio<T>) -> Ratio<T> {
        Ratio {
            numer: self.numer * rhs.denom.clone() + rhs.numer * self.denom.clone(),
            denom: self.denom * rhs.denom,
        }
        .reduced()
    }
}

impl<T: Integral> Sub for Ratio<T> {
    type Output = Ratio<T>;
    fn sub(self, rhs: Ratio<T>) -> Ratio<T> {
        Ratio {
            numer: self.numer * rhs.denom.clone() - rhs.numer * self.denom.clone(),
            denom: self.denom * rhs.denom,
        }
        .reduced()
    }
}

impl<T: Integral> Mul for Ratio<T> {
    type Output = Ratio<T>;
    fn mul(self, rhs: Ratio<T>) -> Ratio<T> {
        Ratio {
            numer: self.numer * rhs.numer,
            denom: self.denom * rhs.denom,
        }
        .reduced()
    }
}

impl<T: Integral> Div for Ratio<T> {
    type Output = Ratio<T>;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; [`Ratio::checked_div`] reports it instead.
    fn div(self, rhs: Ratio<T>) -> Ratio<T> {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl<T: Integral> Neg for Ratio<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Ratio<T> {
        Ratio {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

// ── Parsing & formatting ────────────────────────────────────────────

impl<T> FromStr for Ratio<T>
where
    T: Integral + FromStr<Err = Error>,
{
    type Err = Error;

    /// Accepts `numer/denom` or a bare integer literal.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.split_once('/') {
            Some((n, d)) => Ratio::new(n.parse()?, d.parse()?),
            None => Ok(Ratio::from_integer(s.parse()?)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
