//! # BigInt — Signed Arbitrary-Precision Decimal Integers
//!
//! Sign-and-magnitude integers over the decimal digit kernel in
//! [`crate::digits`]. Values are immutable: every operation borrows its
//! operands and returns a fresh result, so independent computations never
//! observe partial state.
//!
//! ## Operations
//!
//! The `std::ops` traits are implemented for owned and borrowed operands in
//! all combinations. `*` is the schoolbook product; the divide-and-conquer
//! strategies live in [`crate::karatsuba`] and [`crate::toom`] and agree with
//! it exactly. `/` and `%` panic on a zero divisor like the primitive integer
//! types; [`BigInt::div_rem`], [`BigInt::checked_div`] and
//! [`BigInt::checked_rem`] return `Result` instead.
//!
//! ## Division convention
//!
//! Quotients truncate toward zero and remainders take the dividend's sign,
//! uniformly across this type, [`crate::natural::BigNat`] and
//! [`crate::rational::Ratio`]. [`BigInt::rem_euclid`] yields the canonical
//! non-negative residue where the modular layer needs one.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::digits;
use crate::error::Error;

#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    negative: bool,
    /// Decimal digit values, most-significant first. Never empty; no leading
    /// zero unless the value is the single digit zero (then `negative` is
    /// false).
    digits: Vec<u8>,
}

impl BigInt {
    /// Build a value from a raw magnitude, normalizing leading zeros and the
    /// sign of zero.
    pub(crate) fn from_digits(negative: bool, mut digits: Vec<u8>) -> BigInt {
        digits::normalize(&mut digits);
        let negative = negative && !digits::is_zero(&digits);
        BigInt { negative, digits }
    }

    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Quotient and remainder by a machine word; the remainder is the
    /// magnitude's residue, the quotient keeps the dividend's sign.
    pub(crate) fn div_rem_word(&self, d: u32) -> (BigInt, u32) {
        let (q, r) = digits::div_rem_word(&self.digits, d);
        (BigInt::from_digits(self.negative, q), r)
    }

    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_even(&self) -> bool {
        self.digits.last().is_some_and(|&d| d % 2 == 0)
    }

    /// Number of decimal digits in the magnitude; zero has one digit.
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Decimal place-value shift: `self * 10^k`.
    #[must_use]
    pub fn mul_pow10(&self, k: usize) -> BigInt {
        BigInt {
            negative: self.negative,
            digits: digits::shift(&self.digits, k),
        }
    }

    /// Plain (non-modular) power by repeated squaring. `pow(0)` is one.
    #[must_use]
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Greatest common divisor of the magnitudes (Euclid). `gcd(0, 0)` is 0.
    #[must_use]
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Truncating division with remainder: the quotient's sign is the XOR of
    /// the operand signs, the remainder takes the dividend's sign, and
    /// `self == quotient * divisor + remainder` with `|remainder| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = digits::div_rem(&self.digits, &divisor.digits);
        Ok((
            BigInt::from_digits(self.negative != divisor.negative, q),
            BigInt::from_digits(self.negative, r),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Least non-negative residue of `self` modulo `m`.
    ///
    /// # Panics
    ///
    /// Panics when `m` is zero.
    #[must_use]
    pub fn rem_euclid(&self, m: &BigInt) -> BigInt {
        let r = self.checked_rem(m).expect("division by zero");
        if r.negative {
            r + m.abs()
        } else {
            r
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.magnitude_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        if self.negative {
            match mag.cmp(&i64::MIN.unsigned_abs()) {
                Ordering::Greater => None,
                Ordering::Equal => Some(i64::MIN),
                Ordering::Less => Some(-(mag as i64)),
            }
        } else {
            i64::try_from(mag).ok()
        }
    }

    fn magnitude_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &d in &self.digits {
            acc = acc.checked_mul(10)?.checked_add(u64::from(d))?;
        }
        Some(acc)
    }
}

// ── Construction & formatting ───────────────────────────────────────

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(Error::InvalidLiteral(s.to_string()));
        }
        let mut digits = Vec::with_capacity(body.len());
        for b in body.bytes() {
            if !b.is_ascii_digit() {
                return Err(Error::InvalidLiteral(s.to_string()));
            }
            digits.push(b - b'0');
        }
        Ok(BigInt::from_digits(negative, digits))
    }
}

fn digits_of(mut v: u64) -> Vec<u8> {
    if v == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(20);
    while v > 0 {
        out.push((v % 10) as u8);
        v /= 10;
    }
    out.reverse();
    out
}

impl From<u64> for BigInt {
    fn from(v: u64) -> Self {
        BigInt {
            negative: false,
            digits: digits_of(v),
        }
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        BigInt {
            negative: v < 0,
            digits: digits_of(v.unsigned_abs()),
        }
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        BigInt::from(u64::from(v))
    }
}

impl From<i32> for BigInt {
    fn from(v: i32) -> Self {
        BigInt::from(i64::from(v))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut buf = String::with_capacity(self.digits.len());
        for &d in &self.digits {
            buf.push(char::from(b'0' + d));
        }
        f.write_str(&buf)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

// ── Ordering ────────────────────────────────────────────────────────

impl Ord for BigInt {
    /// Sign first (negative < positive), then magnitude length, then
    /// lexicographic digits; the magnitude sense reverses when both are
    /// negative.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => digits::cmp(&self.digits, &other.digits),
            (true, true) => digits::cmp(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

fn add_ref(a: &BigInt, b: &BigInt) -> BigInt {
    if a.negative == b.negative {
        BigInt::from_digits(a.negative, digits::add(&a.digits, &b.digits))
    } else {
        // opposite signs: subtract the smaller magnitude from the larger;
        // the result takes the larger operand's sign
        match digits::cmp(&a.digits, &b.digits) {
            Ordering::Less => BigInt::from_digits(b.negative, digits::sub(&b.digits, &a.digits)),
            _ => BigInt::from_digits(a.negative, digits::sub(&a.digits, &b.digits)),
        }
    }
}

fn sub_ref(a: &BigInt, b: &BigInt) -> BigInt {
    if a.negative != b.negative {
        BigInt::from_digits(a.negative, digits::add(&a.digits, &b.digits))
    } else {
        // same signs: swap operands and flip the result sign when the
        // minuend's magnitude is smaller, keeping the digit loop non-negative
        match digits::cmp(&a.digits, &b.digits) {
            Ordering::Less => BigInt::from_digits(!a.negative, digits::sub(&b.digits, &a.digits)),
            _ => BigInt::from_digits(a.negative, digits::sub(&a.digits, &b.digits)),
        }
    }
}

fn mul_ref(a: &BigInt, b: &BigInt) -> BigInt {
    BigInt::from_digits(a.negative != b.negative, digits::mul(&a.digits, &b.digits))
}

fn div_ref(a: &BigInt, b: &BigInt) -> BigInt {
    a.div_rem(b).expect("division by zero").0
}

fn rem_ref(a: &BigInt, b: &BigInt) -> BigInt {
    a.div_rem(b).expect("division by zero").1
}

macro_rules! impl_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }
        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }
        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }
        impl $imp for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add, add_ref);
impl_binop!(Sub, sub, sub_ref);
impl_binop!(Mul, mul, mul_ref);
impl_binop!(Div, div, div_ref);
impl_binop!(Rem, rem, rem_ref);

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt {
            negative: false,
            digits: vec![0],
        }
    }

    fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt {
            negative: false,
            digits: vec![1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    // ── Parsing & formatting ────────────────────────────────────────

    #[test]
    fn parse_accepts_signs_and_leading_zeros() {
        assert_eq!(int("007").to_string(), "7");
        assert_eq!(int("-0").to_string(), "0");
        assert_eq!(int("-042").to_string(), "-42");
        assert_eq!(int("0").to_string(), "0");
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        for bad in ["", "-", "12a", "1.5", "+7", " 12", "--3"] {
            assert_eq!(
                bad.parse::<BigInt>(),
                Err(Error::InvalidLiteral(bad.to_string())),
                "literal {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["0", "7", "-7", "1234567890123456789012345678901234567890"] {
            assert_eq!(int(s).to_string(), s);
        }
    }

    // ── Ordering ────────────────────────────────────────────────────

    #[test]
    fn ordering_by_sign_length_then_digits() {
        assert!(int("-1") < int("0"));
        assert!(int("0") < int("1"));
        assert!(int("99") < int("100"));
        assert!(int("123") < int("124"));
        assert!(int("-100") < int("-99"), "magnitude sense reverses when negative");
        assert!(int("-124") < int("-123"));
        assert_eq!(int("00"), int("-0"));
    }

    // ── Addition & subtraction ──────────────────────────────────────

    #[test]
    fn add_handles_all_sign_combinations() {
        assert_eq!(int("999") + int("1"), int("1000"));
        assert_eq!(int("-5") + int("-6"), int("-11"));
        assert_eq!(int("5") + int("-6"), int("-1"));
        assert_eq!(int("-5") + int("6"), int("1"));
        assert_eq!(int("5") + int("-5"), int("0"));
    }

    #[test]
    fn sub_swaps_when_minuend_is_smaller() {
        assert_eq!(int("3") - int("10"), int("-7"));
        assert_eq!(int("10") - int("3"), int("7"));
        assert_eq!(int("-3") - int("-10"), int("7"));
        assert_eq!(int("-10") - int("-3"), int("-7"));
        assert_eq!(int("3") - int("-10"), int("13"));
    }

    #[test]
    fn neg_flips_sign_except_for_zero() {
        assert_eq!(-int("5"), int("-5"));
        assert_eq!(-int("-5"), int("5"));
        assert_eq!(-int("0"), int("0"));
        assert!(!(-int("0")).is_negative());
    }

    // ── Multiplication ──────────────────────────────────────────────

    #[test]
    fn mul_sign_is_xor_of_operand_signs() {
        assert_eq!(int("-5") * int("-13"), int("65"));
        assert_eq!(int("-5") * int("13"), int("-65"));
        assert_eq!(int("5") * int("-13"), int("-65"));
        assert_eq!(int("5") * int("13"), int("65"));
        assert_eq!(int("-5") * int("0"), int("0"));
    }

    #[test]
    fn mul_large_magnitudes() {
        assert_eq!(
            int("123456789123456789") * int("987654321987654321"),
            int("121932632103337905662094193112635269")
        );
    }

    // ── Division & remainder ────────────────────────────────────────

    /// Quotient truncates toward zero; remainder takes the dividend's sign.
    #[test]
    fn div_rem_sign_convention() {
        let cases = [
            ("7", "2", "3", "1"),
            ("-7", "2", "-3", "-1"),
            ("7", "-2", "-3", "1"),
            ("-7", "-2", "3", "-1"),
            ("6", "3", "2", "0"),
            ("2", "7", "0", "2"),
        ];
        for (a, b, q, r) in cases {
            let (quot, rem) = int(a).div_rem(&int(b)).unwrap();
            assert_eq!(quot, int(q), "{a} / {b}");
            assert_eq!(rem, int(r), "{a} % {b}");
        }
    }

    #[test]
    fn div_rem_satisfies_the_division_law() {
        let a = int("123456789123456789");
        let b = int("-9876543");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a);
        assert!(r.abs() < b.abs());
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(int("5").div_rem(&int("0")), Err(Error::DivisionByZero));
        assert_eq!(int("5").checked_div(&int("0")), Err(Error::DivisionByZero));
        assert_eq!(int("5").checked_rem(&int("0")), Err(Error::DivisionByZero));
    }

    #[test]
    fn rem_euclid_is_never_negative() {
        assert_eq!(int("-7").rem_euclid(&int("3")), int("2"));
        assert_eq!(int("7").rem_euclid(&int("3")), int("1"));
        assert_eq!(int("-9").rem_euclid(&int("3")), int("0"));
        assert_eq!(int("-7").rem_euclid(&int("-3")), int("2"));
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn gcd_known_values() {
        assert_eq!(int("270").gcd(&int("192")), int("6"));
        assert_eq!(int("-270").gcd(&int("192")), int("6"));
        assert_eq!(int("0").gcd(&int("5")), int("5"));
        assert_eq!(int("0").gcd(&int("0")), int("0"));
    }

    #[test]
    fn pow_by_repeated_squaring() {
        assert_eq!(int("2").pow(10), int("1024"));
        assert_eq!(int("10").pow(0), int("1"));
        assert_eq!(int("-3").pow(3), int("-27"));
        assert_eq!(int("2").pow(64), int("18446744073709551616"));
    }

    #[test]
    fn mul_pow10_appends_digits() {
        assert_eq!(int("42").mul_pow10(3), int("42000"));
        assert_eq!(int("-42").mul_pow10(1), int("-420"));
        assert_eq!(int("0").mul_pow10(5), int("0"));
    }

    #[test]
    fn digit_len_counts_the_magnitude() {
        assert_eq!(int("0").digit_len(), 1);
        assert_eq!(int("-12345").digit_len(), 5);
    }

    #[test]
    fn parity_checks() {
        assert!(int("0").is_even());
        assert!(int("-4").is_even());
        assert!(!int("7").is_even());
    }

    #[test]
    fn signum_of_each_sign() {
        assert_eq!(int("17").signum(), 1);
        assert_eq!(int("-17").signum(), -1);
        assert_eq!(int("0").signum(), 0);
        assert_eq!(int("-0").signum(), 0);
    }

    // ── Conversions ─────────────────────────────────────────────────

    #[test]
    fn native_conversions_round_trip() {
        assert_eq!(BigInt::from(0u64), int("0"));
        assert_eq!(BigInt::from(-123i64), int("-123"));
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(int("-123").to_i64(), Some(-123));
        assert_eq!(int("-123").to_u64(), None);
        assert_eq!(
            int("-9223372036854775808").to_i64(),
            Some(i64::MIN),
            "i64::MIN magnitude does not overflow the narrowing"
        );
        assert_eq!(int("9223372036854775808").to_i64(), None);
        assert_eq!(int("18446744073709551616").to_u64(), None);
    }
}
