//! # Modular — Modular Exponentiation and the Jacobi Symbol
//!
//! The number-theoretic layer under [`crate::primality`]: binary
//! square-and-multiply exponentiation and the Jacobi symbol via quadratic
//! reciprocity. Both operate on [`BigInt`] and reduce through
//! [`BigInt::rem_euclid`], so negative bases land in the canonical residue
//! class before any squaring starts.
//!
//! ## Algorithm
//!
//! [`mod_pow`] scans the exponent's bits low to high, squaring an accumulator
//! per bit and multiplying it into the result for set bits; every product is
//! reduced immediately, keeping intermediates below `modulus²`.
//!
//! [`jacobi`] is the binary algorithm: strip factors of two from the upper
//! argument (flipping the sign when the lower is ±3 mod 8), swap by quadratic
//! reciprocity (flipping when both are 3 mod 4), and reduce. It never
//! factors the lower argument.
//!
//! ## References
//!
//! - D. E. Knuth, "The Art of Computer Programming", vol. 2, §4.6.3
//! - Menezes, van Oorschot, Vanstone, "Handbook of Applied Cryptography",
//!   Algorithm 2.149
//! - <https://en.wikipedia.org/wiki/Jacobi_symbol>

use num_traits::{One, Zero};

use crate::bigint::BigInt;
use crate::error::Error;

/// `base^exponent mod modulus` by square-and-multiply.
///
/// The result is the least non-negative residue. A zero modulus is
/// [`Error::DivisionByZero`]; a negative modulus acts as its magnitude.
/// Negative exponents are a caller bug (they would need a modular inverse)
/// and are rejected in debug builds.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }
    debug_assert!(
        !exponent.is_negative(),
        "negative exponents require modular inverses"
    );
    let modulus = modulus.abs();
    if modulus.is_one() {
        return Ok(BigInt::zero());
    }
    let mut result = BigInt::one();
    let mut acc = base.rem_euclid(&modulus);
    let mut exp = exponent.abs();
    while !exp.is_zero() {
        let (half, bit) = exp.div_rem_word(2);
        if bit == 1 {
            result = &result * &acc % &modulus;
        }
        exp = half;
        if !exp.is_zero() {
            acc = &acc * &acc % &modulus;
        }
    }
    Ok(result)
}

/// Jacobi symbol `(a/n)`.
///
/// Defined for odd positive `n`; returns 0 when `n` is even, zero or
/// negative. Otherwise the value is ±1, or 0 exactly when `gcd(a, n) > 1`.
pub fn jacobi(a: &BigInt, n: &BigInt) -> i32 {
    if n.is_negative() || n.is_zero() || n.is_even() {
        return 0;
    }
    let mut a = a.clone();
    let mut n = n.clone();
    let mut sign = 1;
    if a.is_negative() {
        a = -a;
        if small_mod(&n, 4) == 3 {
            sign = -sign;
        }
    }
    while !a.is_zero() {
        while a.is_even() {
            a = a.div_rem_word(2).0;
            let r = small_mod(&n, 8);
            if r == 3 || r == 5 {
                sign = -sign;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if small_mod(&a, 4) == 3 && small_mod(&n, 4) == 3 {
            sign = -sign;
        }
        a = &a % &n;
    }
    if n.is_one() {
        sign
    } else {
        0
    }
}

fn small_mod(v: &BigInt, m: u32) -> u32 {
    v.div_rem_word(m).1
}
