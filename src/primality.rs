//! # Primality — Probabilistic and Deterministic Primality Tests
//!
//! Three testers over [`BigInt`]: Solovay-Strassen and Miller-Rabin as
//! Monte-Carlo compositeness tests, plus the deterministic Lucas-Lehmer test
//! for Mersenne numbers. The probabilistic tests take the witness generator
//! as an explicit `&mut R: Rng`, so callers control seeding and a fixed seed
//! reproduces the exact witness sequence.
//!
//! ## Error bounds
//!
//! A composite survives one Solovay-Strassen round with probability at most
//! 1/2 and one Miller-Rabin round with probability at most 1/4, so `rounds`
//! witnesses bound the composite-acceptance probability by `2^-rounds` and
//! `4^-rounds` respectively. "Probably prime" answers carry that residual
//! error; "composite" answers are always exact.
//!
//! ## References
//!
//! - R. Solovay, V. Strassen, "A fast Monte-Carlo test for primality",
//!   SIAM Journal on Computing 6 (1977)
//! - M. O. Rabin, "Probabilistic algorithm for testing primality",
//!   Journal of Number Theory 12 (1980)
//! - OEIS A000043 — Mersenne exponents: <https://oeis.org/A000043>
//! - GIMPS on the Lucas-Lehmer test: <https://www.mersenne.org/various/math.php>

use num_traits::One;
use rand::Rng;
use tracing::debug;

use crate::bigint::BigInt;
use crate::modular::{jacobi, mod_pow};

/// Default number of witness rounds. The composite-acceptance bound is
/// `4^-rounds` for Miller-Rabin and `2^-rounds` for Solovay-Strassen.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Settle the cases every probabilistic test agrees on without witnesses:
/// `n ≤ 1` and even `n > 2` are composite, 2 and 3 are prime.
fn trivial(n: &BigInt) -> Option<bool> {
    let one = BigInt::one();
    if *n <= one {
        return Some(false);
    }
    let three = BigInt::from(3u32);
    if *n <= three {
        return Some(true);
    }
    if n.is_even() {
        return Some(false);
    }
    None
}

/// Uniform witness in `[2, n-2]` by rejection from a digit-uniform draw.
/// Requires odd `n ≥ 5`; each draw accepts with probability at least 1/10.
fn random_witness<R: Rng>(n: &BigInt, rng: &mut R) -> BigInt {
    let two = BigInt::from(2u32);
    let bound = n - BigInt::from(3u32);
    let len = bound.digit_len();
    loop {
        let digits: Vec<u8> = (0..len).map(|_| rng.random_range(0..10u8)).collect();
        let candidate = BigInt::from_digits(false, digits);
        if candidate < bound {
            return candidate + &two;
        }
    }
}

/// Solovay-Strassen probabilistic primality test.
///
/// Each round draws a witness `a` and checks Euler's criterion,
/// `a^((n-1)/2) ≡ (a/n) (mod n)`, with the right side computed as the Jacobi
/// symbol. Any failure proves `n` composite.
pub fn solovay_strassen<R: Rng>(n: &BigInt, rounds: u32, rng: &mut R) -> bool {
    if let Some(answer) = trivial(n) {
        return answer;
    }
    let one = BigInt::one();
    let n_minus_1 = n - &one;
    let exp = n_minus_1.div_rem_word(2).0;
    for round in 0..rounds {
        let a = random_witness(n, rng);
        let symbol = jacobi(&a, n);
        if symbol == 0 {
            debug!(round, witness = %a, "witness shares a factor, composite");
            return false;
        }
        let expected = if symbol == 1 {
            one.clone()
        } else {
            n_minus_1.clone()
        };
        let Ok(power) = mod_pow(&a, &exp, n) else {
            return false;
        };
        if power != expected {
            debug!(round, witness = %a, "Euler criterion failed, composite");
            return false;
        }
    }
    true
}

/// Miller-Rabin probabilistic primality test.
///
/// Writes `n - 1 = d·2^r` with `d` odd; a witness `a` passes when
/// `a^d ≡ 1 (mod n)` or some square in the chain `a^(d·2^i)` hits `n - 1`.
/// Any witness that passes neither proves `n` composite.
pub fn miller_rabin<R: Rng>(n: &BigInt, rounds: u32, rng: &mut R) -> bool {
    if let Some(answer) = trivial(n) {
        return answer;
    }
    let one = BigInt::one();
    let n_minus_1 = n - &one;

    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d = d.div_rem_word(2).0;
        r += 1;
    }

    'witness: for round in 0..rounds {
        let a = random_witness(n, rng);
        let Ok(mut x) = mod_pow(&a, &d, n) else {
            return false;
        };
        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 1..r {
            x = &x * &x % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        debug!(round, witness = %a, "strong witness found, composite");
        return false;
    }
    true
}

/// Lucas-Lehmer test for the Mersenne number `M = 2^p - 1`.
///
/// Iterates `s ← s² - 2 (mod M)` from `s = 4` for `p - 2` steps; `M` is
/// prime exactly when the final residue is zero. The equivalence holds for
/// prime `p` only: callers screen the exponent first, and a composite
/// exponent yields an unspecified (though non-panicking) verdict. `p = 2`
/// is prime (`M = 3`) and `p < 2` yields no Mersenne number at all.
pub fn lucas_lehmer(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    if p == 2 {
        return true;
    }
    let two = BigInt::from(2u32);
    let m = two.pow(p) - BigInt::one();
    let mut s = BigInt::from(4u32);
    for _ in 0..p - 2 {
        s = (&s * &s - &two).rem_euclid(&m);
    }
    s.is_zero()
}

/// Deterministic trial division for machine-word candidates; the oracle the
/// probabilistic tests are checked against.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut f = 5u64;
    while f <= n / f {
        if n % f == 0 || n % (f + 2) == 0 {
            return false;
        }
        f += 6;
    }
    true
}
