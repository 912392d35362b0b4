//! # Karatsuba — Divide-and-Conquer Multiplication
//!
//! Splits each operand around half the longer operand's digit count and
//! recombines three recursive products instead of four, trading additions
//! for one multiplication.
//!
//! ## Algorithm
//!
//! For `x = x1·10^h + x0` and `y = y1·10^h + y0` with `h = max_len / 2`:
//!
//! ```text
//! z2 = x1·y1
//! z0 = x0·y0
//! z1 = (x1 + x0)·(y1 + y0) - z2 - z0
//! x·y = z2·10^(2h) + z1·10^h + z0
//! ```
//!
//! An operand shorter than `h` digits cannot reach the split boundary; it is
//! treated as the high part over a zero low part, which inflates the combined
//! result by `10^h`, and the spurious low zeros are stripped afterwards. The
//! recursion bottoms out on single-digit operands, which fall back to the
//! schoolbook product. The result is exactly equal to `x * y`.
//!
//! ## Complexity
//!
//! O(n^log2(3)) ≈ O(n^1.585) digit operations versus O(n²) schoolbook. The
//! recursion depth is logarithmic in the digit count, so stack use stays
//! modest even for operands with millions of digits.
//!
//! ## References
//!
//! - A. Karatsuba, Yu. Ofman, "Multiplication of multidigit numbers on
//!   automata", Soviet Physics Doklady 7 (1963)
//! - <https://en.wikipedia.org/wiki/Karatsuba_algorithm>

use num_traits::Zero;

use crate::bigint::BigInt;

/// Karatsuba product; exactly equal to `x * y`.
pub fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    let product = mul_abs(&x.abs(), &y.abs());
    if x.is_negative() != y.is_negative() {
        -product
    } else {
        product
    }
}

fn mul_abs(x: &BigInt, y: &BigInt) -> BigInt {
    if x.digit_len() == 1 || y.digit_len() == 1 {
        return x * y;
    }
    let half = x.digit_len().max(y.digit_len()) / 2;
    let (x1, x0, x_padded) = split(x, half);
    let (y1, y0, y_padded) = split(y, half);

    let z2 = mul_abs(&x1, &y1);
    let z0 = mul_abs(&x0, &y0);
    let z1 = mul_abs(&(&x1 + &x0), &(&y1 + &y0)) - &z2 - &z0;

    let combined = z2.mul_pow10(2 * half) + z1.mul_pow10(half) + z0;
    if x_padded || y_padded {
        strip_padding(combined, half)
    } else {
        combined
    }
}

/// Split a non-negative value at `half` digits from the low end, returning
/// `(high, low, padded)`. An operand shorter than `half` digits becomes the
/// high part over a zero low part; the `padded` flag records that the true
/// value was scaled by `10^half`.
fn split(v: &BigInt, half: usize) -> (BigInt, BigInt, bool) {
    let d = v.digits();
    if d.len() < half {
        return (v.clone(), BigInt::zero(), true);
    }
    let boundary = d.len() - half;
    (
        BigInt::from_digits(false, d[..boundary].to_vec()),
        BigInt::from_digits(false, d[boundary..].to_vec()),
        false,
    )
}

/// Drop the `half` low zeros introduced by a padded split. At most one
/// operand can sit below the boundary, so the scale factor is always exactly
/// `10^half`.
fn strip_padding(v: BigInt, half: usize) -> BigInt {
    let d = v.digits();
    debug_assert!(d.len() > half);
    let keep = d.len() - half;
    debug_assert!(
        d[keep..].iter().all(|&x| x == 0),
        "stripped digits must be padding zeros"
    );
    BigInt::from_digits(false, d[..keep].to_vec())
}
