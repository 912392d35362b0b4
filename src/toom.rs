//! # Toom — Multi-Way Toom-Cook Multiplication
//!
//! Two Toom-Cook variants over [`BigInt`]: a balanced three-way split
//! ([`mul3`]) and an unbalanced five-by-two split ([`mul5`]). Both treat the
//! operands as polynomials in a power of ten, evaluate at a fixed point set,
//! multiply the evaluations recursively, and interpolate the product
//! coefficients back out. Every interpolation step divides exactly, so the
//! results equal the schoolbook product digit for digit.
//!
//! ## Algorithm
//!
//! `mul3` splits each operand into three parts of `⌈n/3⌉` digits and
//! evaluates at `{0, 1, -1, -2, ∞}`, for five recursive products covering the
//! degree-4 result polynomial. Interpolation uses exact divisions by 2 and 3
//! only.
//!
//! `mul5` splits the longer operand into five parts of `⌊n/5⌋` digits and the
//! shorter into two, evaluating at `{0, 1, -1, 2, -2, ∞}` for six recursive
//! products covering the degree-5 result polynomial. The split favors
//! operands of very different lengths, where a balanced split would waste
//! most of its parts on padding.
//!
//! ## Complexity
//!
//! `mul3` runs in O(n^log3(5)) ≈ O(n^1.465) digit operations; `mul5` trades
//! a higher evaluation cost for fewer recursive products on unbalanced
//! operands. Both fall back to the schoolbook product once an operand is
//! three digits or fewer, and both recurse to a depth logarithmic in the
//! digit count, keeping stack use bounded.
//!
//! ## References
//!
//! - A. Toom, "The complexity of a scheme of functional elements realizing
//!   the multiplication of integers" (1963)
//! - S. Cook, "On the minimum computation time of functions", PhD thesis,
//!   Harvard (1966)
//! - M. Bodrato, A. Zanoni, "Integer and polynomial multiplication: towards
//!   optimal Toom-Cook matrices" (2007)
//! - <https://en.wikipedia.org/wiki/Toom%E2%80%93Cook_multiplication>

use num_traits::Zero;

use crate::bigint::BigInt;

/// Toom-3 product; exactly equal to `x * y`.
pub fn mul3(x: &BigInt, y: &BigInt) -> BigInt {
    if x.digit_len().min(y.digit_len()) <= 3 {
        return x * y;
    }
    let n = x.digit_len().max(y.digit_len());
    let part = n / 3 + usize::from(n % 3 > 0);

    let (a2, a1, a0) = split3(x, part);
    let (b2, b1, b0) = split3(y, part);

    let two = BigInt::from(2u32);
    let four = BigInt::from(4u32);

    // evaluate both polynomials at {1, -1, -2}; 0 and ∞ are a0/b0 and a2/b2
    let p1 = &a0 + &a1 + &a2;
    let pm1 = &a0 - &a1 + &a2;
    let pm2 = &a0 - &two * &a1 + &four * &a2;
    let q1 = &b0 + &b1 + &b2;
    let qm1 = &b0 - &b1 + &b2;
    let qm2 = &b0 - &two * &b1 + &four * &b2;

    let r0 = mul3(&a0, &b0);
    let r1 = mul3(&p1, &q1);
    let rm1 = mul3(&pm1, &qm1);
    let rm2 = mul3(&pm2, &qm2);
    let rinf = mul3(&a2, &b2);

    let t3 = exact_div(&(&rm2 - &r1), 3);
    let t1 = exact_div(&(&r1 - &rm1), 2);
    let t2 = &rm1 - &r0;

    let c4 = rinf;
    let c3 = exact_div(&(&t2 - &t3), 2) + &two * &c4;
    let c2 = &t2 + &t1 - &c4;
    let c1 = &t1 - &c3;
    let c0 = r0;

    let combined = c0
        + c1.mul_pow10(part)
        + c2.mul_pow10(2 * part)
        + c3.mul_pow10(3 * part)
        + c4.mul_pow10(4 * part);

    if x.is_negative() != y.is_negative() {
        -combined
    } else {
        combined
    }
}

/// Toom-5 product with a five-by-two split; exactly equal to `x * y`.
pub fn mul5(x: &BigInt, y: &BigInt) -> BigInt {
    if x.digit_len().min(y.digit_len()) <= 3 {
        return x * y;
    }
    // the longer operand contributes five parts, the shorter two
    let (long, short) = if x.digit_len() >= y.digit_len() {
        (x, y)
    } else {
        (y, x)
    };
    let s = (long.digit_len() / 5).max(1);

    let [a0, a1, a2, a3, a4] = split5(long, s);
    let (b1, b0) = split2(short, s);

    let two = BigInt::from(2u32);
    let four = BigInt::from(4u32);
    let five = BigInt::from(5u32);
    let eight = BigInt::from(8u32);
    let sixteen = BigInt::from(16u32);

    // evaluate A at ±1 and ±2 through its even and odd digit groups
    let even1 = &a0 + &a2 + &a4;
    let odd1 = &a1 + &a3;
    let p1 = &even1 + &odd1;
    let pm1 = &even1 - &odd1;
    let even2 = &a0 + &four * &a2 + &sixteen * &a4;
    let odd2 = &two * &a1 + &eight * &a3;
    let p2 = &even2 + &odd2;
    let pm2 = &even2 - &odd2;

    let q1 = &b0 + &b1;
    let qm1 = &b0 - &b1;
    let q2 = &b0 + &two * &b1;
    let qm2 = &b0 - &two * &b1;

    let r0 = mul5(&a0, &b0);
    let r1 = mul5(&p1, &q1);
    let rm1 = mul5(&pm1, &qm1);
    let r2 = mul5(&p2, &q2);
    let rm2 = mul5(&pm2, &qm2);
    let rinf = mul5(&a4, &b1);

    let c0 = r0;
    let c5 = rinf;

    // even coefficients: (C(1)+C(-1))/2 - c0 = c2 + c4 and
    // (C(2)+C(-2))/2 - c0 = 4·c2 + 16·c4
    let sum1 = exact_div(&(&r1 + &rm1), 2) - &c0;
    let sum2 = exact_div(&(&r2 + &rm2), 2) - &c0;
    let c4 = exact_div(&(&sum2 - &four * &sum1), 12);
    let c2 = &sum1 - &c4;

    // odd coefficients: (C(1)-C(-1))/2 = c1 + c3 + c5 and
    // (C(2)-C(-2))/4 = c1 + 4·c3 + 16·c5
    let diff1 = exact_div(&(&r1 - &rm1), 2);
    let diff2 = exact_div(&(&r2 - &rm2), 4);
    let c3 = exact_div(&(&diff2 - &diff1), 3) - &five * &c5;
    let c1 = &diff1 - &c3 - &c5;

    let combined = c0
        + c1.mul_pow10(s)
        + c2.mul_pow10(2 * s)
        + c3.mul_pow10(3 * s)
        + c4.mul_pow10(4 * s)
        + c5.mul_pow10(5 * s);

    if x.is_negative() != y.is_negative() {
        -combined
    } else {
        combined
    }
}

/// Three-way magnitude split, high to low. Parts hold `part` digits from the
/// low end; a short operand leaves the high parts zero.
fn split3(v: &BigInt, part: usize) -> (BigInt, BigInt, BigInt) {
    let d = v.digits();
    let len = d.len();
    if len > 2 * part {
        let hi = len - 2 * part;
        (seg(d, 0, hi), seg(d, hi, part), seg(d, hi + part, part))
    } else if len > part {
        (BigInt::zero(), seg(d, 0, len - part), seg(d, len - part, part))
    } else {
        (BigInt::zero(), BigInt::zero(), seg(d, 0, len))
    }
}

/// Five-way magnitude split, low to high: four parts of `s` digits and an
/// open-ended high part.
fn split5(v: &BigInt, s: usize) -> [BigInt; 5] {
    let d = v.digits();
    let len = d.len();
    debug_assert!(len >= 4 * s);
    [
        seg(d, len - s, s),
        seg(d, len - 2 * s, s),
        seg(d, len - 3 * s, s),
        seg(d, len - 4 * s, s),
        seg(d, 0, len - 4 * s),
    ]
}

/// Two-way magnitude split `(high, low)` with `s` digits in the low part.
fn split2(v: &BigInt, s: usize) -> (BigInt, BigInt) {
    let d = v.digits();
    let len = d.len();
    if len <= s {
        return (BigInt::zero(), seg(d, 0, len));
    }
    (seg(d, 0, len - s), seg(d, len - s, s))
}

fn seg(d: &[u8], start: usize, len: usize) -> BigInt {
    BigInt::from_digits(false, d[start..start + len].to_vec())
}

fn exact_div(v: &BigInt, d: u32) -> BigInt {
    let (q, r) = v.div_rem_word(d);
    debug_assert_eq!(r, 0, "interpolation divisions are exact");
    q
}
