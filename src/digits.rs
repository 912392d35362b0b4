//! # Digit Kernel — Magnitude Arithmetic
//!
//! Sign-free arithmetic over decimal magnitudes stored as `Vec<u8>` digit
//! values, most-significant first. Everything here assumes normalized input
//! (no leading zeros, zero is the single digit `0`) and produces normalized
//! output. [`crate::bigint::BigInt`] and [`crate::natural::BigNat`] layer
//! sign handling and the public surface on top.

use std::cmp::Ordering;

/// Strip leading zeros in place; an all-zero or empty magnitude becomes `[0]`.
pub(crate) fn normalize(digits: &mut Vec<u8>) {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading > 0 {
        digits.drain(..leading);
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits == [0]
}

/// Magnitude order: digit count first, then lexicographic (both normalized).
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Grade-school addition, carry propagated from the least-significant digit.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut ai = a.iter().rev();
    let mut bi = b.iter().rev();
    let mut carry = 0u8;
    loop {
        let (da, db) = (ai.next(), bi.next());
        if da.is_none() && db.is_none() {
            break;
        }
        let sum = da.copied().unwrap_or(0) + db.copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// Grade-school subtraction with borrow. Requires `a >= b`.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less, "subtrahend exceeds minuend");
    let mut out = Vec::with_capacity(a.len());
    let mut bi = b.iter().rev();
    let mut borrow = 0i8;
    for &da in a.iter().rev() {
        let db = bi.next().copied().unwrap_or(0);
        let mut d = da as i8 - db as i8 - borrow;
        if d < 0 {
            d += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(d as u8);
    }
    out.reverse();
    normalize(&mut out);
    out
}

/// Schoolbook multiplication: accumulate all partial products positionally
/// into a wide buffer, then resolve carries in one pass. O(n·m) digit
/// products; the u32 cells cannot overflow below ~50M-digit operands.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }
    // acc is least-significant first while accumulating
    let mut acc = vec![0u32; a.len() + b.len()];
    for (i, &da) in a.iter().rev().enumerate() {
        if da == 0 {
            continue;
        }
        for (j, &db) in b.iter().rev().enumerate() {
            acc[i + j] += u32::from(da) * u32::from(db);
        }
    }
    let mut carry = 0u32;
    for cell in &mut acc {
        let v = *cell + carry;
        *cell = v % 10;
        carry = v / 10;
    }
    debug_assert_eq!(carry, 0, "product buffer sized to hold the full result");
    let mut out: Vec<u8> = acc.iter().rev().map(|&v| v as u8).collect();
    normalize(&mut out);
    out
}

/// Quotient and remainder by repeated doubling: grow a copy of the divisor
/// (and a matching power-of-two quotient contribution) while the doubled
/// value still fits under the remaining dividend, subtract, and repeat.
/// Requires a nonzero divisor.
pub(crate) fn div_rem(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert!(!is_zero(b), "division by zero magnitude");
    if cmp(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    let mut quot = vec![0u8];
    let mut rem = a.to_vec();
    while cmp(&rem, b) != Ordering::Less {
        let mut chunk = b.to_vec();
        let mut part = vec![1u8];
        loop {
            let doubled = add(&chunk, &chunk);
            if cmp(&doubled, &rem) == Ordering::Greater {
                break;
            }
            chunk = doubled;
            part = add(&part, &part);
        }
        rem = sub(&rem, &chunk);
        quot = add(&quot, &part);
    }
    (quot, rem)
}

/// Short division by a machine word. Requires `d != 0`; every interim
/// value fits in u32 because `d` stays well under `u32::MAX / 10`.
pub(crate) fn div_rem_word(a: &[u8], d: u32) -> (Vec<u8>, u32) {
    debug_assert!(d != 0, "division by zero word");
    let mut out = Vec::with_capacity(a.len());
    let mut rem = 0u32;
    for &digit in a {
        let cur = rem * 10 + u32::from(digit);
        out.push((cur / d) as u8);
        rem = cur % d;
    }
    normalize(&mut out);
    (out, rem)
}

/// Decimal place-value shift: append `k` zero digits. Shifting zero is zero.
pub(crate) fn shift(a: &[u8], k: usize) -> Vec<u8> {
    if is_zero(a) {
        return vec![0];
    }
    let mut out = Vec::with_capacity(a.len() + k);
    out.extend_from_slice(a);
    out.resize(a.len() + k, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    // ── Normalization & comparison ──────────────────────────────────

    #[test]
    fn normalize_strips_leading_zeros() {
        let mut v = d("000123");
        normalize(&mut v);
        assert_eq!(v, d("123"));

        let mut z = d("0000");
        normalize(&mut z);
        assert_eq!(z, d("0"));

        let mut e = Vec::new();
        normalize(&mut e);
        assert_eq!(e, d("0"));
    }

    #[test]
    fn cmp_orders_by_length_then_digits() {
        assert_eq!(cmp(&d("100"), &d("99")), Ordering::Greater);
        assert_eq!(cmp(&d("123"), &d("124")), Ordering::Less);
        assert_eq!(cmp(&d("555"), &d("555")), Ordering::Equal);
        assert_eq!(cmp(&d("0"), &d("1")), Ordering::Less);
    }

    // ── Addition & subtraction ──────────────────────────────────────

    #[test]
    fn add_carries_across_all_digits() {
        assert_eq!(add(&d("999"), &d("1")), d("1000"));
        assert_eq!(add(&d("123"), &d("877")), d("1000"));
        assert_eq!(add(&d("0"), &d("0")), d("0"));
    }

    #[test]
    fn sub_borrows_and_renormalizes() {
        assert_eq!(sub(&d("1000"), &d("1")), d("999"));
        assert_eq!(sub(&d("100"), &d("99")), d("1"));
        assert_eq!(sub(&d("555"), &d("555")), d("0"));
    }

    // ── Multiplication ──────────────────────────────────────────────

    /// 99999 * 99999 = 9999800001 exercises the longest carry chains.
    #[test]
    fn mul_known_values() {
        assert_eq!(mul(&d("99999"), &d("99999")), d("9999800001"));
        assert_eq!(mul(&d("12345"), &d("6789")), d("83810205"));
        assert_eq!(mul(&d("1"), &d("123")), d("123"));
        assert_eq!(mul(&d("0"), &d("123")), d("0"));
    }

    // ── Division ────────────────────────────────────────────────────

    #[test]
    fn div_rem_satisfies_the_division_law() {
        let (q, r) = div_rem(&d("100"), &d("7"));
        assert_eq!((q, r), (d("14"), d("2")));

        let (q, r) = div_rem(&d("7"), &d("100"));
        assert_eq!((q, r), (d("0"), d("7")));

        let (q, r) = div_rem(&d("1000000"), &d("1000"));
        assert_eq!((q, r), (d("1000"), d("0")));
    }

    #[test]
    fn div_rem_word_matches_long_division() {
        assert_eq!(div_rem_word(&d("1001"), 2), (d("500"), 1));
        assert_eq!(div_rem_word(&d("81"), 3), (d("27"), 0));
        assert_eq!(div_rem_word(&d("5"), 8), (d("0"), 5));
    }

    #[test]
    fn shift_appends_zero_digits() {
        assert_eq!(shift(&d("42"), 3), d("42000"));
        assert_eq!(shift(&d("0"), 5), d("0"));
        assert_eq!(shift(&d("7"), 0), d("7"));
    }
}
