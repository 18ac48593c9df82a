//! Scalar multiplication on Edwards25519.
//!
//! Scalars are 32-byte unsigned little-endian integers; they are not
//! required to be reduced modulo the group order L. All functions in this
//! module are variable-time with regard to the scalars, except
//! `scalar_mul_base_ct()`:
//!
//!  - `scalar_mul_vartime()`: plain double-and-add, for any point.
//!  - `scalar_mul_base()`: multiplication of the base point with a
//!    width-8 NAF recoding of the scalar and a table of the 128 odd
//!    multiples 1*B to 255*B.
//!  - `scalar_mul_base_ct()`: constant-time multiplication of the base
//!    point (signed 4-bit digits, full-table lookups); this is the one to
//!    use with secret scalars.
//!  - `double_scalar_mul_base()`: n1*A + n2*B, e.g. for signature
//!    verification.
//!  - `multi_scalar_mul()`, `multi_scalar_mul_straus()` and
//!    `multi_scalar_mul_base()`: sums of several products.

#![allow(non_snake_case)]

use super::ed25519::{tables, Point, PrecomputedPoint};

#[cfg(feature = "alloc")]
use crate::Vec;

/// Order L of the prime-order subgroup (little-endian).
pub const ORDER: [u8; 32] = [
    0xED, 0xD3, 0xF5, 0x5C, 0x1A, 0x63, 0x12, 0x58,
    0xD6, 0x9C, 0xF7, 0xA2, 0xDE, 0xF9, 0xDE, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

// Largest batch handled by multi_scalar_mul_straus(); the window tables
// hold 0 to 15 times each point.
#[cfg(feature = "alloc")]
const STRAUS_MAX_BATCH: usize = 32;
#[cfg(feature = "alloc")]
const STRAUS_TABLE_LEN: usize = 16;

/// Returns `true` if the scalar is canonical, i.e. lower than L.
///
/// Not constant-time: only for public values (e.g. the `S` part of a
/// signature).
pub fn scalar_validate(n: &[u8; 32]) -> bool {
    for i in (0..32).rev() {
        if n[i] != ORDER[i] {
            return n[i] < ORDER[i];
        }
    }
    false
}

/// Recodes a scalar in width-8 NAF: returns 257 digits d[i] such that
/// the scalar is the sum of d[i]*2^i. Each digit is zero or odd in
/// -127..+127, and each non-zero digit is followed by at least seven
/// zero digits.
pub fn wnaf_recode(n: &[u8; 32]) -> [i8; 257] {
    // Working copy, with room for the carry out of the top bit.
    let mut s = [0u64; 5];
    for i in 0..32 {
        s[i >> 3] |= (n[i] as u64) << ((i & 7) << 3);
    }

    let mut d = [0i8; 257];
    let mut pos = 0;
    while pos < 257 && (s[0] | s[1] | s[2] | s[3] | s[4]) != 0 {
        if (s[0] & 1) != 0 {
            let mut k = (s[0] & 0xFF) as i32;
            if k >= 128 {
                k -= 256;
            }
            d[pos] = k as i8;

            // Subtract k; the low 8 bits of the working value become zero.
            if k > 0 {
                let mut borrow = k as u64;
                for w in s.iter_mut() {
                    let (r, b) = w.overflowing_sub(borrow);
                    *w = r;
                    borrow = b as u64;
                }
            } else {
                let mut carry = (-k) as u64;
                for w in s.iter_mut() {
                    let (r, c) = w.overflowing_add(carry);
                    *w = r;
                    carry = c as u64;
                }
            }
        }
        for i in 0..4 {
            s[i] = (s[i] >> 1) | (s[i + 1] << 63);
        }
        s[4] >>= 1;
        pos += 1;
    }
    d
}

/// Recodes a scalar into 65 signed 4-bit digits: digits 0 to 63 are in
/// -8..+7, digit 64 is 0 or 1. Constant-time.
fn recode_radix16(n: &[u8; 32]) -> [i8; 65] {
    let mut d = [0i8; 65];
    let mut cc = 0u32;
    for i in 0..64 {
        let x = (((n[i >> 1] >> ((i & 1) << 2)) & 0x0F) as u32) + cc;
        cc = (x + 8) >> 4;
        d[i] = ((x as i32) - ((cc as i32) << 4)) as i8;
    }
    d[64] = cc as i8;
    d
}

/// Computes n*A with a double-and-add over the 256 bits of the scalar,
/// most significant first.
///
/// Not constant-time: the scalar MUST NOT be secret.
pub fn scalar_mul_vartime(n: &[u8; 32], A: &Point) -> Point {
    let mut acc = Point::NEUTRAL;
    for i in (0..256).rev() {
        acc.set_double();
        if ((n[i >> 3] >> (i & 7)) & 1) != 0 {
            acc += A;
        }
    }
    acc
}

/// Computes n*B (B = conventional base point), using the width-8 NAF of
/// the scalar and the table of odd multiples of B.
///
/// Not constant-time: the scalar MUST NOT be secret. Use
/// `scalar_mul_base_ct()` for secret scalars.
pub fn scalar_mul_base(n: &[u8; 32]) -> Point {
    let win = &tables().base_odd;
    let sd = wnaf_recode(n);

    // Doublings are only counted (in ndbl) until the next non-zero digit,
    // and skipped entirely while the accumulator is still the neutral.
    let mut acc = Point::NEUTRAL;
    let mut zz = true;
    let mut ndbl = 0u32;
    for i in (0..257).rev() {
        if !zz {
            ndbl += 1;
        }
        let k = sd[i];
        if k == 0 {
            continue;
        }
        acc.set_xdouble(ndbl);
        ndbl = 0;
        let e = &win[(k.unsigned_abs() >> 1) as usize];
        if k > 0 {
            acc.set_add_precomputed(e);
        } else {
            acc.set_sub_precomputed(e);
        }
        zz = false;
    }
    acc.set_xdouble(ndbl);
    acc
}

/// Computes n*B (B = conventional base point) in constant time.
///
/// The scalar is split into signed 4-bit digits; each digit selects a
/// multiple of B among 1*B to 8*B with a lookup that reads the whole
/// table, followed by a conditional negation.
pub fn scalar_mul_base_ct(n: &[u8; 32]) -> Point {
    let win = &tables().base_small;
    let sd = recode_radix16(n);
    let mut acc = Point::NEUTRAL;
    acc.set_add_precomputed(&PrecomputedPoint::lookup(win, sd[64]));
    for i in (0..64).rev() {
        acc.set_xdouble(4);
        acc.set_add_precomputed(&PrecomputedPoint::lookup(win, sd[i]));
    }
    acc
}

/// Computes n1*A + n2*B (B = conventional base point).
///
/// Not constant-time: this is meant for signature verification.
pub fn double_scalar_mul_base(n1: &[u8; 32], A: &Point, n2: &[u8; 32]) -> Point {
    scalar_mul_vartime(n1, A) + scalar_mul_base(n2)
}

/// Computes the sum of n[i]*a[i], one product at a time. If the slices
/// have different lengths, the extra elements of the longer one are
/// ignored. The neutral is returned for empty inputs.
pub fn multi_scalar_mul(n: &[[u8; 32]], a: &[Point]) -> Point {
    let mut terms = n.iter().zip(a.iter());
    let mut r = match terms.next() {
        Some((n0, a0)) => scalar_mul_vartime(n0, a0),
        None => return Point::NEUTRAL,
    };
    for (ni, ai) in terms {
        r += scalar_mul_vartime(ni, ai);
    }
    r
}

/// Computes the sum of n[i]*a[i] with Straus's method: for each point,
/// a table of its multiples 0 to 15, then 64 windows of 4 bits with a
/// single chain of doublings shared by all points.
///
/// Batches of fewer than 4 or more than 32 points use
/// `multi_scalar_mul()` instead.
#[cfg(feature = "alloc")]
pub fn multi_scalar_mul_straus(n: &[[u8; 32]], a: &[Point]) -> Point {
    let sz = n.len().min(a.len());
    if sz == 0 {
        return Point::NEUTRAL;
    }
    if sz == 1 {
        return scalar_mul_vartime(&n[0], &a[0]);
    }
    if sz < 4 || sz > STRAUS_MAX_BATCH {
        return multi_scalar_mul(n, a);
    }

    let mut tabs: Vec<[Point; STRAUS_TABLE_LEN]> = Vec::with_capacity(sz);
    for P in &a[..sz] {
        let mut t = [Point::NEUTRAL; STRAUS_TABLE_LEN];
        t[1] = *P;
        t[2] = P.double();
        for j in 3..STRAUS_TABLE_LEN {
            t[j] = t[j - 1] + P;
        }
        tabs.push(t);
    }

    let mut acc = Point::NEUTRAL;
    for win in (0..64).rev() {
        if win < 63 {
            acc.set_xdouble(4);
        }
        for (ni, t) in n.iter().zip(tabs.iter()) {
            let w = (ni[win >> 1] >> ((win & 1) << 2)) & 0x0F;
            if w != 0 {
                acc += t[w as usize];
            }
        }
    }
    acc
}

/// Computes n[0]*B + the sum of n[i]*a[i] for i >= 1, where B is the
/// conventional base point (`a[0]` is not used). The first product goes
/// through `scalar_mul_base()`.
pub fn multi_scalar_mul_base(n: &[[u8; 32]], a: &[Point]) -> Point {
    if n.is_empty() {
        return Point::NEUTRAL;
    }
    let mut r = scalar_mul_base(&n[0]);
    for (ni, ai) in n.iter().zip(a.iter()).skip(1) {
        r += scalar_mul_vartime(ni, ai);
    }
    r
}

// ========================================================================
