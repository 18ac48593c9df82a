//! Ristretto255 group (RFC 9496).
//!
//! Ristretto255 is a prime order group built over edwards25519: each
//! group element is a coset of the 4-torsion subgroup, and is represented
//! here by any Edwards `Point` of that coset. Encoding picks a canonical
//! representative, so two points that differ by a 4-torsion point encode
//! to the same 32 bytes and compare as equal.
//!
//! Decoding is strict: the encoded value must be canonical (lower than
//! p, top bit cleared) and "nonnegative" (even), otherwise it is
//! rejected. `one_way_map()` hashes 64 uniform bytes (e.g. a SHA-512
//! output) into the group.
//!
//! Additions, doublings and multiplications by scalars use the
//! edwards25519 code unchanged.
//!
//! [RFC 9496]: https://datatracker.ietf.org/doc/html/rfc9496

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use super::ed25519::Point as EdPoint;
use super::field::FieldElement;
use super::scalarmul::{scalar_mul_base_ct, scalar_mul_vartime};

/// A Ristretto255 element.
#[derive(Clone, Copy, Debug)]
pub struct Point(EdPoint);

// sqrt(a*d - 1), with a = -1
const SQRT_AD_MINUS_ONE: FieldElement = FieldElement::decode(&[
    0x1B, 0x2E, 0x7B, 0x49, 0xA0, 0xF6, 0x97, 0x7E,
    0xBD, 0x54, 0x78, 0x1B, 0x0C, 0x8E, 0x9D, 0xAF,
    0xFD, 0xD1, 0xF5, 0x31, 0xC9, 0xFC, 0x3C, 0x0F,
    0xAC, 0x48, 0x83, 0x2B, 0xBF, 0x31, 0x69, 0x37,
]);

// 1/sqrt(a - d)
const INVSQRT_A_MINUS_D: FieldElement = FieldElement::decode(&[
    0xEA, 0x40, 0x5D, 0x80, 0xAA, 0xFD, 0xC8, 0x99,
    0xBE, 0x72, 0x41, 0x5A, 0x17, 0x16, 0x2F, 0x9D,
    0x40, 0xD8, 0x01, 0xFE, 0x91, 0x7B, 0xC2, 0x16,
    0xA2, 0xFC, 0xAF, 0xCF, 0x05, 0x89, 0x6C, 0x78,
]);

// 1 - d^2
const ONE_MINUS_D_SQ: FieldElement = FieldElement::decode(&[
    0x76, 0xC1, 0x5F, 0x94, 0xC1, 0x09, 0x7C, 0xE2,
    0x0F, 0x35, 0x5E, 0xCD, 0x38, 0xA1, 0x81, 0x2C,
    0xE4, 0xDF, 0x70, 0xBE, 0xDD, 0xAB, 0x94, 0x99,
    0xD7, 0xE0, 0xB3, 0xB2, 0xA8, 0x72, 0x90, 0x02,
]);

// (d - 1)^2
const D_MINUS_ONE_SQ: FieldElement = FieldElement::decode(&[
    0x20, 0x4D, 0xED, 0x44, 0xAA, 0x5A, 0xAD, 0x31,
    0x99, 0x19, 0x1E, 0xB0, 0x2C, 0x4A, 0x9E, 0xD2,
    0xEB, 0x4E, 0x9B, 0x52, 0x2F, 0xD3, 0xDC, 0x4C,
    0x41, 0x22, 0x6C, 0xF6, 0x7A, 0xB3, 0x68, 0x59,
]);

// 0xFFFFFFFF if x is "negative" (odd canonical value), 0 otherwise.
#[inline(always)]
fn is_negative(x: FieldElement) -> u32 {
    x.sgn().wrapping_neg()
}

// x or -x, whichever is nonnegative. Output is bounded, not carried.
#[inline(always)]
fn abs(x: FieldElement) -> FieldElement {
    FieldElement::select(&x, &-x, is_negative(x))
}

/// Square root of a ratio, with the conventions of RFC 9496, section
/// 4.2. Returns (ok, r):
///
///  - u/v is a nonzero square: ok = 0xFFFFFFFF, r = sqrt(u/v);
///  - u = 0: ok = 0xFFFFFFFF, r = 0;
///  - u != 0 and v = 0: ok = 0x00000000, r = 0;
///  - u/v is not a square: ok = 0x00000000, r = sqrt(SQRT_M1*u/v).
///
/// The returned root is always nonnegative.
fn sqrt_ratio_m1(u: &FieldElement, v: &FieldElement) -> (u32, FieldElement) {
    let v3 = v.square() * v;
    let v7 = v3.square() * v;
    let r = (u * v3) * (u * v7).pow22523();
    let c = v * r.square();

    let nu = -u;
    let correct_sign = c.equals(*u);
    let flipped_sign = c.equals(nu);
    let flipped_sign_i = c.equals(nu * FieldElement::SQRT_M1);

    let r = FieldElement::select(&r, &(r * FieldElement::SQRT_M1),
        flipped_sign | flipped_sign_i);
    (correct_sign | flipped_sign, abs(r).carry())
}

impl Point {

    /// The neutral element of the group.
    pub const NEUTRAL: Self = Self(EdPoint::NEUTRAL);

    /// The conventional generator (the coset of the edwards25519 base
    /// point).
    #[inline(always)]
    pub fn base() -> Self {
        Self(EdPoint::base())
    }

    /// Decodes an element from 32 bytes.
    ///
    /// On success, 0xFFFFFFFF is returned. If the input is not the
    /// canonical encoding of an element, then this element is set to the
    /// neutral and 0x00000000 is returned. The outcome does not leak
    /// through timing.
    pub fn set_decode(&mut self, buf: &[u8; 32]) -> u32 {
        let s = FieldElement::decode(buf);

        // Canonical: re-encoding yields the same bytes (this also rejects
        // a set top bit).
        let enc = s.encode();
        let mut diff = 0u32;
        for i in 0..32 {
            diff |= (enc[i] ^ buf[i]) as u32;
        }
        let mut r = (diff.wrapping_sub(1) >> 31).wrapping_neg();
        r &= !is_negative(s);

        let ss = s.square();
        let u1 = FieldElement::ONE - ss;
        let u2 = FieldElement::ONE + ss;
        let [u1_sqr, u2_sqr] = FieldElement::sqr2(&[u1, u2]);

        let v = -(FieldElement::D * u1_sqr) - u2_sqr;
        let (was_square, invsqrt) = sqrt_ratio_m1(&FieldElement::ONE, &(v * u2_sqr));

        let den_x = invsqrt * u2;
        let den_y = invsqrt * den_x * v;

        let sx = s * den_x;
        let x = abs(sx + sx).carry();
        let y = u1 * den_y;
        let t = x * y;

        r &= was_square & !(is_negative(t) | y.iszero());

        self.0 = EdPoint::NEUTRAL;
        self.0.set_cond(&EdPoint { X: x, Y: y, Z: FieldElement::ONE, T: t }, r);
        r
    }

    /// Decodes an element from 32 bytes.
    ///
    /// `None` is returned if the input is not a canonical encoding. The
    /// `Option` leaks whether decoding succeeded; the decoded value does
    /// not leak.
    pub fn decode(buf: &[u8; 32]) -> Option<Self> {
        let mut P = Self::NEUTRAL;
        if P.set_decode(buf) != 0 {
            Some(P)
        } else {
            None
        }
    }

    /// Encodes this element into 32 bytes (always canonical).
    pub fn encode(self) -> [u8; 32] {
        let P = &self.0;
        let [u1, u2] = FieldElement::mul2(
            &[P.Z.add_nr(&P.Y), P.X], &[P.Z.sub_nr(&P.Y), P.Y]);

        let (_, invsqrt) = sqrt_ratio_m1(&FieldElement::ONE, &(u1 * u2.square()));

        let [den1, den2] = FieldElement::mul2(&[invsqrt, invsqrt], &[u1, u2]);
        let z_inv = den1 * den2 * P.T;

        let [ix0, iy0, ench, tz] = FieldElement::mul4(
            &[P.X, P.Y, den1, P.T],
            &[FieldElement::SQRT_M1, FieldElement::SQRT_M1, INVSQRT_A_MINUS_D, z_inv]);

        let rotate = is_negative(tz);
        let x = FieldElement::select(&P.X, &iy0, rotate);
        let y = FieldElement::select(&P.Y, &ix0, rotate);
        let den_inv = FieldElement::select(&den2, &ench, rotate);

        let y = FieldElement::select(&y, &-y, is_negative(x * z_inv));

        abs(den_inv * (P.Z - y)).encode()
    }

    /// Compares two elements for equality.
    ///
    /// Returned value is 0xFFFFFFFF if the two elements are equal,
    /// 0x00000000 otherwise. This is much cheaper than comparing
    /// encodings.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let (P, Q) = (&self.0, &rhs.0);
        let [a, b, c, d] = FieldElement::mul4(&[P.X, P.Y, P.Y, P.X], &[Q.Y, Q.X, Q.Y, Q.X]);
        a.equals(b) | c.equals(d)
    }

    /// Tests whether this element is the neutral.
    ///
    /// Returned value is 0xFFFFFFFF for the neutral, 0x00000000
    /// otherwise.
    #[inline(always)]
    pub fn isneutral(self) -> u32 {
        // The neutral coset holds (0, 1), (0, -1) and (+/-sqrt(-1), 0).
        self.0.X.iszero() | self.0.Y.iszero()
    }

    /// Copies `P` into `self` if `ctl` = 0xFFFFFFFF, leaves `self`
    /// unchanged if `ctl` = 0x00000000.
    #[inline(always)]
    pub fn set_cond(&mut self, P: &Self, ctl: u32) {
        self.0.set_cond(&P.0, ctl);
    }

    /// Returns `P0` (if `ctl` = 0x00000000) or `P1` (if `ctl` =
    /// 0xFFFFFFFF).
    #[inline(always)]
    pub fn select(P0: &Self, P1: &Self, ctl: u32) -> Self {
        Self(EdPoint::select(&P0.0, &P1.0, ctl))
    }

    // Elligator map of 32 bytes to an element (RFC 9496, section 4.3.4).
    // The top bit of the input is ignored.
    fn map(buf: &[u8; 32]) -> Self {
        let t = FieldElement::decode(buf);

        let r = FieldElement::SQRT_M1 * t.square();
        let [u, v] = FieldElement::mul2(
            &[r + FieldElement::ONE, FieldElement::MINUS_ONE - r * FieldElement::D],
            &[ONE_MINUS_D_SQ, r + FieldElement::D]);

        let (was_square, s) = sqrt_ratio_m1(&u, &v);
        let s_prime = -abs(s * t);
        let s = FieldElement::select(&s_prime, &s, was_square);
        let c = FieldElement::select(&r, &FieldElement::MINUS_ONE, was_square);

        let N = c * (r - FieldElement::ONE) * D_MINUS_ONE_SQ - v;

        let sv = s * v;
        let w0 = sv + sv;
        let w1 = N * SQRT_AD_MINUS_ONE;
        let ss = s.square();
        let w2 = FieldElement::ONE - ss;
        let w3 = FieldElement::ONE + ss;

        let [X, Y, Z, T] = FieldElement::mul4(&[w0, w2, w1, w0], &[w3, w1, w3, w2]);
        Self(EdPoint { X, Y, Z, T })
    }

    /// Maps 64 bytes to an element. With a uniformly random input (e.g.
    /// a SHA-512 output), the output is indistinguishable from a uniform
    /// element.
    pub fn one_way_map(buf: &[u8; 64]) -> Self {
        let mut b1 = [0u8; 32];
        let mut b2 = [0u8; 32];
        b1.copy_from_slice(&buf[..32]);
        b2.copy_from_slice(&buf[32..]);
        Self::map(&b1) + Self::map(&b2)
    }

    /// Negates this element (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        self.0.set_neg();
    }

    /// Doubles this element (in place).
    #[inline(always)]
    pub fn set_double(&mut self) {
        self.0.set_double();
    }

    #[inline(always)]
    pub fn double(self) -> Self {
        Self(self.0.double())
    }

    /// Doubles this element n times (in place).
    #[inline(always)]
    pub fn set_xdouble(&mut self, n: u32) {
        self.0.set_xdouble(n);
    }

    #[inline(always)]
    pub fn xdouble(self, n: u32) -> Self {
        Self(self.0.xdouble(n))
    }

    /// Returns `n` times the generator. Constant-time.
    #[inline(always)]
    pub fn mulgen(n: &[u8; 32]) -> Self {
        Self(scalar_mul_base_ct(n))
    }

    /// Returns `n` times this element. Not constant-time: `n` and the
    /// element are assumed public.
    #[inline(always)]
    pub fn mul_vartime(self, n: &[u8; 32]) -> Self {
        Self(scalar_mul_vartime(n, &self.0))
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+ and -) on group elements, with or without references.

impl Add<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0)
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        Point(self.0 + &other.0)
    }
}

impl Add<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        Point(&self.0 + other.0)
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        Point(&self.0 + &other.0)
    }
}

impl AddAssign<Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: Point) {
        self.0 += other.0;
    }
}

impl AddAssign<&Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: &Point) {
        self.0 += &other.0;
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Neg for &Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0)
    }
}

impl Sub<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        Point(self.0 - &other.0)
    }
}

impl Sub<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        Point(&self.0 - other.0)
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        Point(&self.0 - &other.0)
    }
}

impl SubAssign<Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: Point) {
        self.0 -= other.0;
    }
}

impl SubAssign<&Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: &Point) {
        self.0 -= &other.0;
    }
}

// ========================================================================
