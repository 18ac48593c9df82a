//! Edwards25519 curve points.
//!
//! This module implements group operations on the twisted Edwards curve
//! of equation `-x^2 + y^2 = 1 + d*x^2*y^2`, over the finite field
//! GF(2^255 - 19), for the constant `d` = -121665/121666. This curve is
//! described in [RFC 7748]; the point encoding follows [RFC 8032].
//!
//! Points use extended coordinates (X:Y:Z:T), with x = X/Z, y = Y/Z and
//! X*Y = T*Z. `Point` instances can be used in additions and subtractions
//! with the usual `+` and `-` operators; all combinations of raw values
//! and references are accepted, as well as compound assignment operators
//! `+=` and `-=`. Addition and subtraction use the unified formulas of
//! Hisil, Wong, Carter and Dawson (2008); the four products of each step
//! are computed together with the 4-lane field engine. All coordinates
//! returned by these operations are in canonical form.
//!
//! Tables of fixed points use the distinct `PrecomputedPoint` type, which
//! stores (Y-X, Y+X, 2*d*T, Z); adding such a point saves one
//! multiplication.
//!
//! Points can be encoded over 32 bytes, and decoded back. Decoding
//! accepts non-canonical encodings of y (values in the p to 2^255-1
//! range); encoding is always canonical.
//!
//! The conventional base point, the order-8 points and the base point
//! tables used by `scalarmul` are computed once, on first use, and shared
//! by all threads.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748
//! [RFC 8032]: https://datatracker.ietf.org/doc/html/rfc8032

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use spin::Once;
use super::field::FieldElement;

/// A point on the twisted Edwards curve edwards25519.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

/// A point in "precomputed" form: (Y-X, Y+X, 2*d*T, Z).
///
/// This form is used for table entries; adding a precomputed point to a
/// `Point` is cheaper than a generic point addition.
#[derive(Clone, Copy, Debug)]
pub struct PrecomputedPoint {
    pub(crate) ymx: FieldElement,
    pub(crate) ypx: FieldElement,
    pub(crate) t2d: FieldElement,
    pub(crate) Z: FieldElement,
}

/// Error returned when decoding two points at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The first encoding is not a valid point.
    FirstPoint,
    /// The second encoding is not a valid point.
    SecondPoint,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::FirstPoint => write!(f, "first point encoding is invalid"),
            DecodeError::SecondPoint => write!(f, "second point encoding is invalid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

// Affine coordinates of the conventional base point.
const BASE_X: [u8; 32] = [
    0x1A, 0xD5, 0x25, 0x8F, 0x60, 0x2D, 0x56, 0xC9,
    0xB2, 0xA7, 0x25, 0x95, 0x60, 0xC7, 0x2C, 0x69,
    0x5C, 0xDC, 0xD6, 0xFD, 0x31, 0xE2, 0xA4, 0xC0,
    0xFE, 0x53, 0x6E, 0xCD, 0xD3, 0x36, 0x69, 0x21,
];
const BASE_Y: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

// y coordinates of the points of order 8 (the two values are opposite).
const ORDER8_Y0: [u8; 32] = [
    0x26, 0xE8, 0x95, 0x8F, 0xC2, 0xB2, 0x27, 0xB0,
    0x45, 0xC3, 0xF4, 0x89, 0xF2, 0xEF, 0x98, 0xF0,
    0xD5, 0xDF, 0xAC, 0x05, 0xD3, 0xC6, 0x33, 0x39,
    0xB1, 0x38, 0x02, 0x88, 0x6D, 0x53, 0xFC, 0x05,
];
const ORDER8_Y1: [u8; 32] = [
    0xC7, 0x17, 0x6A, 0x70, 0x3D, 0x4D, 0xD8, 0x4F,
    0xBA, 0x3C, 0x0B, 0x76, 0x0D, 0x10, 0x67, 0x0F,
    0x2A, 0x20, 0x53, 0xFA, 0x2C, 0x39, 0xCC, 0xC6,
    0x4E, 0xC7, 0xFD, 0x77, 0x92, 0xAC, 0x03, 0x7A,
];

/// Curve constants that require group operations to build.
pub(crate) struct CurveTables {
    pub(crate) base: Point,
    pub(crate) order8_y0: FieldElement,
    pub(crate) order8_y1: FieldElement,
    /// Odd multiples of the base point: `base_odd[i]` = (2*i+1)*B, with Z = 1.
    pub(crate) base_odd: [PrecomputedPoint; 128],
    /// Small multiples of the base point: `base_small[i]` = (i+1)*B, with Z = 1.
    pub(crate) base_small: [PrecomputedPoint; 8],
}

static TABLES: Once<CurveTables> = Once::new();

/// Get the shared curve tables, building them on first use. Concurrent
/// first callers block until the single initialization completes.
#[inline]
pub(crate) fn tables() -> &'static CurveTables {
    TABLES.call_once(CurveTables::build)
}

impl CurveTables {

    fn build() -> Self {
        let base = Point::decode_affine(&BASE_X, &BASE_Y);

        let mut base_odd = [PrecomputedPoint::NEUTRAL; 128];
        let B2 = Point::affine_xdouble(&base, 1);
        let mut P = base;
        for i in 0..128 {
            base_odd[i] = P.to_precomputed();
            P = Point::affine_add(&P, &B2);
        }

        let mut base_small = [PrecomputedPoint::NEUTRAL; 8];
        let mut P = base;
        for i in 0..8 {
            base_small[i] = P.to_precomputed();
            P = Point::affine_add(&P, &base);
        }

        Self {
            base,
            order8_y0: FieldElement::decode(&ORDER8_Y0),
            order8_y1: FieldElement::decode(&ORDER8_Y1),
            base_odd,
            base_small,
        }
    }
}

impl Point {

    /// The group neutral (identity point) in the curve.
    ///
    /// Affine coordinates of the neutral are (0,1).
    pub const NEUTRAL: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// The conventional base point in the curve (affine, Z = 1).
    ///
    /// This point generates the subgroup of prime order
    /// L = 2^252 + 27742317777372353535851937790883648493.
    #[inline]
    pub fn base() -> Self {
        tables().base
    }

    /// Set this point to the neutral.
    #[inline(always)]
    pub fn set_neutral(&mut self) {
        *self = Self::NEUTRAL;
    }

    /// Create a point from its affine coordinates. The coordinates are
    /// not verified to match a curve point.
    pub fn from_affine(x: &FieldElement, y: &FieldElement) -> Self {
        Self { X: *x, Y: *y, Z: FieldElement::ONE, T: x * y }
    }

    /// Create a point from the encodings of its affine coordinates (each
    /// as 32 bytes, little-endian, top bit ignored). The coordinates are
    /// not verified to match a curve point.
    pub fn decode_affine(x: &[u8; 32], y: &[u8; 32]) -> Self {
        Self::from_affine(&FieldElement::decode(x), &FieldElement::decode(y))
    }

    /// Tries to decode a point from bytes.
    ///
    /// The low 255 bits are the y coordinate (not necessarily reduced
    /// modulo p); the top bit is the sign of x. On success, 0xFFFFFFFF is
    /// returned; on failure (no x matches that y), 0x00000000 is returned
    /// and this point is set to the neutral. The outcome does not leak
    /// through timing.
    ///
    /// When x = 0, both values of the sign bit are accepted.
    pub fn set_decode(&mut self, buf: &[u8; 32]) -> u32 {
        let sign_x = (buf[31] >> 7) as u32;
        let mut y = FieldElement::decode(buf);

        // x^2 = (y^2 - 1)/(d*y^2 + 1)
        let y2 = y.square();
        let u = y2 - FieldElement::ONE;
        let v = y2 * FieldElement::D + FieldElement::ONE;
        let (mut x, r) = FieldElement::sqrt_ratio(&u, &v);

        // Fix the sign of x; negation leaves limbs unpropagated.
        let nx = (x.sgn() ^ sign_x).wrapping_neg();
        x.set_cond(&-x, nx);
        x.set_carry();

        x.set_cond(&FieldElement::ZERO, !r);
        y.set_cond(&FieldElement::ONE, !r);
        self.X = x;
        self.Y = y;
        self.Z = FieldElement::ONE;
        self.T = x * y;
        r
    }

    /// Tries to decode a point from some bytes.
    ///
    /// `None` is returned if the y coordinate matches no curve point.
    /// Since this method returns an `Option<Point>`, it inherently leaks
    /// whether decoding succeeded or not; the decoded point itself does
    /// not leak. The returned point is affine (Z = 1).
    pub fn decode(buf: &[u8; 32]) -> Option<Point> {
        let mut P = Point::NEUTRAL;
        if P.set_decode(buf) != 0 {
            Some(P)
        } else {
            None
        }
    }

    /// Decodes two points; the error tells which encoding was invalid
    /// (the first one is checked first).
    pub fn decode_pair(buf1: &[u8; 32], buf2: &[u8; 32])
        -> Result<(Point, Point), DecodeError>
    {
        let P1 = Self::decode(buf1).ok_or(DecodeError::FirstPoint)?;
        let P2 = Self::decode(buf2).ok_or(DecodeError::SecondPoint)?;
        Ok((P1, P2))
    }

    /// Returns `true` if the provided bytes decode to a curve point.
    pub fn validate(buf: &[u8; 32]) -> bool {
        Self::decode(buf).is_some()
    }

    /// Encodes this point into exactly 32 bytes.
    ///
    /// Encoding is always canonical.
    pub fn encode(self) -> [u8; 32] {
        let iZ = self.Z.invert();
        let [x, y] = FieldElement::mul2(&[self.X, self.Y], &[iZ, iZ]);
        let mut r = y.encode();
        r[31] ^= (x.sgn() as u8) << 7;
        r
    }

    /// Encodes this point, which MUST be affine (Z = 1). This avoids the
    /// inversion of `encode()`.
    pub fn encode_affine(self) -> [u8; 32] {
        let mut r = self.Y.encode();
        r[31] ^= (self.X.sgn() as u8) << 7;
        r
    }

    /// Normalizes this point to Z = 1 (in place).
    pub fn set_affine(&mut self) {
        let iZ = self.Z.invert();
        let [x, y] = FieldElement::mul2(&[self.X, self.Y], &[iZ, iZ]);
        *self = Self::from_affine(&x.canonicalize(), &y.canonicalize());
        self.T.set_canonical();
    }

    #[inline(always)]
    pub fn to_affine(self) -> Self {
        let mut r = self;
        r.set_affine();
        r
    }

    /// Adds two points and returns the sum in affine coordinates.
    pub fn affine_add(P: &Self, Q: &Self) -> Self {
        (P + Q).to_affine()
    }

    /// Doubles a point n times and returns the result in affine
    /// coordinates.
    pub fn affine_xdouble(P: &Self, n: u32) -> Self {
        P.xdouble(n).to_affine()
    }

    /// Converts this point into the precomputed form.
    pub fn to_precomputed(&self) -> PrecomputedPoint {
        PrecomputedPoint {
            ymx: self.Y - self.X,
            ypx: self.Y + self.X,
            t2d: self.T * FieldElement::K,
            Z: self.Z,
        }
    }

    // Finish an addition from the four HWCD products:
    //   A = (Y1-X1)*(Y2-X2), B = (Y1+X1)*(Y2+X2), C = k*T1*T2, D = 2*Z1*Z2
    fn set_from_abcd(&mut self, A: &FieldElement, B: &FieldElement,
                     C: &FieldElement, D: &FieldElement)
    {
        let E = B - A;
        let F = D - C;
        let G = D + C;
        let H = B + A;
        let [X, Y, Z, T] = FieldElement::mul4(&[E, G, F, E], &[F, H, G, H]);
        self.X = X.canonicalize();
        self.Y = Y.canonicalize();
        self.Z = Z.canonicalize();
        self.T = T.canonicalize();
    }

    // Unified addition; negate_rhs selects a subtraction instead. Both
    // branches depend only on the operation, not on the data.
    fn set_add_unified(&mut self, rhs: &Self, negate_rhs: bool) {
        let r1 = self.Y.sub_nr(&self.X);
        let r3 = self.Y.add_nr(&self.X);
        let (r2, r4) = if negate_rhs {
            (rhs.Y.add_nr(&rhs.X), rhs.Y.sub_nr(&rhs.X))
        } else {
            (rhs.Y.sub_nr(&rhs.X), rhs.Y.add_nr(&rhs.X))
        };
        let zz = self.Z.add_nr(&self.Z);
        let [A, B, C, D] = FieldElement::mul4(
            &[r1, r3, self.T, zz], &[r2, r4, rhs.T, rhs.Z]);
        let mut C = C * FieldElement::K;
        if negate_rhs {
            C = -C;
        }
        self.set_from_abcd(&A, &B, &C, &D);
    }

    /// Adds another point (`rhs`) to this point.
    ///
    /// If both points are equal, then the doubling formulas are used
    /// instead; that test is not constant-time.
    pub fn set_add(&mut self, rhs: &Self) {
        if self.equals(*rhs) != 0 {
            self.set_double();
        } else {
            self.set_add_unified(rhs, false);
        }
    }

    /// Subtracts another point (`rhs`) from this point.
    ///
    /// If both points are equal, then this point is set to the neutral;
    /// that test is not constant-time.
    pub fn set_sub(&mut self, rhs: &Self) {
        if self.equals(*rhs) != 0 {
            self.set_neutral();
        } else {
            self.set_add_unified(rhs, true);
        }
    }

    // Adds or subtracts a precomputed point.
    fn set_add_precomputed_inner(&mut self, rhs: &PrecomputedPoint,
                                 negate_rhs: bool)
    {
        let r1 = self.Y.sub_nr(&self.X);
        let r3 = self.Y.add_nr(&self.X);
        let (m1, m2) = if negate_rhs {
            (rhs.ypx, rhs.ymx)
        } else {
            (rhs.ymx, rhs.ypx)
        };
        let zz = self.Z.add_nr(&self.Z);
        let [A, B, mut C, D] = FieldElement::mul4(
            &[r1, r3, self.T, zz], &[m1, m2, rhs.t2d, rhs.Z]);
        if negate_rhs {
            C = -C;
        }
        self.set_from_abcd(&A, &B, &C, &D);
    }

    /// Adds a precomputed point to this point. The formulas are
    /// complete (no special case for equal points).
    #[inline]
    pub fn set_add_precomputed(&mut self, rhs: &PrecomputedPoint) {
        self.set_add_precomputed_inner(rhs, false);
    }

    /// Subtracts a precomputed point from this point.
    #[inline]
    pub fn set_sub_precomputed(&mut self, rhs: &PrecomputedPoint) {
        self.set_add_precomputed_inner(rhs, true);
    }

    // Doubling, up to the last multiplications. Returns (X', Y', Z', T')
    // such that the double is (X'*Y' : Z'*T' : Y'*Z' : X'*T'); the T
    // coordinate of the source point is not used.
    #[inline]
    fn double_partial(&self) -> [FieldElement; 4] {
        let r1 = self.X.add_nr(&self.Y);
        let [XX, YY, ZZ, SS] = FieldElement::sqr4(&[self.X, self.Y, self.Z, r1]);
        let ZZ2 = ZZ + ZZ;
        let Tp = XX + YY;
        let Zp = XX - YY;
        let Yp = ZZ2.add_nr(&Zp);
        let Xp = Tp.sub_nr(&SS);
        [Xp, Yp, Zp, Tp]
    }

    /// Doubles this point (in place).
    pub fn set_double(&mut self) {
        let [Xp, Yp, Zp, Tp] = self.double_partial();
        let [X, Y, Z, T] = FieldElement::mul4(&[Xp, Zp, Yp, Xp], &[Yp, Tp, Zp, Tp]);
        self.X = X.canonicalize();
        self.Y = Y.canonicalize();
        self.Z = Z.canonicalize();
        self.T = T.canonicalize();
    }

    /// Doubles this point.
    #[inline(always)]
    pub fn double(self) -> Self {
        let mut r = self;
        r.set_double();
        r
    }

    /// Doubles this point n times (in place).
    pub fn set_xdouble(&mut self, n: u32) {
        if n == 0 {
            return;
        }

        // Doubling does not use T on input, so intermediate steps skip
        // it (three products instead of four).
        for _ in 1..n {
            let [Xp, Yp, Zp, Tp] = self.double_partial();
            let [X, Y, Z] = FieldElement::mul3(&[Xp, Zp, Yp], &[Yp, Tp, Zp]);
            self.X = X;
            self.Y = Y;
            self.Z = Z;
        }
        self.set_double();
    }

    /// Doubles this point n times.
    #[inline(always)]
    pub fn xdouble(self, n: u32) -> Self {
        let mut r = self;
        r.set_xdouble(n);
        r
    }

    /// Negates this point (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        self.X = -self.X;
        self.T = -self.T;
    }

    /// Compares two points for equality.
    ///
    /// Returned value is 0xFFFFFFFF if the two points are equal,
    /// 0x00000000 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let [x1, x2, y1, y2] = FieldElement::mul4(
            &[self.X, rhs.X, self.Y, rhs.Y], &[rhs.Z, self.Z, rhs.Z, self.Z]);
        x1.equals(x2) & y1.equals(y2)
    }

    /// Compares this point with an affine point (`rhs.Z` MUST be 1, e.g.
    /// a freshly decoded point). Cheaper than `equals()`.
    #[inline]
    pub fn equals_affine(self, rhs: Self) -> u32 {
        let [x, y] = FieldElement::mul2(&[rhs.X, rhs.Y], &[self.Z, self.Z]);
        x.equals(self.X) & y.equals(self.Y)
    }

    /// Tests whether this point is the neutral (identity point on the
    /// curve).
    ///
    /// Returned value is 0xFFFFFFFF for the neutral, 0x00000000
    /// otherwise.
    #[inline(always)]
    pub fn isneutral(self) -> u32 {
        // The neutral is the only point with y == 1.
        self.Y.equals(self.Z)
    }

    /// Tests whether this point has order 1, 2, 4 or 8.
    ///
    /// Returned value is 0xFFFFFFFF for a low order point, 0x00000000
    /// otherwise.
    pub fn has_small_order(self) -> u32 {
        // Points of order 1 and 2 have x = 0, points of order 4 have
        // y = 0, and the four points of order 8 share two y values.
        let t = tables();
        let [y0, y1] = FieldElement::mul2(&[t.order8_y0, t.order8_y1], &[self.Z, self.Z]);
        self.X.iszero() | self.Y.iszero() | self.Y.equals(y0) | self.Y.equals(y1)
    }

    /// Copies `P` into `self` if `ctl` = 0xFFFFFFFF, leaves `self`
    /// unchanged if `ctl` = 0x00000000.
    #[inline]
    pub fn set_cond(&mut self, P: &Self, ctl: u32) {
        self.X.set_cond(&P.X, ctl);
        self.Y.set_cond(&P.Y, ctl);
        self.Z.set_cond(&P.Z, ctl);
        self.T.set_cond(&P.T, ctl);
    }

    /// Returns a point equal to `P0` (if `ctl` = 0x00000000) or `P1` (if
    /// `ctl` = 0xFFFFFFFF).
    #[inline(always)]
    pub fn select(P0: &Self, P1: &Self, ctl: u32) -> Self {
        let mut P = *P0;
        P.set_cond(P1, ctl);
        P
    }

    /// Maps this point to the corresponding Montgomery curve and returns
    /// the affine u coordinate of the resulting point.
    ///
    /// If this point is the neutral, then 0 is returned.
    pub fn to_montgomery_u(&self) -> FieldElement {
        (self.Z + self.Y) * (self.Z - self.Y).invert()
    }
}

impl PrecomputedPoint {

    /// The neutral, in precomputed form.
    pub const NEUTRAL: Self = Self {
        ymx: FieldElement::ONE,
        ypx: FieldElement::ONE,
        t2d: FieldElement::ZERO,
        Z: FieldElement::ONE,
    };

    /// Conditionally negates this point (constant-time).
    #[inline]
    pub fn set_condneg(&mut self, ctl: u32) {
        FieldElement::cswap(&mut self.ymx, &mut self.ypx, ctl);
        self.t2d.set_cond(&-self.t2d, ctl);
    }

    // Constant-time lookup: win[i] contains (i+1)*P; returns k*P for
    // k in -8..+8. All entries are read.
    pub(crate) fn lookup(win: &[Self; 8], k: i8) -> Self {
        // Split k into its sign s (0xFFFFFFFF for negative) and
        // absolute value (f).
        let s = ((k as i32) >> 8) as u32;
        let f = ((k as u32) ^ s).wrapping_sub(s);
        let mut P = Self::NEUTRAL;
        for (i, e) in win.iter().enumerate() {
            // Values a-b and b-a both have their high bit equal to 0 only
            // if a == b.
            let j = (i as u32) + 1;
            let w = !(f.wrapping_sub(j) | j.wrapping_sub(f));
            let w = ((w as i32) >> 31) as u32;

            P.ymx.set_cond(&e.ymx, w);
            P.ypx.set_cond(&e.ypx, w);
            P.t2d.set_cond(&e.t2d, w);
            P.Z.set_cond(&e.Z, w);
        }
        P.set_condneg(s);
        P
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+ and -) on curve points, with or without references.

impl Add<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: Point) {
        self.set_add(&other);
    }
}

impl AddAssign<&Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: &Point) {
        self.set_add(other);
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: Point) {
        self.set_sub(&other);
    }
}

impl SubAssign<&Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: &Point) {
        self.set_sub(other);
    }
}

// ========================================================================
