use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::batch4::FieldBatch4;

/// Element of GF(2^255-19), in radix 2^25.5 (ten limbs of alternating
/// 26 and 25 bits).
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u64; 10]);

// 2^26 - 1 and 2^25 - 1
pub(crate) const M26: u64 = 0x3FFFFFF;
pub(crate) const M25: u64 = 0x1FFFFFF;

// Limb widths and the matching masks.
pub(crate) const SHIFT: [u32; 10] = [ 26, 25, 26, 25, 26, 25, 26, 25, 26, 25 ];
pub(crate) const MASK: [u64; 10] = [ M26, M25, M26, M25, M26, M25, M26, M25, M26, M25 ];

// 2*p, limb by limb; added before any subtraction.
pub(crate) const TWO_P: [u64; 10] = [
    0x7FFFFDA, 0x3FFFFFE, 0x7FFFFFE, 0x3FFFFFE, 0x7FFFFFE,
    0x3FFFFFE, 0x7FFFFFE, 0x3FFFFFE, 0x7FFFFFE, 0x3FFFFFE,
];

impl FieldElement {

    // INTERNAL FORMAT
    // ===============
    //
    // Value is split over ten unsigned limbs e0 to e9, with limb i at bit
    // offset ceil(25.5*i), i.e. 0, 26, 51, 77, 102, 128, 153, 179, 204
    // and 230. Even limbs nominally hold 26 bits, odd limbs 25 bits. The
    // value is:
    //   e0 + e1*2^26 + e2*2^51 + e3*2^77 + ... + e9*2^230
    // implicitly modulo p = 2^255 - 19.
    //
    // Three ranges are used for limb values:
    //  - "carried": every limb fits in its width, except e1 which may
    //    exceed 2^25 by a small carry (less than 2^20). All reducing
    //    operations (add, sub, mul, square, carry...) return carried values.
    //  - "bounded": every limb is at most the matching limb of 2*p (see
    //    TWO_P). Carried values are bounded; neg() returns bounded values.
    //    The operand of neg() and the right operand of sub() must be
    //    bounded, otherwise the limb subtraction underflows.
    //  - "not reduced": output of add_nr() or sub_nr() on bounded inputs
    //    (limbs below 1.5*2^27). Such values may only be fed to mul(),
    //    square() and the batched mul*() / sqr*() functions.
    //
    // Canonical values (output of canonicalize()) are carried and lie in
    // the [0, p) range.
    //
    // For multiplications, limbs i and j contribute to limb i+j. When both
    // i and j are odd, offset(i) + offset(j) = offset(i+j) + 1, hence the
    // product is doubled. Terms with i + j >= 10 wrap around with a factor
    // 19 (since 2^255 = 19 mod p). Accumulation is over 128 bits for the
    // plain mul(), and over 64 bits for the batched variants; with inputs
    // below 1.5*2^27 the largest 64-bit accumulator is below 2^62.7.

    pub const ZERO: Self = Self([ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0 ]);
    pub const ONE: Self = Self([ 1, 0, 0, 0, 0, 0, 0, 0, 0, 0 ]);
    pub const MINUS_ONE: Self = Self([
        0x3FFFFEC, 0x1FFFFFF, 0x3FFFFFF, 0x1FFFFFF, 0x3FFFFFF,
        0x1FFFFFF, 0x3FFFFFF, 0x1FFFFFF, 0x3FFFFFF, 0x1FFFFFF,
    ]);

    /// Edwards25519 curve parameter d = -121665/121666.
    pub const D: Self = Self::decode(&[
        0xA3, 0x78, 0x59, 0x13, 0xCA, 0x4D, 0xEB, 0x75,
        0xAB, 0xD8, 0x41, 0x41, 0x4D, 0x0A, 0x70, 0x00,
        0x98, 0xE8, 0x79, 0x77, 0x79, 0x40, 0xC7, 0x8C,
        0x73, 0xFE, 0x6F, 0x2B, 0xEE, 0x6C, 0x03, 0x52,
    ]);

    /// k = 2*d, used by the extended-coordinates addition.
    pub const K: Self = Self::decode(&[
        0x59, 0xF1, 0xB2, 0x26, 0x94, 0x9B, 0xD6, 0xEB,
        0x56, 0xB1, 0x83, 0x82, 0x9A, 0x14, 0xE0, 0x00,
        0x30, 0xD1, 0xF3, 0xEE, 0xF2, 0x80, 0x8E, 0x19,
        0xE7, 0xFC, 0xDF, 0x56, 0xDC, 0xD9, 0x06, 0x24,
    ]);

    /// A square root of -1 (2^((p-1)/4)).
    pub const SQRT_M1: Self = Self::decode(&[
        0xB0, 0xA0, 0x0E, 0x4A, 0x27, 0x1B, 0xEE, 0xC4,
        0x78, 0xE4, 0x2F, 0xAD, 0x06, 0x18, 0x43, 0x2F,
        0xA7, 0xD7, 0xFB, 0x3D, 0x99, 0x00, 0x4D, 0x2B,
        0x0B, 0xDF, 0xC1, 0x4F, 0x80, 0x24, 0x83, 0x2B,
    ]);

    /// Create an element from a small integer.
    pub const fn from_u32(x: u32) -> Self {
        let x = x as u64;
        Self([ x & M26, x >> 26, 0, 0, 0, 0, 0, 0, 0, 0 ])
    }

    /// Decode an element from 32 bytes (unsigned little-endian). The top
    /// bit of the last byte is ignored. The value is NOT reduced: inputs
    /// in the p to 2^255-1 range are accepted as is, and will be encoded
    /// back in canonical form. This function never fails.
    pub const fn decode(buf: &[u8; 32]) -> Self {
        const fn le32(buf: &[u8; 32], off: usize) -> u64 {
            (buf[off] as u64)
                | ((buf[off + 1] as u64) << 8)
                | ((buf[off + 2] as u64) << 16)
                | ((buf[off + 3] as u64) << 24)
        }
        let t0 = le32(buf, 0);
        let t1 = le32(buf, 4);
        let t2 = le32(buf, 8);
        let t3 = le32(buf, 12);
        let t4 = le32(buf, 16);
        let t5 = le32(buf, 20);
        let t6 = le32(buf, 24);
        let t7 = le32(buf, 28) & 0x7FFFFFFF;
        Self([
            t0 & M26,
            ((t0 >> 26) | (t1 << 6)) & M25,
            ((t1 >> 19) | (t2 << 13)) & M26,
            ((t2 >> 13) | (t3 << 19)) & M25,
            (t3 >> 6) & M26,
            t4 & M25,
            ((t4 >> 25) | (t5 << 7)) & M26,
            ((t5 >> 19) | (t6 << 13)) & M25,
            ((t6 >> 12) | (t7 << 20)) & M26,
            (t7 >> 6) & M25,
        ])
    }

    /// Encode this element into 32 bytes (canonical, little-endian).
    pub fn encode(self) -> [u8; 32] {
        let e = self.canonicalize().0;
        let h0 = e[0] | (e[1] << 26) | (e[2] << 51);
        let h1 = (e[2] >> 13) | (e[3] << 13) | (e[4] << 38);
        let h2 = e[5] | (e[6] << 25) | (e[7] << 51);
        let h3 = (e[7] >> 13) | (e[8] << 12) | (e[9] << 38);
        let mut r = [0u8; 32];
        r[0..8].copy_from_slice(&h0.to_le_bytes());
        r[8..16].copy_from_slice(&h1.to_le_bytes());
        r[16..24].copy_from_slice(&h2.to_le_bytes());
        r[24..32].copy_from_slice(&h3.to_le_bytes());
        r
    }

    /// Get the "sign" of this element: the least significant bit of its
    /// canonical encoding (0 or 1).
    #[inline]
    pub fn sgn(self) -> u32 {
        (self.encode()[0] & 1) as u32
    }

    // Propagate carries so that the value is in the "carried" range; the
    // carry out of the top limb wraps around with a factor 19.
    #[inline]
    pub fn set_carry(&mut self) {
        for i in 0..9 {
            let c = self.0[i] >> SHIFT[i];
            self.0[i] &= MASK[i];
            self.0[i + 1] += c;
        }
        let c = self.0[9] >> 25;
        self.0[9] &= M25;
        self.0[0] += 19 * c;
        let c = self.0[0] >> 26;
        self.0[0] &= M26;
        self.0[1] += c;
    }

    #[inline(always)]
    pub fn carry(self) -> Self {
        let mut r = self;
        r.set_carry();
        r
    }

    /// Reduce this value to its unique representative in [0, p).
    /// Idempotent.
    pub fn set_canonical(&mut self) {
        // After carry propagation, value is lower than 2*p. Adding 19
        // yields a carry out of bit 255 if and only if value >= p.
        self.set_carry();
        let mut c = (self.0[0] + 19) >> 26;
        for i in 1..10 {
            c = (self.0[i] + c) >> SHIFT[i];
        }
        self.0[0] += 19 * c;
        for i in 0..9 {
            let c = self.0[i] >> SHIFT[i];
            self.0[i] &= MASK[i];
            self.0[i + 1] += c;
        }
        self.0[9] &= M25;
    }

    #[inline(always)]
    pub fn canonicalize(self) -> Self {
        let mut r = self;
        r.set_canonical();
        r
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        for i in 0..10 {
            self.0[i] += rhs.0[i];
        }
        self.set_carry();
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        for i in 0..10 {
            self.0[i] = (self.0[i] + TWO_P[i]) - rhs.0[i];
        }
        self.set_carry();
    }

    #[inline]
    fn set_neg(&mut self) {
        for i in 0..10 {
            self.0[i] = TWO_P[i] - self.0[i];
        }
    }

    /// Addition without carry propagation; the output is "not reduced"
    /// and may only be used as a multiplication operand.
    #[inline]
    pub fn add_nr(self, rhs: &Self) -> Self {
        let mut r = self;
        for i in 0..10 {
            r.0[i] += rhs.0[i];
        }
        r
    }

    /// Subtraction without carry propagation; the output is "not reduced"
    /// and may only be used as a multiplication operand. `rhs` must be
    /// bounded.
    #[inline]
    pub fn sub_nr(self, rhs: &Self) -> Self {
        let mut r = self;
        for i in 0..10 {
            r.0[i] = (r.0[i] + TWO_P[i]) - rhs.0[i];
        }
        r
    }

    fn set_mul(&mut self, rhs: &Self) {
        let a = &self.0;
        let b = &rhs.0;
        let mut c = [0u128; 10];
        for i in 0..10 {
            let ai = a[i];
            let ai2 = ai << 1;
            for j in 0..10 {
                let x = if (i & j & 1) != 0 { ai2 } else { ai };
                let y = if i + j >= 10 { 19 * b[j] } else { b[j] };
                c[(i + j) % 10] += (x as u128) * (y as u128);
            }
        }
        self.0 = carry_wide(&c);
    }

    /// Square this value (in place). Cross products are computed once
    /// and doubled, which needs 55 word products instead of 100.
    pub fn set_square(&mut self) {
        let a = &self.0;
        let mut c = [0u128; 10];
        for i in 0..10 {
            let f = if (i & 1) != 0 { 2 } else { 1 };
            let f = if 2 * i >= 10 { 19 * f } else { f };
            c[(2 * i) % 10] += ((f * a[i]) as u128) * (a[i] as u128);
            for j in (i + 1)..10 {
                let f = if (i & j & 1) != 0 { 4 } else { 2 };
                let f = if i + j >= 10 { 19 * f } else { f };
                c[(i + j) % 10] += ((f * a[i]) as u128) * (a[j] as u128);
            }
        }
        self.0 = carry_wide(&c);
    }

    /// Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline(always)]
    fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    /// Multiply this value by 121666 = (486662 + 2)/4.
    pub fn mul_121666(self) -> Self {
        let mut r = [0u64; 10];
        let mut c = 0u64;
        for i in 0..10 {
            c += self.0[i] * 121666;
            r[i] = c & MASK[i];
            c >>= SHIFT[i];
        }
        r[0] += 19 * c;
        Self(r).carry()
    }

    /// Raise this value to the power 2^252 - 3 = (p - 5)/8.
    pub fn pow22523(self) -> Self {
        let t2 = self.square() * self;
        let t4 = t2.xsquare(2) * t2;
        let t5 = t4.square() * self;
        let t10 = t5.xsquare(5) * t5;
        let t20 = t10.xsquare(10) * t10;
        let t25 = t20.xsquare(5) * t5;
        let t50 = t25.xsquare(25) * t25;
        let t100 = t50.xsquare(50) * t50;
        let t125 = t100.xsquare(25) * t25;
        let t250 = t125.xsquare(125) * t125;
        t250.xsquare(2) * self
    }

    /// Invert this value (Fermat's little theorem). If this value is
    /// zero, then zero is returned.
    pub fn invert(self) -> Self {
        // a^(p-2) = (a^(2^252-3))^8 * a^3
        let t = self.pow22523().xsquare(3);
        t * self.square() * self
    }

    /// Compute a square root of u/v. Returned values are (r, ok): if
    /// u/v is a square, then ok = 0xFFFFFFFF and r*r*v = u; otherwise
    /// ok = 0x00000000 and r is unspecified.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> (Self, u32) {
        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut r = (u * v3) * (u * v7).pow22523();
        let ok1 = (v * r.square()).equals(*u);
        let r2 = r * Self::SQRT_M1;
        let ok2 = (v * r2.square()).equals(*u);
        r.set_cond(&r2, ok2 & !ok1);
        (r, ok1 | ok2)
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        for i in 0..10 {
            self.0[i] ^= cw & (self.0[i] ^ a.0[i]);
        }
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or not exchanged if ctl == 0x00000000.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        for i in 0..10 {
            let t = cw & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let r = self.canonicalize();
        let t = r.0.iter().fold(0u64, |acc, &x| acc | x);
        (((t | t.wrapping_neg()) >> 63) as u32).wrapping_sub(1)
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    /// Compute two products with the 4-lane engine: returns
    /// `[a[0]*b[0], a[1]*b[1]]`.
    pub fn mul2(a: &[Self; 2], b: &[Self; 2]) -> [Self; 2] {
        let x = FieldBatch4::zip(&a[0], &a[1], &a[0], &a[1]);
        let y = FieldBatch4::zip(&b[0], &b[1], &b[0], &b[1]);
        let [r0, r1, _, _] = x.intmul(&y).compress().unzip();
        [r0, r1]
    }

    /// Compute three products with the 4-lane engine (the last lane
    /// recomputes the first product).
    pub fn mul3(a: &[Self; 3], b: &[Self; 3]) -> [Self; 3] {
        let x = FieldBatch4::zip(&a[0], &a[1], &a[2], &a[0]);
        let y = FieldBatch4::zip(&b[0], &b[1], &b[2], &b[0]);
        let [r0, r1, r2, _] = x.intmul(&y).compress().unzip();
        [r0, r1, r2]
    }

    /// Compute four independent products `a[i]*b[i]` with the 4-lane
    /// engine.
    pub fn mul4(a: &[Self; 4], b: &[Self; 4]) -> [Self; 4] {
        let x = FieldBatch4::zip(&a[0], &a[1], &a[2], &a[3]);
        let y = FieldBatch4::zip(&b[0], &b[1], &b[2], &b[3]);
        x.intmul(&y).compress().unzip()
    }

    pub fn sqr2(a: &[Self; 2]) -> [Self; 2] {
        let x = FieldBatch4::zip(&a[0], &a[1], &a[0], &a[1]);
        let [r0, r1, _, _] = x.intsqr().compress().unzip();
        [r0, r1]
    }

    pub fn sqr3(a: &[Self; 3]) -> [Self; 3] {
        let x = FieldBatch4::zip(&a[0], &a[1], &a[2], &a[0]);
        let [r0, r1, r2, _] = x.intsqr().compress().unzip();
        [r0, r1, r2]
    }

    pub fn sqr4(a: &[Self; 4]) -> [Self; 4] {
        FieldBatch4::zip(&a[0], &a[1], &a[2], &a[3]).intsqr().compress().unzip()
    }
}

// Carry propagation over 128-bit accumulators, with a final wrap of the
// top carry into limb 0 (and one more step into limb 1).
#[inline]
fn carry_wide(c: &[u128; 10]) -> [u64; 10] {
    let mut r = [0u64; 10];
    let mut cc = 0u128;
    for i in 0..10 {
        let v = c[i] + cc;
        r[i] = (v as u64) & MASK[i];
        cc = v >> SHIFT[i];
    }
    let h = r[0] + 19 * (cc as u64);
    r[0] = h & M26;
    r[1] += h >> 26;
    r
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, -...) on field element instances, with or without references.

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn add(self, other: FieldElement) -> FieldElement {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn add(self, other: &FieldElement) -> FieldElement {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn add(self, other: FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn add(self, other: &FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<FieldElement> for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, other: FieldElement) {
        self.set_add(&other);
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, other: &FieldElement) {
        self.set_add(other);
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn mul(self, other: FieldElement) -> FieldElement {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn mul(self, other: &FieldElement) -> FieldElement {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn mul(self, other: FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn mul(self, other: &FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<FieldElement> for FieldElement {
    #[inline(always)]
    fn mul_assign(&mut self, other: FieldElement) {
        self.set_mul(&other);
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    #[inline(always)]
    fn mul_assign(&mut self, other: &FieldElement) {
        self.set_mul(other);
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn neg(self) -> FieldElement {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn neg(self) -> FieldElement {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn sub(self, other: FieldElement) -> FieldElement {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn sub(self, other: &FieldElement) -> FieldElement {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn sub(self, other: FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn sub(self, other: &FieldElement) -> FieldElement {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<FieldElement> for FieldElement {
    #[inline(always)]
    fn sub_assign(&mut self, other: FieldElement) {
        self.set_sub(&other);
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    #[inline(always)]
    fn sub_assign(&mut self, other: &FieldElement) {
        self.set_sub(other);
    }
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::FieldElement;
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha256, Digest};

    fn modulus() -> BigInt {
        (BigInt::from(1u32) << 255) - BigInt::from(19u32)
    }

    fn to_big(x: FieldElement) -> BigInt {
        BigInt::from_bytes_le(Sign::Plus, &x.encode())
    }

    // va, vb and vc must be 32 bytes each in length
    fn check_gf_ops(va: &[u8], vb: &[u8], vc: &[u8]) {
        let zp = modulus();
        let zp4 = &zp << 2;

        let mut ba = [0u8; 32];
        ba.copy_from_slice(va);
        let mut bb = [0u8; 32];
        bb.copy_from_slice(vb);
        let mut bc = [0u8; 32];
        bc.copy_from_slice(vc);
        let a = FieldElement::decode(&ba);
        let b = FieldElement::decode(&bb);
        let c = FieldElement::decode(&bc);
        ba[31] &= 0x7F;
        bb[31] &= 0x7F;
        bc[31] &= 0x7F;
        let za = BigInt::from_bytes_le(Sign::Plus, &ba);
        let zb = BigInt::from_bytes_le(Sign::Plus, &bb);
        let zc = BigInt::from_bytes_le(Sign::Plus, &bc);

        assert!(to_big(a) == &za % &zp);
        assert!(to_big(a + b) == (&za + &zb) % &zp);
        assert!(to_big(a - b) == ((&zp4 + &za) - &zb) % &zp);
        assert!(to_big(-a) == (&zp4 - &za) % &zp);
        assert!(to_big(a * b) == (&za * &zb) % &zp);
        assert!(to_big(a.square()) == (&za * &za) % &zp);
        assert!(to_big(a.mul_121666()) == (&za * 121666u32) % &zp);

        // Not reduced operands, fed to both multiplication engines.
        let s = a.add_nr(&b);
        let d = a.sub_nr(&b);
        let zs = (&za + &zb) % &zp;
        let zd = ((&zp4 + &za) - &zb) % &zp;
        assert!(to_big(s * d) == (&zs * &zd) % &zp);
        assert!(to_big(d.square()) == (&zd * &zd) % &zp);
        let [m0, m1, m2, m3] = FieldElement::mul4(&[s, d, a, d], &[d, d, b, s]);
        assert!(to_big(m0) == (&zs * &zd) % &zp);
        assert!(to_big(m1) == (&zd * &zd) % &zp);
        assert!(to_big(m2) == (&za * &zb) % &zp);
        assert!(to_big(m3) == (&zs * &zd) % &zp);
        let [q0, q1, q2, q3] = FieldElement::sqr4(&[s, d, a, b]);
        assert!(to_big(q0) == (&zs * &zs) % &zp);
        assert!(to_big(q1) == (&zd * &zd) % &zp);
        assert!(to_big(q2) == (&za * &za) % &zp);
        assert!(to_big(q3) == (&zb * &zb) % &zp);

        // Canonical form.
        let ac = a.canonicalize();
        assert!(ac.0 == ac.canonicalize().0);
        assert!(FieldElement::decode(&ac.encode()).0 == ac.0);

        // Ring axioms.
        assert!(((a + b) * (a - b)).equals(a.square() - b.square()) == 0xFFFFFFFF);
        assert!(((a + b) + c).equals(a + (b + c)) == 0xFFFFFFFF);
        assert!((a * (b + c)).equals(a * b + a * c) == 0xFFFFFFFF);
        assert!(to_big(a * (b + c)) == (&za * (&zb + &zc)) % &zp);
        assert!(to_big((a - c) * b) == (((&zp4 + &za) - &zc) * &zb) % &zp);

        if a.iszero() == 0 {
            assert!((a * a.invert()).equals(FieldElement::ONE) == 0xFFFFFFFF);
        } else {
            assert!(a.invert().iszero() == 0xFFFFFFFF);
        }
    }

    #[test]
    fn gf25519_ops() {
        let mut va = [0u8; 32];
        let mut vb = [0u8; 32];
        check_gf_ops(&va, &vb, &vb);
        assert!(FieldElement::decode(&va).iszero() == 0xFFFFFFFF);
        for i in 0..32 {
            va[i] = 0xFF;
            vb[i] = 0xFF;
        }
        check_gf_ops(&va, &vb, &vb);
        check_gf_ops(&va, &[0u8; 32], &vb);

        // 2^255 - 1 = p + 18
        assert!(FieldElement::decode(&va).equals(FieldElement::from_u32(18)) == 0xFFFFFFFF);
        // p itself decodes to zero, and encodes back as zero.
        va[0] = 0xED;
        va[31] = 0x7F;
        assert!(FieldElement::decode(&va).iszero() == 0xFFFFFFFF);
        assert!(FieldElement::decode(&va).encode() == [0u8; 32]);

        let mut sh = Sha256::new();
        for i in 0..300 {
            sh.update(((3 * i + 0) as u64).to_le_bytes());
            let va = sh.finalize_reset();
            sh.update(((3 * i + 1) as u64).to_le_bytes());
            let vb = sh.finalize_reset();
            sh.update(((3 * i + 2) as u64).to_le_bytes());
            let vc = sh.finalize_reset();
            check_gf_ops(&va, &vb, &vc);
            let mut ba = [0u8; 32];
            ba.copy_from_slice(&va);
            let mut bb = [0u8; 32];
            bb.copy_from_slice(&vb);
            let a = FieldElement::decode(&ba);
            let b = FieldElement::decode(&bb);
            assert!(a.iszero() == 0);
            assert!(a.equals(b) == 0);
            assert!(a.equals(a) == 0xFFFFFFFF);
        }
    }

    #[test]
    fn gf25519_square() {
        let zp = modulus();
        let mut sh = Sha256::new();
        for i in 0..200 {
            sh.update((i as u64).to_le_bytes());
            let mut buf = [0u8; 32];
            buf.copy_from_slice(&sh.finalize_reset());
            let a = FieldElement::decode(&buf);
            let b = -a;
            // Not reduced inputs, at the top of their range.
            let s = a.add_nr(&b);
            let d = a.sub_nr(&b);
            for x in [a, b, s, d] {
                let zx = to_big(x.carry());
                let q = x.square();
                assert!(q.0 == (x * x).0);
                assert!(to_big(q) == (&zx * &zx) % &zp);
                let mut y = x;
                y.set_square();
                assert!(y.0 == q.0);
            }
            assert!(a.xsquare(3).equals(a.square().square().square()) == 0xFFFFFFFF);
        }

        // All limbs at their not reduced maximum.
        let m = FieldElement([(3 << 26) - 1; 10]);
        let zm = to_big(m.carry());
        assert!(m.square().0 == (m * m).0);
        assert!(to_big(m.square()) == (&zm * &zm) % &zp);
    }

    #[test]
    fn gf25519_constants() {
        let m1 = FieldElement::MINUS_ONE;
        assert!((m1 + FieldElement::ONE).iszero() == 0xFFFFFFFF);
        assert!(FieldElement::SQRT_M1.square().equals(m1) == 0xFFFFFFFF);
        assert!(FieldElement::K.equals(FieldElement::D + FieldElement::D) == 0xFFFFFFFF);
        // d*121666 = -121665
        let t = FieldElement::D * FieldElement::from_u32(121666);
        assert!((t + FieldElement::from_u32(121665)).iszero() == 0xFFFFFFFF);
        assert!(FieldElement::ONE.mul_121666().equals(FieldElement::from_u32(121666)) == 0xFFFFFFFF);
    }

    #[test]
    fn gf25519_batch_wrappers() {
        let mut sh = Sha256::new();
        for i in 0..50 {
            let mut x = [FieldElement::ZERO; 4];
            let mut y = [FieldElement::ZERO; 4];
            for j in 0..4 {
                let mut buf = [0u8; 32];
                sh.update(((8 * i + 2 * j) as u64).to_le_bytes());
                buf.copy_from_slice(&sh.finalize_reset());
                x[j] = FieldElement::decode(&buf);
                sh.update(((8 * i + 2 * j + 1) as u64).to_le_bytes());
                buf.copy_from_slice(&sh.finalize_reset());
                y[j] = FieldElement::decode(&buf);
            }
            let p4 = FieldElement::mul4(&x, &y);
            let s4 = FieldElement::sqr4(&x);
            for j in 0..4 {
                assert!(p4[j].equals(x[j] * y[j]) == 0xFFFFFFFF);
                assert!(s4[j].equals(x[j].square()) == 0xFFFFFFFF);
            }
            let p3 = FieldElement::mul3(&[x[0], x[1], x[2]], &[y[0], y[1], y[2]]);
            let s3 = FieldElement::sqr3(&[x[0], x[1], x[2]]);
            for j in 0..3 {
                assert!(p3[j].equals(p4[j]) == 0xFFFFFFFF);
                assert!(s3[j].equals(s4[j]) == 0xFFFFFFFF);
            }
            let p2 = FieldElement::mul2(&[x[2], x[3]], &[y[2], y[3]]);
            let s2 = FieldElement::sqr2(&[x[2], x[3]]);
            for j in 0..2 {
                assert!(p2[j].equals(p4[j + 2]) == 0xFFFFFFFF);
                assert!(s2[j].equals(s4[j + 2]) == 0xFFFFFFFF);
            }
        }
    }

    #[test]
    fn gf25519_sqrt_ratio() {
        let two = FieldElement::from_u32(2);
        let mut sh = Sha256::new();
        for i in 0..40 {
            let mut buf = [0u8; 32];
            sh.update(((2 * i) as u64).to_le_bytes());
            buf.copy_from_slice(&sh.finalize_reset());
            let a = FieldElement::decode(&buf);
            sh.update(((2 * i + 1) as u64).to_le_bytes());
            buf.copy_from_slice(&sh.finalize_reset());
            let v = FieldElement::decode(&buf);

            // u = a^2*v is a square times v.
            let u = a.square() * v;
            let (r, ok) = FieldElement::sqrt_ratio(&u, &v);
            assert!(ok == 0xFFFFFFFF);
            assert!((r.square() * v).equals(u) == 0xFFFFFFFF);

            // 2 is not a square modulo p.
            let u2 = u * two;
            let (_, ok) = FieldElement::sqrt_ratio(&u2, &v);
            assert!(ok == 0);
        }
        let (r, ok) = FieldElement::sqrt_ratio(&FieldElement::ZERO, &FieldElement::ONE);
        assert!(ok == 0xFFFFFFFF);
        assert!(r.iszero() == 0xFFFFFFFF);
    }

    #[test]
    fn gf25519_select() {
        let a = FieldElement::from_u32(5);
        let b = FieldElement::from_u32(7);
        assert!(FieldElement::select(&a, &b, 0).equals(a) == 0xFFFFFFFF);
        assert!(FieldElement::select(&a, &b, 0xFFFFFFFF).equals(b) == 0xFFFFFFFF);
        let (mut x, mut y) = (a, b);
        FieldElement::cswap(&mut x, &mut y, 0);
        assert!(x.equals(a) == 0xFFFFFFFF && y.equals(b) == 0xFFFFFFFF);
        FieldElement::cswap(&mut x, &mut y, 0xFFFFFFFF);
        assert!(x.equals(b) == 0xFFFFFFFF && y.equals(a) == 0xFFFFFFFF);
        assert!(a.sgn() == 1 && b.sgn() == 1);
        assert!((-a).sgn() == 0);
    }
}
