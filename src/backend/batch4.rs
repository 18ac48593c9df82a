use core::ops::{Add, Neg, Sub};

use super::gf25519::{FieldElement, MASK, SHIFT, TWO_P, M25, M26};

/// Four field elements in transposed layout: `self.0[i][j]` is limb `i`
/// of the `j`-th element. Each `[u64; 4]` row models one 4-wide vector
/// of 64-bit lanes; all loops below run over the four lanes in lockstep.
///
/// Values only exist around batched multiplications and squarings;
/// they are built with `zip()` and consumed with `unzip()`.
#[derive(Clone, Copy, Debug)]
pub struct FieldBatch4(pub(crate) [[u64; 4]; 10]);

impl FieldBatch4 {

    /// Interleave four elements lane-wise.
    #[inline]
    pub fn zip(a: &FieldElement, b: &FieldElement,
               c: &FieldElement, d: &FieldElement) -> Self
    {
        let mut r = [[0u64; 4]; 10];
        for i in 0..10 {
            r[i] = [ a.0[i], b.0[i], c.0[i], d.0[i] ];
        }
        Self(r)
    }

    /// Extract the four elements (inverse of `zip()`).
    #[inline]
    pub fn unzip(&self) -> [FieldElement; 4] {
        let mut r = [FieldElement::ZERO; 4];
        for i in 0..10 {
            for j in 0..4 {
                r[j].0[i] = self.0[i][j];
            }
        }
        r
    }

    /// Integer product of the four pairs of elements, without any carry
    /// propagation. Output limbs may use up to 63 bits; the result must
    /// go through `compress()` before any other use.
    pub fn intmul(&self, rhs: &Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;

        // Pre-scaled operands: odd limbs of a doubled, all limbs of b
        // multiplied by 19 (for the wrapping terms).
        let mut a2 = [[0u64; 4]; 10];
        let mut b19 = [[0u64; 4]; 10];
        for i in 0..10 {
            for l in 0..4 {
                a2[i][l] = a[i][l] << 1;
                b19[i][l] = 19 * b[i][l];
            }
        }

        let mut c = [[0u64; 4]; 10];
        for i in 0..10 {
            for j in 0..10 {
                let x = if (i & j & 1) != 0 { &a2[i] } else { &a[i] };
                let y = if i + j >= 10 { &b19[j] } else { &b[j] };
                let k = (i + j) % 10;
                for l in 0..4 {
                    c[k][l] += x[l] * y[l];
                }
            }
        }
        Self(c)
    }

    /// Integer square of the four elements, without any carry
    /// propagation (see `intmul()`).
    pub fn intsqr(&self) -> Self {
        let a = &self.0;
        let mut c = [[0u64; 4]; 10];
        for i in 0..10 {
            // Diagonal term: doubled for odd limbs.
            let f = if (i & 1) != 0 { 2 } else { 1 };
            let f = if 2 * i >= 10 { 19 * f } else { f };
            let k = (2 * i) % 10;
            for l in 0..4 {
                c[k][l] += (f * a[i][l]) * a[i][l];
            }

            // Cross terms a_i*a_j appear twice; doubled again when both
            // limbs are odd.
            for j in (i + 1)..10 {
                let f = if (i & j & 1) != 0 { 4 } else { 2 };
                let f = if i + j >= 10 { 19 * f } else { f };
                let k = (i + j) % 10;
                for l in 0..4 {
                    c[k][l] += (f * a[i][l]) * a[j][l];
                }
            }
        }
        Self(c)
    }

    /// Carry propagation on all four lanes. The carry out of the top limb
    /// is folded back into limb 0 with a factor 19 (computed as
    /// 16*h + 2*h + h). Output elements are in the "carried" range.
    pub fn set_compress(&mut self) {
        let c = &mut self.0;
        for i in 0..9 {
            for l in 0..4 {
                let h = c[i][l] >> SHIFT[i];
                c[i][l] &= MASK[i];
                c[i + 1][l] += h;
            }
        }
        for l in 0..4 {
            let h = c[9][l] >> 25;
            c[9][l] &= M25;
            c[0][l] += (h << 4) + (h << 1) + h;
            let h = c[0][l] >> 26;
            c[0][l] &= M26;
            c[1][l] += h;
        }
    }

    #[inline(always)]
    pub fn compress(self) -> Self {
        let mut r = self;
        r.set_compress();
        r
    }

    /// Lane-wise addition without carry propagation.
    #[inline]
    pub fn add_nr(self, rhs: &Self) -> Self {
        let mut r = self;
        for i in 0..10 {
            for l in 0..4 {
                r.0[i][l] += rhs.0[i][l];
            }
        }
        r
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        *self = self.add_nr(rhs);
        self.set_compress();
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        for i in 0..10 {
            for l in 0..4 {
                self.0[i][l] = (self.0[i][l] + TWO_P[i]) - rhs.0[i][l];
            }
        }
        self.set_compress();
    }

    #[inline]
    fn set_neg(&mut self) {
        for i in 0..10 {
            for l in 0..4 {
                self.0[i][l] = TWO_P[i] - self.0[i][l];
            }
        }
    }
}

impl Add<FieldBatch4> for FieldBatch4 {
    type Output = FieldBatch4;

    #[inline(always)]
    fn add(self, other: FieldBatch4) -> FieldBatch4 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&FieldBatch4> for FieldBatch4 {
    type Output = FieldBatch4;

    #[inline(always)]
    fn add(self, other: &FieldBatch4) -> FieldBatch4 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Sub<FieldBatch4> for FieldBatch4 {
    type Output = FieldBatch4;

    #[inline(always)]
    fn sub(self, other: FieldBatch4) -> FieldBatch4 {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&FieldBatch4> for FieldBatch4 {
    type Output = FieldBatch4;

    #[inline(always)]
    fn sub(self, other: &FieldBatch4) -> FieldBatch4 {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Neg for FieldBatch4 {
    type Output = FieldBatch4;

    #[inline(always)]
    fn neg(self) -> FieldBatch4 {
        let mut r = self;
        r.set_neg();
        r
    }
}
