//! X25519 key exchange (RFC 7748) on top of the radix-2^25.5 field.
//!
//! `x25519()` runs the Montgomery ladder of RFC 7748, section 5, on the
//! u coordinate of a point of Curve25519 or of its quadratic twist. Each
//! ladder step pairs its independent multiplications and squarings
//! through the batched `mul2()` / `sqr2()` functions of the field.
//!
//! `x25519_base()` is the special case of the conventional generator
//! (u = 9). It computes the product on the twisted Edwards curve with
//! the constant-time fixed-base multiplication, then maps the result to
//! the Montgomery curve; output is identical to `x25519()` with u = 9.
//!
//! Scalars are clamped (bits 0, 1, 2 and 255 cleared, bit 254 set). The
//! top bit of the input u coordinate is ignored and non-canonical values
//! are accepted. No input is rejected, including low-order points.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748

use super::field::FieldElement;
use super::scalarmul::scalar_mul_base_ct;

fn clamp(scalar: &[u8; 32]) -> [u8; 32] {
    let mut s = *scalar;
    s[0] &= 248;
    s[31] &= 127;
    s[31] |= 64;
    s
}

/// X25519 function, general case.
///
/// `point` is the little-endian encoding of the u coordinate, `scalar`
/// the little-endian encoding of the scalar (clamped before use). The
/// encoded u coordinate of the product is returned.
pub fn x25519(point: &[u8; 32], scalar: &[u8; 32]) -> [u8; 32] {
    let s = clamp(scalar);

    // decode() ignores the top bit and does not reduce.
    let x1 = FieldElement::decode(point);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut swap = 0u32;

    for t in (0..255).rev() {
        let kt = (((s[t >> 3] >> (t & 7)) & 1) as u32).wrapping_neg();
        swap ^= kt;
        FieldElement::cswap(&mut x2, &mut x3, swap);
        FieldElement::cswap(&mut z2, &mut z3, swap);
        swap = kt;

        let a = x2.add_nr(&z2);
        let b = x2.sub_nr(&z2);
        let c = x3.add_nr(&z3);
        let d = x3.sub_nr(&z3);
        let [aa, bb] = FieldElement::sqr2(&[a, b]);
        let [da, cb] = FieldElement::mul2(&[d, c], &[a, b]);
        let [x3n, t3] = FieldElement::sqr2(&[da.add_nr(&cb), da.sub_nr(&cb)]);
        x3 = x3n;
        z3 = x1 * t3;

        // a24 = 121665 and AA + a24*E = BB + 121666*E
        let e = aa - bb;
        let [x2n, z2n] = FieldElement::mul2(&[aa, e], &[bb, bb + e.mul_121666()]);
        x2 = x2n;
        z2 = z2n;
    }
    FieldElement::cswap(&mut x2, &mut x3, swap);
    FieldElement::cswap(&mut z2, &mut z3, swap);

    // invert(0) = 0, so a zero z2 yields u = 0.
    (x2 * z2.invert()).encode()
}

/// X25519 with the conventional generator (u = 9); constant-time.
pub fn x25519_base(scalar: &[u8; 32]) -> [u8; 32] {
    let s = clamp(scalar);
    scalar_mul_base_ct(&s).to_montgomery_u().encode()
}

// ========================================================================
