#![allow(non_snake_case)]

mod util;
use util::{core_cycles, median, seed32};

use ed25519_r2526::ed25519::Point;
use ed25519_r2526::scalarmul::{
    double_scalar_mul_base, multi_scalar_mul, multi_scalar_mul_straus,
    scalar_mul_base, scalar_mul_base_ct, scalar_mul_vartime,
};
use sha2::{Sha256, Digest};

// Flip the low bit of the scalar depending on the output, so that the
// loop cannot be optimized away.
fn feedback(s: &mut [u8; 32], P: &Point) {
    s[0] ^= (P.isneutral() as u8) ^ 1;
}

fn bench_decode() -> (f64, u8) {
    let mut s = seed32();
    let mut e = scalar_mul_base(&s).encode();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let mut P = Point::NEUTRAL;
            let ok = P.set_decode(&e);
            e[0] ^= (ok as u8) & 1;
            feedback(&mut s, &P);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), s[0] ^ e[0])
}

fn bench_encode() -> (f64, u8) {
    let mut P = scalar_mul_base(&seed32());
    let mut tt = [0; 100];
    let mut x = 0u8;
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            x ^= P.encode()[0];
            P.set_double();
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), x)
}

fn bench_add() -> (f64, u8) {
    let mut P = scalar_mul_base(&seed32());
    let mut Q = P.double();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            P += Q;
            Q += P;
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 200.0), P.encode()[0])
}

fn bench_double() -> (f64, u8) {
    let mut P = scalar_mul_base(&seed32());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        P.set_xdouble(200);
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 200.0), P.encode()[0])
}

fn bench_mul_base() -> (f64, u8) {
    let mut s = seed32();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let P = scalar_mul_base(&s);
            feedback(&mut s, &P);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), s[0])
}

fn bench_mul_base_ct() -> (f64, u8) {
    let mut s = seed32();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let P = scalar_mul_base_ct(&s);
            feedback(&mut s, &P);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), s[0])
}

fn bench_mul_vartime() -> (f64, u8) {
    let mut s = seed32();
    let mut P = scalar_mul_base(&s);
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            P = scalar_mul_vartime(&s, &P);
            feedback(&mut s, &P);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), s[0])
}

fn bench_double_mul_base() -> (f64, u8) {
    let mut s = seed32();
    let mut t = s;
    t[31] ^= 0x55;
    let mut P = scalar_mul_base(&t);
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            P = double_scalar_mul_base(&s, &P, &t);
            feedback(&mut s, &P);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), s[0])
}

// Sum of 32 products, one at a time and with Straus's method; reported
// per product.
fn bench_multi_mul(straus: bool) -> (f64, u8) {
    let z = core_cycles();
    let mut sh = Sha256::new();
    let mut n = [[0u8; 32]; 32];
    let mut a = [Point::NEUTRAL; 32];
    for i in 0..32 {
        sh.update(z.to_le_bytes());
        sh.update((i as u64).to_le_bytes());
        n[i][..].copy_from_slice(&sh.finalize_reset());
        a[i] = scalar_mul_base(&n[i]);
    }
    let mut tt = [0; 20];
    let mut x = 0u8;
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..10 {
            let P = if straus {
                multi_scalar_mul_straus(&n, &a)
            } else {
                multi_scalar_mul(&n, &a)
            };
            feedback(&mut n[0], &P);
            x ^= n[0][0];
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 320.0), x)
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_decode();
    bx ^= x;
    println!("Ed25519 decode:                {:13.2}", v);
    let (v, x) = bench_encode();
    bx ^= x;
    println!("Ed25519 encode:                {:13.2}", v);
    let (v, x) = bench_add();
    bx ^= x;
    println!("Ed25519 add:                   {:13.2}", v);
    let (v, x) = bench_double();
    bx ^= x;
    println!("Ed25519 double:                {:13.2}", v);
    let (v, x) = bench_mul_base();
    bx ^= x;
    println!("Ed25519 mul_base (w-NAF):      {:13.2}", v);
    let (v, x) = bench_mul_base_ct();
    bx ^= x;
    println!("Ed25519 mul_base (const-time): {:13.2}", v);
    let (v, x) = bench_mul_vartime();
    bx ^= x;
    println!("Ed25519 mul (vartime):         {:13.2}", v);
    let (v, x) = bench_double_mul_base();
    bx ^= x;
    println!("Ed25519 double_mul_base:       {:13.2}", v);
    let (v, x) = bench_multi_mul(false);
    bx ^= x;
    println!("Ed25519 multi_mul (32, each):  {:13.2}", v);
    let (v, x) = bench_multi_mul(true);
    bx ^= x;
    println!("Ed25519 straus (32, each):     {:13.2}", v);

    println!("{}", bx);
}
