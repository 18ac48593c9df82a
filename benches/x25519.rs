mod util;
use util::{core_cycles, median, seed32};

use ed25519_r2526::x25519::{x25519, x25519_base};

fn bench_x25519() -> (f64, u8) {
    let mut b = seed32();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            b = x25519(&b, &b);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), b[0])
}

fn bench_x25519_base() -> (f64, u8) {
    let mut b = seed32();
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            b = x25519_base(&b);
        }
        tt[i] = core_cycles().wrapping_sub(begin);
    }
    (median(&mut tt, 100.0), b[0])
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_x25519();
    bx ^= x;
    println!("X25519 (generic):              {:13.2}", v);
    let (v, x) = bench_x25519_base();
    bx ^= x;
    println!("X25519 (base point):           {:13.2}", v);

    println!("{}", bx);
}
