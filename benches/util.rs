// Cycle counter used by all benchmarks.

#[cfg(target_arch = "x86_64")]
pub fn core_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(target_arch = "aarch64")]
pub fn core_cycles() -> u64 {
    use core::arch::asm;
    let mut x: u64;
    unsafe {
        asm!("dsb sy", "mrs {}, pmccntr_el0", out(reg) x);
    }
    x
}

// No cycle counter: nanoseconds since first call.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn core_cycles() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

// 32 bytes derived from the current counter value.
#[allow(dead_code)]
pub fn seed32() -> [u8; 32] {
    let z = core_cycles();
    let mut b = [0u8; 32];
    for i in 0..4 {
        b[(8 * i)..(8 * i + 8)].copy_from_slice(&z.wrapping_mul(2 * i as u64 + 1).to_le_bytes());
    }
    b
}

// Median of the sorted samples, divided by the per-sample iteration count.
#[allow(dead_code)]
pub fn median(tt: &mut [u64], n: f64) -> f64 {
    tt.sort();
    (tt[tt.len() >> 1] as f64) / n
}
