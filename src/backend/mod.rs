//! Arithmetic in GF(2^255-19), in radix 2^25.5.
//!
//! Two engines share the same limb representation:
//!
//!  - `FieldElement` (scalar engine): one field element as ten 64-bit
//!    limbs, of alternating widths 26 and 25 bits. Limbs may temporarily
//!    hold extra bits between operations; the accepted ranges are
//!    documented at the top of the implementation.
//!
//!  - `FieldBatch4` (batch engine): four field elements in transposed
//!    layout, so that each limb index forms one 4-lane vector. It only
//!    provides the integer multiply/square and the carry propagation
//!    (`compress`), plus lane-wise additions and subtractions. The
//!    scalar engine exposes it through `mul2()`, `mul3()`, `mul4()`,
//!    `sqr2()`, `sqr3()` and `sqr4()`, which compute several unrelated
//!    products in one pass.
//!
//! The following conventions apply:
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, unary `-`, and the compound assignments `+=`, `-=` and `*=`).
//!    Operators can use both the raw types, and references thereof.
//!
//!  - Functions `add_nr()` and `sub_nr()` skip carry propagation; their
//!    output may only be used as a multiplication or squaring operand.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000. `select()` and `cswap()` are built
//!    on the same masking.
//!
//!  - Functions `iszero()` and `equals()` return 0xFFFFFFFF (true) or
//!    0x00000000 (false).
//!
//!  - `encode()` returns the canonical 32-byte little-endian encoding;
//!    `decode()` ignores the top bit and never fails.

pub mod gf25519;
pub mod batch4;

pub use gf25519::FieldElement;
pub use batch4::FieldBatch4;
