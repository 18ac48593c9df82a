//! Edwards25519 and X25519 over a radix-2^25.5 field with a 4-lane
//! batched multiplier.
//!
//! Field elements of GF(2^255-19) are held in ten 64-bit limbs of
//! alternating 26 and 25 bits (`backend::gf25519`). Up to four
//! independent multiplications or squarings can be interleaved through
//! the `backend::batch4` engine, which the point formulas use wherever
//! their multiplications do not depend on each other.
//!
//! Points of the twisted Edwards curve Edwards25519 use extended
//! coordinates (module `ed25519`); fixed-base, variable-base and
//! multi-scalar products are in `scalarmul`. The prime order group
//! Ristretto255 (RFC 9496) is built on these points in `ristretto255`.
//! The X25519 key exchange (RFC 7748) is in `x25519`.
//!
//! # Usage
//!
//! The crate is `no_std`. Default feature `std` implies `alloc`; the
//! only function that needs a heap is `multi_scalar_mul_straus()`. With
//! `std`, the decoding error type implements `std::error::Error`.
//!
//! # Conventions
//!
//! Functions are constant-time unless documented otherwise. Secret
//! Booleans are returned as `u32` values: 0xFFFFFFFF means "true" and
//! 0x00000000 means "false"; no other value may be used. `Eq` and
//! `PartialEq` are not implemented on field elements or points.
//!
//! Field elements and points support the usual operators (`+`, `-`,
//! and `*` for field elements) on values and references. Functions that
//! modify the object they are called on are named `set_*()`: for a
//! point `P`, `P.set_double()` doubles `P` in place, while `P.double()`
//! returns the double and leaves `P` unchanged.
//!
//! Scalars are 32-byte little-endian integers; the scalar multiplication
//! functions accept any value up to 2^256 - 1.

#![no_std]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

pub mod backend;
pub mod field;
pub mod ed25519;
pub mod scalarmul;
pub mod ristretto255;
pub mod x25519;
