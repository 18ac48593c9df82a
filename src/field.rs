//! Finite field.
//!
//! Base field GF(2^255-19) of Curve25519 and Edwards25519, and the 4-lane
//! batch type used to amortize field multiplications.

pub use crate::backend::{FieldBatch4, FieldElement};
