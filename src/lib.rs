//! Arbitrary-precision signed integer arithmetic.
//!
//! `Int` represents a mathematical ℤ value of unbounded magnitude, backed by
//! a dynamic buffer of `u64` limbs interpreted as two's complement. The
//! engine provides construction, comparison, bitwise/shift operations, and
//! arithmetic (including schoolbook multiplication and restoring division),
//! each in both an in-place (`*_eq`) and pure (allocating) form, plus the
//! usual `std::ops` overloads for ergonomic use.
//!
//! There is no decimal/string companion in this crate.

mod error;
mod int;
mod limb;

pub use error::Error;
pub use int::{Int, MAX_BITS, MAX_LIMBS, MAX_MUL, ONE, SHIFT_MAX, Shift, ZERO};
