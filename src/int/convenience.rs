//! Generic helpers turning an in-place ("-eq") operation into its pure
//! counterpart: clone the target, run the in-place op on the copy.
//!
//! There is no rvalue-reuse trick to encode here. `Clone` and move
//! semantics already give the "pure ops don't mutate their inputs" contract
//! for free.

use super::{Int, Shift};
use crate::Error;

pub(super) fn build_unary<F>(src: &Int, op: F) -> Result<Int, Error>
where
    F: FnOnce(&mut Int) -> Result<&mut Int, Error>,
{
    let mut tmp = src.clone();
    op(&mut tmp)?;
    Ok(tmp)
}

pub(super) fn build_binary<F>(lhs: &Int, rhs: &Int, op: F) -> Result<Int, Error>
where
    F: FnOnce(&mut Int, &Int) -> Result<&mut Int, Error>,
{
    let mut tmp = lhs.clone();
    op(&mut tmp, rhs)?;
    Ok(tmp)
}

pub(super) fn build_shift<F>(src: &Int, n: Shift, op: F) -> Result<Int, Error>
where
    F: FnOnce(&mut Int, Shift) -> Result<&mut Int, Error>,
{
    let mut tmp = src.clone();
    op(&mut tmp, n)?;
    Ok(tmp)
}
