use super::convenience::build_binary;
use super::{Int, SHIFT_MAX};
use crate::Error;

impl Int {
    /// Schoolbook multiplication via shift-and-add on absolute values, with
    /// sign reconciliation. Bounded by `SHIFT_MAX` since the shift-and-add
    /// traversal is driven by the smaller operand's bit count (the
    /// `MAX_MUL` gate).
    pub fn mul_eq(&mut self, val: &Int) -> Result<&mut Self, Error> {
        self.check_live()?;
        val.check_live()?;

        if self.is_zero_value() || val.is_zero_value() {
            *self = Int::zero();
            return Ok(self);
        }

        let negate = self.is_negative() ^ val.is_negative();
        let a = self.abs()?;
        let b = val.abs()?;
        let (max, min) = if a.significant_bits() >= b.significant_bits() { (a, b) } else { (b, a) };

        if min.significant_bits() >= SHIFT_MAX {
            return Err(Error::OutOfRange);
        }

        let mut acc = Int::zero();
        for bitpos in (0..min.significant_bits()).rev() {
            if min.get_bit(bitpos) {
                let shifted = max.lshift(bitpos)?;
                acc.add_eq(&shifted)?;
            }
        }
        if negate {
            acc.neg_eq()?;
        }
        *self = acc;
        Ok(self)
    }

    /// A fresh value equal to `self * val`.
    pub fn mul(&self, val: &Int) -> Result<Int, Error> {
        build_binary(self, val, Int::mul_eq)
    }
}
