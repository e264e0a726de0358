use super::Int;
use super::convenience::{build_binary, build_unary};
use crate::Error;

impl Int {
    /// True iff this value equals zero (any buffer length/redundancy).
    pub fn is_zero_value(&self) -> bool {
        !self.is_negative() && self.limbs.iter().all(|&l| l == 0)
    }

    /// Two's-complement negation: `NOT self`, then `+ 1`.
    pub fn neg_eq(&mut self) -> Result<&mut Self, Error> {
        self.not_eq()?;
        let one = Int::from_u64(1);
        self.add_eq(&one)?;
        Ok(self)
    }

    /// Negates iff negative.
    pub fn abs_eq(&mut self) -> Result<&mut Self, Error> {
        if self.is_negative() { self.neg_eq() } else { Ok(self) }
    }

    /// Adds `val` into `self`, carrying across limbs and auto-extending the
    /// buffer as needed.
    ///
    /// Two two's-complement values of width `w` always sum to a value
    /// representable in `w + 1` bits, but never fewer. The extra limb is
    /// reserved unconditionally rather than only when the wider operand's own
    /// top limb happens to already equal its fill, since the sum's sign can
    /// still overflow the shared top limb even when neither operand's
    /// representation was otherwise redundant.
    pub fn add_eq(&mut self, val: &Int) -> Result<&mut Self, Error> {
        self.check_live()?;
        val.check_live()?;

        let required = self.limb_count().max(val.limb_count()) + 1;
        if self.limb_count() < required {
            self.extend(required)?;
        }

        let mut carry = false;
        for i in 0..self.limbs.len() {
            let v = val.limb_at(i);
            let (sum1, c1) = self.limbs[i].overflowing_add(v);
            let (sum2, c2) = sum1.overflowing_add(carry as u64);
            self.limbs[i] = sum2;
            carry = c1 || c2;
        }
        Ok(self)
    }

    /// Subtracts `val` from `self`, implemented as `self + (-val)`.
    pub fn sub_eq(&mut self, val: &Int) -> Result<&mut Self, Error> {
        let neg_val = val.neg()?;
        self.add_eq(&neg_val)
    }

    /// A fresh value equal to `-self`.
    pub fn neg(&self) -> Result<Int, Error> {
        build_unary(self, Int::neg_eq)
    }

    /// A fresh value equal to `abs(self)`.
    pub fn abs(&self) -> Result<Int, Error> {
        build_unary(self, Int::abs_eq)
    }

    /// A fresh value equal to `self + val`.
    pub fn add(&self, val: &Int) -> Result<Int, Error> {
        build_binary(self, val, Int::add_eq)
    }

    /// A fresh value equal to `self - val`.
    pub fn sub(&self, val: &Int) -> Result<Int, Error> {
        build_binary(self, val, Int::sub_eq)
    }
}
