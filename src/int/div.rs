use super::Int;
use crate::Error;
use std::cmp::Ordering;

impl Int {
    /// Shared restoring-division kernel producing `(quotient, remainder)` in
    /// one pass. Worked by hand against the `-7 div 2 == -3 rem -1` case
    /// during design.
    fn div_mod_kernel(tar: &Int, val: &Int) -> Result<(Int, Int), Error> {
        tar.check_live()?;
        val.check_live()?;

        if val.is_zero_value() {
            return Err(Error::DomainError);
        }
        if tar.is_zero_value() {
            return Ok((Int::zero(), Int::zero()));
        }

        let t_neg = tar.is_negative();
        let v_neg = val.is_negative();
        let t = tar.abs()?;
        let v = val.abs()?;

        match t.cmp(&v) {
            Ordering::Less => {
                return Ok((Int::zero(), tar.clone()));
            }
            Ordering::Equal => {
                let mut q = Int::from_u64(1);
                if t_neg ^ v_neg {
                    q.neg_eq()?;
                }
                return Ok((q, Int::zero()));
            }
            Ordering::Greater => {}
        }

        let t_bits = t.significant_bits();
        let v_bits = v.significant_bits();
        let mut cur = t_bits - v_bits;

        // r starts as the high v_bits bits of t; t is non-negative here, so
        // an arithmetic right shift is exactly a logical one.
        let mut r = t.rshift(cur)?;
        let mut q = Int::zero();

        loop {
            if r.cmp(&v) != Ordering::Less {
                q.set_bit(cur, true)?;
                r.sub_eq(&v)?;
            }
            if cur == 0 {
                break;
            }
            r.lshift_eq(1)?;
            if t.get_bit(cur - 1) {
                r.set_bit(0, true)?;
            }
            cur -= 1;
        }

        if t_neg ^ v_neg {
            q.neg_eq()?;
        }
        if t_neg {
            r.neg_eq()?;
        }
        Ok((q, r))
    }

    /// Truncating division. Quotient sign is `sign(self) XOR sign(val)`.
    pub fn div_eq(&mut self, val: &Int) -> Result<&mut Self, Error> {
        let (q, _) = Self::div_mod_kernel(self, val)?;
        *self = q;
        Ok(self)
    }

    /// Remainder, taking the dividend's sign. `self == (self div val) * val
    /// + (self mod val)` holds.
    pub fn mod_eq(&mut self, val: &Int) -> Result<&mut Self, Error> {
        let (_, r) = Self::div_mod_kernel(self, val)?;
        *self = r;
        Ok(self)
    }

    /// A fresh value equal to `self div val`.
    pub fn div(&self, val: &Int) -> Result<Int, Error> {
        let (q, _) = Self::div_mod_kernel(self, val)?;
        Ok(q)
    }

    /// A fresh value equal to `self mod val`.
    pub fn rem(&self, val: &Int) -> Result<Int, Error> {
        let (_, r) = Self::div_mod_kernel(self, val)?;
        Ok(r)
    }
}
