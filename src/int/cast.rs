use super::Int;
use crate::Error;
use std::cmp::Ordering;

impl Int {
    /// Extracts the low `n_bytes` of `self` as a signed machine integer (the
    /// widest native signed type, `i128`, covers every `n_bytes` up to 16).
    ///
    /// Fails with `Overflow` unless `self` fits in the inclusive range of an
    /// `n_bytes`-wide two's-complement integer. Uses a direct range check
    /// rather than a `significant_bits >= n_bytes * 8` test, which
    /// misclassifies the minimum representable value of a width.
    pub fn cast_signed(&self, n_bytes: usize) -> Result<i128, Error> {
        self.check_live()?;
        if n_bytes == 0 || n_bytes > 16 {
            return Err(Error::OutOfRange);
        }
        let bits = n_bytes * 8;
        let (min, max) = if bits == 128 {
            (i128::MIN, i128::MAX)
        } else {
            (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
        };
        let bound_min = Int::from_i128(min);
        let bound_max = Int::from_i128(max);
        if self.cmp(&bound_min) == Ordering::Less || self.cmp(&bound_max) == Ordering::Greater {
            return Err(Error::Overflow);
        }
        let lo = self.limb_at(0) as u128;
        let hi = self.limb_at(1) as u128;
        Ok(((hi << 64) | lo) as i128)
    }

    /// Extracts the low `n_bytes` of `self` as an unsigned machine integer.
    /// Fails with `Overflow` if `self` is negative or exceeds the width's max.
    pub fn cast_unsigned(&self, n_bytes: usize) -> Result<u128, Error> {
        self.check_live()?;
        if n_bytes == 0 || n_bytes > 16 {
            return Err(Error::OutOfRange);
        }
        if self.is_negative() {
            return Err(Error::Overflow);
        }
        let bits = n_bytes * 8;
        let max: u128 = if bits == 128 { u128::MAX } else { (1u128 << bits) - 1 };
        let bound_max = Int::from_u128(max);
        if self.cmp(&bound_max) == Ordering::Greater {
            return Err(Error::Overflow);
        }
        let lo = self.limb_at(0) as u128;
        let hi = self.limb_at(1) as u128;
        Ok((hi << 64) | lo)
    }

    /// Convenience narrowing of [`cast_signed`](Int::cast_signed) to `i64`.
    pub fn cast_i64(&self) -> Result<i64, Error> {
        self.cast_signed(8).map(|v| v as i64)
    }

    /// Convenience narrowing of [`cast_unsigned`](Int::cast_unsigned) to `u64`.
    pub fn cast_u64(&self) -> Result<u64, Error> {
        self.cast_unsigned(8).map(|v| v as u64)
    }

    /// Convenience narrowing of [`cast_signed`](Int::cast_signed) to `i128`.
    pub fn cast_i128(&self) -> Result<i128, Error> {
        self.cast_signed(16)
    }

    /// Convenience narrowing of [`cast_unsigned`](Int::cast_unsigned) to `u128`.
    pub fn cast_u128(&self) -> Result<u128, Error> {
        self.cast_unsigned(16)
    }
}
