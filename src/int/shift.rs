use super::convenience::build_shift;
use super::{Int, MAX_LIMBS, Shift};
use crate::Error;
use crate::limb::{LIMB_BITS, ceil_div_limbs};

/// Shared kernel for `lshift_eq`/`slshift_eq`: shifts `tar` left by `n` bits,
/// growing the buffer as needed, introducing `fill_bit` (`0` or `u64::MAX`)
/// in the vacated low bits.
///
/// Buffer growth: the shifted magnitude needs `significant_bits(tar) + n`
/// bits, plus one bit permanently reserved for the sign so the shifted
/// value's own top bit can never collide with the buffer's sign bit. This is
/// occasionally one bit more conservative than the absolute minimum (at
/// exact negative powers of two), which the buffer's non-canonical-form
/// invariant allows; it avoids an off-by-one that a tighter "padding"
/// calculation based on raw fill-matching bits falls into at that same
/// boundary.
fn do_lshift(tar: &mut Int, n: Shift, fill_bit: u64) -> Result<(), Error> {
    tar.check_live()?;
    if n == 0 {
        return Ok(());
    }
    let sig = tar.significant_bits();
    let required_bits = if sig == 0 { 0 } else { sig + n };
    let needed_limbs = ceil_div_limbs(required_bits + 1) as usize;
    if needed_limbs > MAX_LIMBS {
        return Err(Error::OutOfRange);
    }
    if needed_limbs > tar.limb_count() {
        tar.extend(needed_limbs)?;
    }

    let len = tar.limb_count();
    let move_limbs = (n / LIMB_BITS as u64) as usize;
    let bits = (n % LIMB_BITS as u64) as u32;
    let old: Vec<u64> = tar.as_limbs().to_vec();

    for i in (0..len).rev() {
        let src_idx = i as isize - move_limbs as isize;
        let hi = if src_idx >= 0 { old[src_idx as usize] } else { fill_bit };
        let lo = if src_idx - 1 >= 0 { old[(src_idx - 1) as usize] } else { fill_bit };
        tar.limbs[i] = if bits == 0 { hi } else { (hi << bits) | (lo >> (LIMB_BITS - bits)) };
    }
    Ok(())
}

impl Int {
    /// Logical left shift (zero-fill). Grows the buffer as needed so no high
    /// bits are ever silently dropped.
    pub fn lshift_eq(&mut self, n: Shift) -> Result<&mut Self, Error> {
        do_lshift(self, n, 0)?;
        Ok(self)
    }

    /// Sign-preserving left shift: the vacated low bits take the pre-shift
    /// sign fill instead of zero.
    pub fn slshift_eq(&mut self, n: Shift) -> Result<&mut Self, Error> {
        let fill = crate::limb::fill_value(self.is_negative());
        do_lshift(self, n, fill)?;
        Ok(self)
    }

    /// Arithmetic right shift. Never grows the buffer; discards low bits and
    /// fills vacated high bits with the sign fill. If the whole-limb move
    /// would pass the end of the buffer, the result is just the sign fill.
    pub fn rshift_eq(&mut self, n: Shift) -> Result<&mut Self, Error> {
        self.check_live()?;
        if n == 0 {
            return Ok(self);
        }
        let len = self.limb_count();
        let move_limbs = (n / LIMB_BITS as u64) as usize;
        let fill = crate::limb::fill_value(self.is_negative());
        if move_limbs >= len {
            for limb in self.limbs.iter_mut() {
                *limb = fill;
            }
            return Ok(self);
        }
        let bits = (n % LIMB_BITS as u64) as u32;
        let old: Vec<u64> = self.as_limbs().to_vec();
        for i in 0..len {
            let src_idx = i + move_limbs;
            let lo = if src_idx < len { old[src_idx] } else { fill };
            let hi = if src_idx + 1 < len { old[src_idx + 1] } else { fill };
            self.limbs[i] = if bits == 0 { lo } else { (lo >> bits) | (hi << (LIMB_BITS - bits)) };
        }
        Ok(self)
    }

    /// A fresh value equal to `self << n` (logical).
    pub fn lshift(&self, n: Shift) -> Result<Int, Error> {
        build_shift(self, n, Int::lshift_eq)
    }

    /// A fresh value equal to `self << n` (sign-preserving).
    pub fn slshift(&self, n: Shift) -> Result<Int, Error> {
        build_shift(self, n, Int::slshift_eq)
    }

    /// A fresh value equal to `self >> n` (arithmetic).
    pub fn rshift(&self, n: Shift) -> Result<Int, Error> {
        build_shift(self, n, Int::rshift_eq)
    }
}
