//! Limb-level bit utilities.
//!
//! A limb is the widest efficient unsigned machine word available: `u64`.
//! Everything here operates on a single limb in isolation; `int::` builds the
//! multi-limb `Int` value on top of it.

/// Bit width of one limb.
pub const LIMB_BITS: u32 = u64::BITS;

/// Number of significant bits in a single limb (position, 1-based, of the
/// highest set bit; 0 for a zero limb).
#[inline]
pub const fn significant_bits_in_limb(x: u64) -> u32 {
    LIMB_BITS - x.leading_zeros()
}

/// The fill value used to extend a value's buffer beyond its stored limbs:
/// all-ones for negative values, all-zeros otherwise.
#[inline]
pub const fn fill_value(negative: bool) -> u64 {
    if negative { u64::MAX } else { 0 }
}

/// Smallest multiple of `LIMB_BITS` limbs needed to hold `bits` bits.
#[inline]
pub const fn ceil_div_limbs(bits: u64) -> u64 {
    (bits + LIMB_BITS as u64 - 1) / LIMB_BITS as u64
}
