use super::Int;
use crate::Error;

impl Int {
    /// The value `0`, in a fresh two-limb buffer.
    ///
    /// Two limbs is the minimum buffer required by [`from_i64`](Int::from_i64)
    /// so that a value whose magnitude sets the top bit of the low limb still
    /// keeps a distinct sign limb; `zero` matches that minimum for
    /// consistency rather than allocating a single limb.
    pub fn zero() -> Self {
        Int { limbs: vec![0, 0] }
    }

    /// An integer equal to `v` as ℤ.
    pub fn from_i64(v: i64) -> Self {
        let fill = crate::limb::fill_value(v < 0);
        Int { limbs: vec![v as u64, fill] }
    }

    /// An integer equal to `v` as a non-negative ℤ. Buffer keeps a zero high
    /// limb so the value reads as non-negative regardless of `v`'s top bit.
    pub fn from_u64(v: u64) -> Self {
        Int { limbs: vec![v, 0] }
    }

    /// An integer equal to `v` as ℤ.
    pub fn from_i128(v: i128) -> Self {
        Int { limbs: vec![v as u64, (v >> 64) as u64] }
    }

    /// An integer equal to `v` as a non-negative ℤ.
    pub fn from_u128(v: u128) -> Self {
        Int { limbs: vec![v as u64, (v >> 64) as u64, 0] }
    }

    /// A copy of `src`.
    pub fn from_int(src: &Int) -> Self {
        src.clone()
    }

    /// Copies `src` into `self`. If `self`'s buffer is shorter than `src`'s
    /// it is grown to match; if longer, the extra high limbs are set to the
    /// fill value derived from `src`'s sign.
    pub fn assign(&mut self, src: &Int) -> Result<(), Error> {
        src.check_live()?;
        if self.limbs.len() < src.limbs.len() {
            self.limbs.resize(src.limbs.len(), 0);
        }
        let len = self.limbs.len();
        for i in 0..len {
            self.limbs[i] = src.limb_at(i);
        }
        Ok(())
    }

    /// Assigns `v` to `self`, preserving `self`'s buffer length (growing to
    /// the two-limb minimum if `self` is shorter or cleared). `v` is always a
    /// live source, so the only way `assign` could fail does not apply here;
    /// write the limbs directly instead of routing through a temporary whose
    /// `Result` would have nothing real to report.
    pub fn assign_i64(&mut self, v: i64) {
        let fill = crate::limb::fill_value(v < 0);
        if self.limbs.len() < 2 {
            self.limbs.resize(2, 0);
        }
        let len = self.limbs.len();
        self.limbs[0] = v as u64;
        for limb in self.limbs[1..len].iter_mut() {
            *limb = fill;
        }
    }

    /// Assigns `v` to `self` as a non-negative value.
    pub fn assign_u64(&mut self, v: u64) {
        if self.limbs.len() < 2 {
            self.limbs.resize(2, 0);
        }
        let len = self.limbs.len();
        self.limbs[0] = v;
        for limb in self.limbs[1..len].iter_mut() {
            *limb = 0;
        }
    }

    /// Exchanges the buffers of `self` and `other`.
    pub fn swap(&mut self, other: &mut Int) {
        std::mem::swap(&mut self.limbs, &mut other.limbs);
    }

    /// Releases this value's buffer. `self` must not be used again until
    /// reassigned via one of the `assign*`/`from_*` constructors.
    pub fn clear(&mut self) {
        self.limbs = Vec::new();
    }
}
