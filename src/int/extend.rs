use super::{Int, MAX_LIMBS};
use crate::Error;

impl Int {
    /// Grows the limb buffer to exactly `new_size` limbs, a no-op if it is
    /// already that long or longer. Newly added high limbs are filled with
    /// this value's current sign fill.
    pub fn extend(&mut self, new_size: usize) -> Result<(), Error> {
        self.check_live()?;
        if new_size > MAX_LIMBS {
            return Err(Error::OutOfRange);
        }
        if new_size <= self.limbs.len() {
            return Ok(());
        }
        let fill = crate::limb::fill_value(self.is_negative());
        self.limbs.resize(new_size, fill);
        Ok(())
    }
}
