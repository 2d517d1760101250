//! Touring flag byte.
//!
//! Only bit 0 is defined. Bits 1-7 are reserved: no instruction writes
//! them, and every update is a masked read-modify-write.

/// Equals flag - set by COMPARE when the operand matches the register.
pub const EQ: u8 = 0x01;

/// Flag byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Flags(pub u8);

impl Flags {
    /// All flags clear.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_if_leaves_reserved_bits_alone() {
        let mut flags = Flags(0b1010_1010);
        flags.set_if(EQ, true);
        assert_eq!(flags.0, 0b1010_1011);
        flags.set_if(EQ, false);
        assert_eq!(flags.0, 0b1010_1010);
    }
}
