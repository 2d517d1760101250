//! Touring register set.

use crate::LOAD_ADDRESS;
use crate::flags::Flags;

/// Touring register set.
///
/// - PC: 16-bit program counter, always at an opcode byte
/// - state: 8-bit accumulator, the only general-purpose register
/// - flags: flag byte, bit 0 is the equals flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Registers {
    /// Program counter.
    pub pc: u16,
    /// Accumulator.
    pub state: u8,
    /// Flag byte.
    pub flags: Flags,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Registers as they are right after a program is loaded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pc: LOAD_ADDRESS,
            state: 0,
            flags: Flags::new(),
        }
    }
}
