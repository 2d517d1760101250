//! Opcode decoding.
//!
//! The opcode table is closed. Every byte decodes to something; bytes
//! outside the table become [`Opcode::Unknown`] and execute as a stall.

use std::fmt;

/// How an instruction finds its operand.
///
/// - Immediate: the byte after the opcode (`PC+1`)
/// - Relative: `PC` plus the signed byte at `PC+1`
/// - Absolute: the little-endian word at `PC+1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Immediate,
    Relative,
    Absolute,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    #[must_use]
    pub const fn operand_width(self) -> u8 {
        match self {
            Self::Immediate | Self::Relative => 1,
            Self::Absolute => 2,
        }
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `$01`. Does nothing and does not advance.
    Reserved,
    /// `$02`. Skips itself and the following byte.
    Nop,
    /// `$03` relative, `$04` absolute. Zeroes the operand byte.
    Erase(AddressingMode),
    /// `$05` immediate, `$06` absolute. PC becomes the operand address.
    Jump(AddressingMode),
    /// `$07` immediate, `$08` relative, `$09` absolute.
    Load(AddressingMode),
    /// `$0A` relative, `$0B` absolute.
    Store(AddressingMode),
    /// `$0C`.
    Increment,
    /// `$0D`.
    Decrement,
    /// `$0E` immediate, `$0F` relative, `$10` absolute.
    Compare(AddressingMode),
    /// `$11`. Signed offset in the immediate byte.
    BranchIfEqual,
    /// `$12`. Signed offset in the immediate byte.
    BranchIfNotEqual,
    /// `$FF`.
    Halt,
    /// Anything else. Behaves like [`Opcode::Reserved`].
    Unknown(u8),
}

impl Opcode {
    /// Decode an opcode byte.
    #[must_use]
    pub const fn decode(byte: u8) -> Self {
        use AddressingMode::{Absolute, Immediate, Relative};

        match byte {
            0x01 => Self::Reserved,
            0x02 => Self::Nop,
            0x03 => Self::Erase(Relative),
            0x04 => Self::Erase(Absolute),
            0x05 => Self::Jump(Immediate),
            0x06 => Self::Jump(Absolute),
            0x07 => Self::Load(Immediate),
            0x08 => Self::Load(Relative),
            0x09 => Self::Load(Absolute),
            0x0A => Self::Store(Relative),
            0x0B => Self::Store(Absolute),
            0x0C => Self::Increment,
            0x0D => Self::Decrement,
            0x0E => Self::Compare(Immediate),
            0x0F => Self::Compare(Relative),
            0x10 => Self::Compare(Absolute),
            0x11 => Self::BranchIfEqual,
            0x12 => Self::BranchIfNotEqual,
            0xFF => Self::Halt,
            other => Self::Unknown(other),
        }
    }

    /// Bytes the PC moves forward after the instruction executes.
    ///
    /// Zero for anything that sets PC itself (jumps, branches) and for
    /// stalls and HALT. NOP advances by two, and COMPARE advances by two
    /// even with an absolute operand; programs depend on both.
    #[must_use]
    pub const fn advance(self) -> u8 {
        match self {
            Self::Nop => 2,
            Self::Erase(mode) | Self::Load(mode) | Self::Store(mode) => 1 + mode.operand_width(),
            Self::Increment | Self::Decrement => 1,
            Self::Compare(_) => 2,
            Self::Reserved
            | Self::Jump(_)
            | Self::BranchIfEqual
            | Self::BranchIfNotEqual
            | Self::Halt
            | Self::Unknown(_) => 0,
        }
    }

    /// Instruction mnemonic, for trace output.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Reserved => "RSVD",
            Self::Nop => "NOP",
            Self::Erase(_) => "ERASE",
            Self::Jump(_) => "JUMP",
            Self::Load(_) => "LOAD",
            Self::Store(_) => "STORE",
            Self::Increment => "INC",
            Self::Decrement => "DEC",
            Self::Compare(_) => "CMP",
            Self::BranchIfEqual => "BEQ",
            Self::BranchIfNotEqual => "BNE",
            Self::Halt => "HALT",
            Self::Unknown(_) => "???",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Erase(mode)
            | Self::Jump(mode)
            | Self::Load(mode)
            | Self::Store(mode)
            | Self::Compare(mode) => write!(f, "{} {mode:?}", self.mnemonic()),
            Self::Unknown(byte) => write!(f, "??? ({byte:#04X})"),
            _ => f.write_str(self.mnemonic()),
        }
    }
}
