//! Touring machine interpreter.
//!
//! A single 8-bit register, a one-bit flag byte and a flat 64 KiB image.
//! Programs load at `$0200` and execute one instruction per
//! [`Machine::step`]. There is no clock: the caller decides when the next
//! step happens.

mod addressing;
mod cpu;
pub mod flags;
mod machine;
mod memory;
mod opcode;
mod registers;

pub use cpu::Touring;
pub use flags::Flags;
pub use machine::Machine;
pub use memory::{LOAD_ADDRESS, LoadError, MAX_PROGRAM_LEN, MEMORY_SIZE, Memory};
pub use opcode::{AddressingMode, Opcode};
pub use registers::Registers;
