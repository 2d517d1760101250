//! A complete Touring machine: CPU plus its own memory image.
//!
//! Nothing outside the machine can reach the image or the registers
//! except through these methods.

use emu_core::{Cpu, Observable, Value};

use crate::{LoadError, Memory, Registers, Touring};

/// A loaded Touring machine.
#[derive(Debug)]
pub struct Machine {
    cpu: Touring,
    memory: Memory,
}

impl Machine {
    /// Load `program` at `$0200` and reset the registers.
    ///
    /// Programs longer than [`crate::MAX_PROGRAM_LEN`] are rejected before
    /// anything is copied.
    pub fn new(program: &[u8]) -> Result<Self, LoadError> {
        let memory = Memory::with_program(program)?;
        log::debug!("loaded {} program bytes", program.len());
        Ok(Self {
            cpu: Touring::new(),
            memory,
        })
    }

    /// Execute one instruction. Does nothing once halted.
    pub fn step(&mut self) {
        self.cpu.step(&mut self.memory);
    }

    /// Step until halted or `max_steps` instructions have executed.
    ///
    /// Returns the number of instructions executed. A stalled program
    /// (reserved or unknown opcode) runs until the limit.
    pub fn run(&mut self, max_steps: u64) -> u64 {
        let mut executed = 0;
        while executed < max_steps && !self.is_halted() {
            self.step();
            executed += 1;
        }
        executed
    }

    /// The accumulator.
    #[must_use]
    pub fn state(&self) -> u8 {
        self.cpu.regs.state
    }

    #[must_use]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[must_use]
    pub fn flags(&self) -> u8 {
        self.cpu.regs.flags.0
    }

    #[must_use]
    pub fn registers(&self) -> Registers {
        self.cpu.registers()
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.cpu.is_halted()
    }

    /// Instructions executed so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.cpu.steps()
    }

    /// Read an image byte without side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.memory.peek(address)
    }

    /// Read-only view of the memory image.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

/// Parse the `<addr>` part of a `memory.<addr>` query.
fn parse_address(text: &str) -> Option<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix('$'))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).ok()
}

impl Observable for Machine {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(addr) = path.strip_prefix("memory.") {
            return parse_address(addr).map(|a| self.peek(a).into());
        }
        self.cpu.query(path)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        self.cpu.query_paths()
    }
}
