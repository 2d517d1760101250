//! Touring CPU implementation.
//!
//! One call to `step()` executes one whole instruction. There is no cycle
//! model; the machine has no clock of its own.

use emu_core::{Bus, Cpu, Observable, Value};
use log::{debug, trace};

use crate::flags::EQ;
use crate::{AddressingMode, Opcode, Registers};

/// Whether the CPU will execute another instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    /// Entered by HALT. Only a fresh CPU leaves this state.
    Halted,
}

/// The Touring CPU.
#[derive(Debug, Clone)]
pub struct Touring {
    /// CPU registers.
    pub regs: Registers,

    state: State,

    /// Instructions executed (halted steps don't count).
    steps: u64,
}

impl Default for Touring {
    fn default() -> Self {
        Self::new()
    }
}

impl Touring {
    /// Create a CPU in its load state: PC at `$0200`, everything else clear.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            state: State::Running,
            steps: 0,
        }
    }

    /// Instructions executed so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Fetch, decode and execute the instruction at PC.
    fn execute<B: Bus>(&mut self, bus: &mut B) {
        let pc = self.regs.pc;
        let opcode = Opcode::decode(bus.read(pc));
        trace!("{pc:#06X}: {opcode} state={:#04X}", self.regs.state);
        self.steps += 1;

        match opcode {
            Opcode::Reserved | Opcode::Unknown(_) => {
                debug!("{opcode} at {pc:#06X} stalls");
            }
            Opcode::Nop => {}
            Opcode::Erase(mode) => {
                let addr = self.operand_address(bus, mode);
                bus.write(addr, 0);
            }
            Opcode::Jump(mode) => {
                self.regs.pc = self.operand_address(bus, mode);
            }
            Opcode::Load(mode) => {
                let addr = self.operand_address(bus, mode);
                self.regs.state = bus.read(addr);
            }
            Opcode::Store(mode) => {
                let addr = self.operand_address(bus, mode);
                bus.write(addr, self.regs.state);
            }
            Opcode::Increment => self.regs.state = self.regs.state.wrapping_add(1),
            Opcode::Decrement => self.regs.state = self.regs.state.wrapping_sub(1),
            Opcode::Compare(mode) => {
                let addr = self.operand_address(bus, mode);
                let equal = bus.read(addr) == self.regs.state;
                self.regs.flags.set_if(EQ, equal);
            }
            Opcode::BranchIfEqual => self.branch_if(bus, self.regs.flags.is_set(EQ)),
            Opcode::BranchIfNotEqual => self.branch_if(bus, !self.regs.flags.is_set(EQ)),
            Opcode::Halt => {
                debug!("HALT at {pc:#06X} after {} steps", self.steps);
                self.state = State::Halted;
            }
        }

        self.regs.pc = self.regs.pc.wrapping_add(u16::from(opcode.advance()));
    }

    /// Conditional branch on the immediate offset byte.
    ///
    /// Taken: PC moves by the signed offset from the opcode's own address.
    /// Not taken: PC skips the two-byte instruction.
    fn branch_if<B: Bus>(&mut self, bus: &mut B, condition: bool) {
        let addr = self.operand_address(bus, AddressingMode::Immediate);
        let raw = bus.read(addr);
        self.regs.pc = if condition {
            Self::offset(self.regs.pc, raw)
        } else {
            self.regs.pc.wrapping_add(2)
        };
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl Cpu for Touring {
    type Registers = Registers;

    fn step<B: Bus>(&mut self, bus: &mut B) {
        if self.state == State::Running {
            self.execute(bus);
        }
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.state == State::Halted
    }
}

impl Observable for Touring {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "state" => Some(self.regs.state.into()),
            "flags" => Some(self.regs.flags.0.into()),
            "flags.eq" => Some(self.regs.flags.is_set(EQ).into()),
            "running" => Some((!self.is_halted()).into()),
            "halted" => Some(self.is_halted().into()),
            "steps" => Some(Value::U64(self.steps)),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["pc", "state", "flags", "flags.eq", "running", "halted", "steps"]
    }
}
