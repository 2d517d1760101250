//! Core traits and types shared by the emulator and its drivers.
//!
//! The CPU never sees where its memory lives or who paces it. Memory goes
//! through [`Bus`], pacing goes through [`Strobe`].

mod bus;
mod clock;
mod cpu;
mod observable;
mod strobe;

pub use bus::Bus;
pub use clock::MasterClock;
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use strobe::Strobe;
