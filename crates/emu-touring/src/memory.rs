//! The 64 KiB memory image.

use std::fmt;

use emu_core::Bus;

/// Size of the image in bytes. Every `u16` is a valid index.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Where programs are copied to and where execution starts.
pub const LOAD_ADDRESS: u16 = 0x0200;

/// Largest program that fits between [`LOAD_ADDRESS`] and the top of the image.
pub const MAX_PROGRAM_LEN: usize = MEMORY_SIZE - LOAD_ADDRESS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The program does not fit above the load address.
    ProgramTooLarge { len: usize, capacity: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramTooLarge { len, capacity } => write!(
                f,
                "program is {len} bytes but only {capacity} bytes fit above ${LOAD_ADDRESS:04X}",
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Flat, zero-initialised 64 KiB image.
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// An all-zero image.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// An all-zero image with `program` copied to [`LOAD_ADDRESS`].
    ///
    /// The size check happens before anything is allocated.
    pub fn with_program(program: &[u8]) -> Result<Self, LoadError> {
        if program.len() > MAX_PROGRAM_LEN {
            return Err(LoadError::ProgramTooLarge {
                len: program.len(),
                capacity: MAX_PROGRAM_LEN,
            });
        }
        let mut memory = Self::new();
        let start = LOAD_ADDRESS as usize;
        memory.bytes[start..start + program.len()].copy_from_slice(program);
        Ok(memory)
    }

    /// Read a byte without going through the bus.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.bytes[usize::from(address)]
    }

    /// The whole image.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Bus for Memory {
    fn read(&mut self, address: u16) -> u8 {
        self.bytes[usize::from(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.bytes[usize::from(address)] = value;
    }
}
