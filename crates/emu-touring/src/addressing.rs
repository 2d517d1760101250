//! Touring addressing modes.
//!
//! Every resolution uses wrapping 16-bit arithmetic, so an instruction
//! near `$FFFF` reads its operand from the bottom of the image.

use emu_core::Bus;

use crate::{AddressingMode, Touring};

impl Touring {
    /// Resolve the effective address of the current instruction's operand.
    ///
    /// Reads operand bytes but never moves PC.
    pub(crate) fn operand_address(&self, bus: &mut impl Bus, mode: AddressingMode) -> u16 {
        let pc = self.regs.pc;
        match mode {
            AddressingMode::Immediate => pc.wrapping_add(1),
            AddressingMode::Relative => {
                let offset = bus.read(pc.wrapping_add(1));
                Self::offset(pc, offset)
            }
            AddressingMode::Absolute => bus.read_word(pc.wrapping_add(1)),
        }
    }

    /// Add a raw byte to `base` as a signed two's-complement offset.
    pub(crate) const fn offset(base: u16, raw: u8) -> u16 {
        // i8 -> u16 sign-extends, so 0xFF moves back one.
        base.wrapping_add(raw as i8 as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    fn cpu_at(pc: u16) -> Touring {
        let mut cpu = Touring::new();
        cpu.regs.pc = pc;
        cpu
    }

    #[test]
    fn immediate_is_next_byte() {
        let mut memory = Memory::new();
        let cpu = cpu_at(0x0300);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Immediate), 0x0301);
    }

    #[test]
    fn relative_sign_extends() {
        let mut memory = Memory::new();
        let cpu = cpu_at(0x0300);

        memory.write(0x0301, 0x10);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Relative), 0x0310);

        memory.write(0x0301, 0xF0);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Relative), 0x02F0);

        memory.write(0x0301, 0x80);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Relative), 0x0280);
    }

    #[test]
    fn absolute_is_little_endian_not_pc_relative() {
        let mut memory = Memory::new();
        let cpu = cpu_at(0x0300);
        memory.write(0x0301, 0x34);
        memory.write(0x0302, 0x12);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Absolute), 0x1234);
    }

    #[test]
    fn resolution_wraps_at_top_of_image() {
        let mut memory = Memory::new();
        let cpu = cpu_at(0xFFFF);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Immediate), 0x0000);

        memory.write(0x0000, 0x02);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Relative), 0x0001);

        memory.write(0x0001, 0xAB);
        assert_eq!(cpu.operand_address(&mut memory, AddressingMode::Absolute), 0xAB02);
    }

    #[test]
    fn offset_reinterprets_bits() {
        assert_eq!(Touring::offset(0x0200, 0x7F), 0x027F);
        assert_eq!(Touring::offset(0x0200, 0xFF), 0x01FF);
        assert_eq!(Touring::offset(0x0000, 0xFE), 0xFFFE);
    }
}
