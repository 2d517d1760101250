//! Memory bus interface.

/// Memory bus interface.
///
/// The CPU reaches memory only through this trait. Addresses are full
/// 16-bit values; implementations must accept every one of them.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a little-endian word from `address` and `address + 1`.
    ///
    /// The high byte address wraps at the top of the address space.
    fn read_word(&mut self, address: u16) -> u16 {
        let low = self.read(address);
        let high = self.read(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }
}
