//! Trait representing the minimal bus interface required by the 6502 core.
//!
//! The core never interprets addresses: RAM, ROM and I/O mapping are the
//! host's business. Every address is treated as readable and writable.

pub trait CpuBus {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Little-endian word at `addr`, high byte from `addr + 1` (wraps at $FFFF).
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr) as u16;
        let hi = self.read_byte(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}
