use crate::cpu::interrupt::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::cpu_bus::CpuBus;

/// Flat 64KB RAM. Every address is plain read/write memory, which is what
/// test programs and simple hosts want.
pub struct Memory {
    pub(crate) ram: Box<[u8; 0x10000]>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            ram: Box::new([0; 0x10000]),
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.ram[addr as usize] = data;
    }

    /// Copy `bytes` starting at `start`, wrapping past $FFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    pub fn set_vector(&mut self, vector: u16, target: u16) {
        self.write(vector, target as u8);
        self.write(vector.wrapping_add(1), (target >> 8) as u8);
    }

    pub fn set_reset_vector(&mut self, target: u16) {
        self.set_vector(RESET_VECTOR, target);
    }

    pub fn set_nmi_vector(&mut self, target: u16) {
        self.set_vector(NMI_VECTOR, target);
    }

    pub fn set_irq_vector(&mut self, target: u16) {
        self.set_vector(IRQ_VECTOR, target);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBus for Memory {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_wraps_past_top_of_memory() {
        let mut mem = Memory::new();
        mem.load(0xFFFE, &[0x11, 0x22, 0x33]);
        assert_eq!(mem.read(0xFFFE), 0x11);
        assert_eq!(mem.read(0xFFFF), 0x22);
        assert_eq!(mem.read(0x0000), 0x33);
    }

    #[test]
    fn test_vectors_are_little_endian() {
        let mut mem = Memory::new();
        mem.set_reset_vector(0xC0DE);
        assert_eq!(mem.read(0xFFFC), 0xDE);
        assert_eq!(mem.read(0xFFFD), 0xC0);
        assert_eq!(mem.read_word(0xFFFC), 0xC0DE);
    }

    #[test]
    fn test_read_word_wraps_at_ffff() {
        let mut mem = Memory::new();
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }
}
