//! One-line register snapshots for comparing runs against a reference log.
//!
//! The layout follows the widely used nestest log:
//!
//! ```text
//! C000  4C F5 C5  JMP  A:00 X:00 Y:00 P:24 SP:FD CYC:7
//! ```
//!
//! Capturing reads the instruction bytes through the bus, so it should only
//! be used with buses whose reads have no side effects at the traced PC.

use std::fmt;

use crate::cpu::opcodes;
use crate::cpu::Cpu;
use crate::cpu_bus::CpuBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    pub pc: u16,
    pub bytes: [u8; 3],
    pub len: u8,
    pub mnemonic: &'static str,
    pub documented: bool,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub sp: u8,
    pub cycles: u64,
}

impl TraceLine {
    /// Snapshot taken before the instruction at PC executes.
    pub fn capture(cpu: &Cpu, bus: &mut dyn CpuBus) -> Self {
        let opcode = bus.read_byte(cpu.regs.pc);
        Self::with_opcode(cpu, opcode, bus)
    }

    /// Same as [`TraceLine::capture`] for an opcode the caller already
    /// fetched from PC. Only the operand bytes are read.
    pub fn with_opcode(cpu: &Cpu, opcode: u8, bus: &mut dyn CpuBus) -> Self {
        let regs = &cpu.regs;
        let entry = opcodes::lookup(opcode);
        let len = entry.byte_len() as u8;

        let mut bytes = [opcode, 0, 0];
        for (i, slot) in bytes.iter_mut().enumerate().take(len as usize).skip(1) {
            *slot = bus.read_byte(regs.pc.wrapping_add(i as u16));
        }

        TraceLine {
            pc: regs.pc,
            bytes,
            len,
            mnemonic: entry.instruction.mnemonic(),
            documented: entry.documented,
            a: regs.a,
            x: regs.x,
            y: regs.y,
            p: regs.status.bits(),
            sp: regs.sp,
            cycles: cpu.total_cycles(),
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}  ", self.pc)?;
        for i in 0..3 {
            if i < self.len as usize {
                write!(f, "{:02X} ", self.bytes[i])?;
            } else {
                write!(f, "   ")?;
            }
        }
        let marker = if self.documented { ' ' } else { '*' };
        write!(
            f,
            "{}{}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            marker, self.mnemonic, self.a, self.x, self.y, self.p, self.sp, self.cycles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Memory;

    #[test]
    fn test_nestest_style_line() {
        let mut mem = Memory::new();
        mem.set_reset_vector(0xC000);
        mem.load(0xC000, &[0x4C, 0xF5, 0xC5]);
        let mut cpu = Cpu::default();
        cpu.reset(&mut mem);

        let line = TraceLine::capture(&cpu, &mut mem);
        assert_eq!(line.len, 3);
        assert_eq!(
            line.to_string(),
            "C000  4C F5 C5  JMP  A:00 X:00 Y:00 P:24 SP:FD CYC:7"
        );
    }

    #[test]
    fn test_short_and_undocumented_instructions() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0xA7, 0x10]);
        let mut cpu = Cpu::default();
        cpu.reset(&mut mem);
        cpu.regs.pc = 0x0200;

        let line = TraceLine::capture(&cpu, &mut mem);
        assert_eq!(
            line.to_string(),
            "0200  A7 10    *LAX  A:00 X:00 Y:00 P:24 SP:FD CYC:7"
        );
    }
}
