//! Stack helpers and the interrupt entry/exit sequences shared by BRK, IRQ,
//! NMI and RTI.

use super::flags::StatusFlags;
use super::registers::Registers;
use crate::cpu_bus::CpuBus;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by reset, BRK and the hardware interrupt sequences.
pub const INTERRUPT_CYCLES: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Nmi,
    Irq,
    /// Software interrupt raised by the BRK instruction.
    Brk,
}

impl Interrupt {
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq | Interrupt::Brk => IRQ_VECTOR,
        }
    }

    /// Whether the pushed status byte carries B.
    fn sets_break(self) -> bool {
        matches!(self, Interrupt::Brk)
    }
}

pub(crate) fn push(regs: &mut Registers, bus: &mut dyn CpuBus, value: u8) {
    let addr = regs.push_addr();
    bus.write_byte(addr, value);
}

pub(crate) fn pull(regs: &mut Registers, bus: &mut dyn CpuBus) -> u8 {
    let addr = regs.pull_addr();
    bus.read_byte(addr)
}

pub(crate) fn push_word(regs: &mut Registers, bus: &mut dyn CpuBus, value: u16) {
    push(regs, bus, (value >> 8) as u8);
    push(regs, bus, value as u8);
}

pub(crate) fn pull_word(regs: &mut Registers, bus: &mut dyn CpuBus) -> u16 {
    let low = pull(regs, bus) as u16;
    let high = pull(regs, bus) as u16;
    (high << 8) | low
}

/// Push PC and P, set I, and continue at the interrupt's vector.
pub(crate) fn enter(regs: &mut Registers, bus: &mut dyn CpuBus, kind: Interrupt) {
    let pc = regs.pc;
    push_word(regs, bus, pc);
    let pushed = regs.status.to_stack_byte(kind.sets_break());
    push(regs, bus, pushed);
    regs.status.insert(StatusFlags::INTERRUPT_DISABLE);
    regs.pc = bus.read_word(kind.vector());
    log::debug!(
        "{:?}: pushed P=${:02X}, vector ${:04X} -> ${:04X}",
        kind,
        pushed,
        kind.vector(),
        regs.pc
    );
}

/// RTI: pull P, then PCL and PCH.
pub(crate) fn leave(regs: &mut Registers, bus: &mut dyn CpuBus) {
    let status = pull(regs, bus);
    regs.status = StatusFlags::from_stack_byte(status);
    regs.pc = pull_word(regs, bus);
}
