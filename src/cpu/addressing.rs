//! Operand resolution for the thirteen 6502 addressing modes.
//!
//! `resolve` is called with PC pointing at the first operand byte (the
//! opcode has already been fetched) and leaves PC on the next instruction.

use super::registers::Registers;
use crate::cpu_bus::CpuBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// `JMP ($nnnn)` only.
    Indirect,
    /// `($nn,X)`
    IndexedIndirect,
    /// `($nn),Y`
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction length including the opcode.
    pub const fn instruction_len(self) -> u16 {
        1 + self.operand_len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    /// Effective address. Immediate operands resolve to the address of the
    /// operand byte itself, branches to their target.
    Address(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// Unindexed address (pointer target for the indirect modes).
    pub base: u16,
    pub page_crossed: bool,
}

impl Resolved {
    fn address(addr: u16) -> Self {
        Resolved {
            operand: Operand::Address(addr),
            base: addr,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let addr = base.wrapping_add(index as u16);
        Resolved {
            operand: Operand::Address(addr),
            base,
            page_crossed: crosses_page(base, addr),
        }
    }
}

pub fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

fn fetch_byte(regs: &mut Registers, bus: &mut dyn CpuBus) -> u8 {
    let byte = bus.read_byte(regs.pc);
    regs.pc = regs.pc.wrapping_add(1);
    byte
}

fn fetch_word(regs: &mut Registers, bus: &mut dyn CpuBus) -> u16 {
    let low = fetch_byte(regs, bus) as u16;
    let high = fetch_byte(regs, bus) as u16;
    (high << 8) | low
}

/// Pointer stored in page zero; the high byte wraps to $00 after $FF.
fn zero_page_pointer(bus: &mut dyn CpuBus, zp: u8) -> u16 {
    let low = bus.read_byte(zp as u16) as u16;
    let high = bus.read_byte(zp.wrapping_add(1) as u16) as u16;
    (high << 8) | low
}

pub fn resolve(mode: AddressingMode, regs: &mut Registers, bus: &mut dyn CpuBus) -> Resolved {
    match mode {
        AddressingMode::Implied => Resolved {
            operand: Operand::Implied,
            base: 0,
            page_crossed: false,
        },
        AddressingMode::Accumulator => Resolved {
            operand: Operand::Accumulator,
            base: 0,
            page_crossed: false,
        },
        AddressingMode::Immediate => {
            let addr = regs.pc;
            regs.pc = regs.pc.wrapping_add(1);
            Resolved::address(addr)
        }
        AddressingMode::ZeroPage => {
            let zp = fetch_byte(regs, bus);
            Resolved::address(zp as u16)
        }
        AddressingMode::ZeroPageX => {
            let zp = fetch_byte(regs, bus);
            Resolved {
                base: zp as u16,
                ..Resolved::address(zp.wrapping_add(regs.x) as u16)
            }
        }
        AddressingMode::ZeroPageY => {
            let zp = fetch_byte(regs, bus);
            Resolved {
                base: zp as u16,
                ..Resolved::address(zp.wrapping_add(regs.y) as u16)
            }
        }
        AddressingMode::Absolute => {
            let addr = fetch_word(regs, bus);
            Resolved::address(addr)
        }
        AddressingMode::AbsoluteX => {
            let base = fetch_word(regs, bus);
            Resolved::indexed(base, regs.x)
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(regs, bus);
            Resolved::indexed(base, regs.y)
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(regs, bus);
            // NMOS parts never carry into the pointer's high byte: JMP ($10FF)
            // takes its high byte from $1000.
            let low = bus.read_byte(ptr) as u16;
            let high_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let high = bus.read_byte(high_addr) as u16;
            Resolved {
                base: ptr,
                ..Resolved::address((high << 8) | low)
            }
        }
        AddressingMode::IndexedIndirect => {
            let zp = fetch_byte(regs, bus);
            let addr = zero_page_pointer(bus, zp.wrapping_add(regs.x));
            Resolved::address(addr)
        }
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(regs, bus);
            let base = zero_page_pointer(bus, zp);
            Resolved::indexed(base, regs.y)
        }
        AddressingMode::Relative => {
            let offset = fetch_byte(regs, bus) as i8;
            let next = regs.pc;
            let target = next.wrapping_add(offset as u16);
            Resolved {
                operand: Operand::Address(target),
                base: next,
                page_crossed: crosses_page(next, target),
            }
        }
    }
}
