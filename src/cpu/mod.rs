//! MOS 6502 instruction engine.
//!
//! The host owns a [`Cpu`] and a bus implementing [`CpuBus`], then calls
//! [`Cpu::step`] in a loop. Each call runs one whole instruction (or one
//! reset/interrupt sequence) and returns the cycles it took.

pub mod addressing;
pub(crate) mod execute;
pub mod flags;
pub mod interrupt;
pub mod opcodes;
pub mod registers;


pub use addressing::{AddressingMode, Operand, Resolved};
pub use flags::StatusFlags;
pub use interrupt::{Interrupt, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use opcodes::{Instruction, Opcode, OPCODES};
pub use registers::Registers;

use crate::config::{CpuConfig, UndefinedOpcodePolicy};
use crate::cpu_bus::CpuBus;
use crate::error::{CpuError, Result};
use crate::trace::TraceLine;
use execute::ExecContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// Powered on, reset sequence not yet run.
    Reset,
    Running,
    /// Running, and an NMI or unmasked IRQ will be taken by the next step.
    InterruptPending,
    /// Stopped on an unknown opcode in strict mode.
    Halted,
    /// Stopped by a JAM opcode.
    Jammed,
}

#[derive(Debug, Clone)]
pub struct Cpu {
    pub regs: Registers,
    config: CpuConfig,
    state: ExecState,
    nmi_pending: bool,
    irq_line: bool,
    last_opcode: u8,
    cycles: u64,
}

impl Cpu {
    pub fn new(config: CpuConfig) -> Self {
        Cpu {
            regs: Registers::new(),
            config,
            state: ExecState::Reset,
            nmi_pending: false,
            irq_line: false,
            last_opcode: 0,
            cycles: 0,
        }
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    pub fn state(&self) -> ExecState {
        if self.state == ExecState::Running && self.pending_interrupt().is_some() {
            ExecState::InterruptPending
        } else {
            self.state
        }
    }

    /// Cycles elapsed since creation, including reset and interrupt sequences.
    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    /// Loads PC from the reset vector, SP=$FD, P=I|unused. A, X and Y keep
    /// whatever they held.
    pub fn reset(&mut self, bus: &mut dyn CpuBus) {
        self.regs.sp = 0xFD;
        self.regs.status = StatusFlags::POWER_ON;
        self.regs.pc = bus.read_word(RESET_VECTOR);
        self.nmi_pending = false;
        self.state = ExecState::Running;
        self.cycles += INTERRUPT_CYCLES as u64;
        log::debug!("reset: PC=${:04X}", self.regs.pc);
    }

    /// Latch an NMI (edge triggered); it is taken before the next instruction.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Assert the IRQ line. The line is level triggered and stays asserted
    /// until [`Cpu::clear_irq`].
    pub fn request_irq(&mut self) {
        self.irq_line = true;
    }

    pub fn clear_irq(&mut self) {
        self.irq_line = false;
    }

    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// The interrupt the next step will service, NMI first.
    pub fn pending_interrupt(&self) -> Option<Interrupt> {
        if self.nmi_pending {
            Some(Interrupt::Nmi)
        } else if self.irq_line && !self.regs.status.get(StatusFlags::INTERRUPT_DISABLE) {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    pub fn step(&mut self, bus: &mut dyn CpuBus) -> Result<u8> {
        match self.state {
            ExecState::Reset => {
                self.reset(bus);
                return Ok(INTERRUPT_CYCLES);
            }
            ExecState::Halted => return Err(CpuError::Halted { pc: self.regs.pc }),
            ExecState::Jammed => {
                return Err(CpuError::Jammed {
                    opcode: self.last_opcode,
                    pc: self.regs.pc,
                })
            }
            ExecState::Running | ExecState::InterruptPending => {}
        }

        if let Some(kind) = self.pending_interrupt() {
            if kind == Interrupt::Nmi {
                self.nmi_pending = false;
            }
            interrupt::enter(&mut self.regs, bus, kind);
            self.cycles += INTERRUPT_CYCLES as u64;
            return Ok(INTERRUPT_CYCLES);
        }

        let pc = self.regs.pc;
        let opcode = bus.read_byte(pc);
        self.last_opcode = opcode;
        let entry = opcodes::lookup(opcode);

        if self.config.trace {
            log::trace!("{}", TraceLine::with_opcode(self, opcode, bus));
        }

        let skip = if entry.documented {
            false
        } else {
            match self.config.undefined_opcodes {
                UndefinedOpcodePolicy::Strict => {
                    log::error!("Halting on unknown opcode: 0x{:02X} at PC: 0x{:04X}", opcode, pc);
                    self.state = ExecState::Halted;
                    return Err(CpuError::UnknownOpcode { opcode, pc });
                }
                UndefinedOpcodePolicy::Nop => true,
                UndefinedOpcodePolicy::Emulate => {
                    if entry.instruction == Instruction::Jam {
                        log::warn!("JAM opcode 0x{:02X} at PC: 0x{:04X}; CPU locked until reset", opcode, pc);
                        self.state = ExecState::Jammed;
                        return Err(CpuError::Jammed { opcode, pc });
                    }
                    false
                }
            }
        };

        self.regs.pc = pc.wrapping_add(1);
        let resolved = addressing::resolve(entry.mode, &mut self.regs, bus);

        let mut cycles = entry.cycles;
        if entry.page_penalty && resolved.page_crossed {
            cycles += 1;
        }

        if !skip {
            let mut ctx = ExecContext {
                regs: &mut self.regs,
                bus,
                decimal_mode: self.config.decimal_mode,
            };
            cycles += execute::execute(&mut ctx, entry.instruction, &resolved);
        }

        self.cycles += cycles as u64;
        Ok(cycles)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(CpuConfig::default())
    }
}
