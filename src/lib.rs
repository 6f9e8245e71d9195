//! MOS 6502 instruction engine for embedding in emulators.
//!
//! Modules:
//! - cpu: registers, flags, addressing modes, opcode table, dispatcher and
//!   interrupt sequencing
//! - cpu_bus: the byte read/write capability the core runs against
//! - memory: flat 64KB RAM implementing the bus, for tests and simple hosts
//! - config: undefined-opcode policy, decimal mode and tracing switches
//! - trace: nestest-style per-instruction snapshots
//!
//! ```
//! use mos6502_core::{Cpu, CpuConfig, Memory};
//!
//! let mut mem = Memory::new();
//! mem.set_reset_vector(0x0600);
//! mem.load(0x0600, &[0xA9, 0x42]); // LDA #$42
//!
//! let mut cpu = Cpu::new(CpuConfig::default());
//! cpu.reset(&mut mem);
//! let cycles = cpu.step(&mut mem).unwrap();
//! assert_eq!(cpu.regs.a, 0x42);
//! assert_eq!(cycles, 2);
//! ```

pub mod config;
pub mod cpu;
pub mod cpu_bus;
pub mod error;
pub mod memory;
pub mod trace;

pub use config::{CpuConfig, UndefinedOpcodePolicy};
pub use cpu::{Cpu, ExecState, Interrupt, Registers, StatusFlags};
pub use cpu_bus::CpuBus;
pub use error::{CpuError, Result};
pub use memory::Memory;
pub use trace::TraceLine;
