use thiserror::Error;

/// Failures the engine reports to its host. None of them are 6502 faults:
/// they only exist because the host asked for strict decoding or because the
/// CPU has stopped executing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("unknown opcode ${opcode:02X} at ${pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    #[error("CPU halted at ${pc:04X} after an unknown opcode; reset required")]
    Halted { pc: u16 },

    #[error("CPU jammed by opcode ${opcode:02X} at ${pc:04X}; reset required")]
    Jammed { opcode: u8, pc: u16 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CpuError>;
