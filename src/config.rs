//! Engine configuration.
//!
//! Hosts normally build a `CpuConfig` in code or deserialize it from their
//! own settings file. `CpuConfig::from_env` reads the same knobs from
//! environment variables, which is handy for test runners.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CpuError, Result};

/// What the dispatcher does with opcode bytes outside the documented set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedOpcodePolicy {
    /// Fail with `CpuError::UnknownOpcode` and halt (differential testing).
    Strict,
    /// Skip the instruction's operand bytes and burn its table cycle count.
    #[default]
    Nop,
    /// Execute NMOS undocumented behavior.
    Emulate,
}

impl FromStr for UndefinedOpcodePolicy {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(UndefinedOpcodePolicy::Strict),
            "nop" => Ok(UndefinedOpcodePolicy::Nop),
            "emulate" => Ok(UndefinedOpcodePolicy::Emulate),
            other => Err(CpuError::InvalidConfig(format!(
                "unknown undefined-opcode policy '{}' (expected strict, nop or emulate)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    pub undefined_opcodes: UndefinedOpcodePolicy,
    /// BCD arithmetic for ADC/SBC while D is set. Off for parts such as the
    /// NES 2A03 that lack the decimal adder.
    pub decimal_mode: bool,
    /// Emit a `log::trace!` line per executed instruction. The opcode byte is
    /// not fetched twice, but the operand bytes are read again through the
    /// bus to build the line, so keep this off on buses whose reads have
    /// side effects at program addresses.
    pub trace: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            undefined_opcodes: UndefinedOpcodePolicy::Nop,
            decimal_mode: true,
            trace: false,
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(default)
}

impl CpuConfig {
    pub fn strict() -> Self {
        CpuConfig {
            undefined_opcodes: UndefinedOpcodePolicy::Strict,
            ..Self::default()
        }
    }

    /// Defaults overridden by `MOS6502_UNDEFINED_OPCODES`, `MOS6502_DECIMAL`
    /// and `MOS6502_TRACE`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let undefined_opcodes = match std::env::var("MOS6502_UNDEFINED_OPCODES") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.undefined_opcodes,
        };
        Ok(CpuConfig {
            undefined_opcodes,
            decimal_mode: env_flag("MOS6502_DECIMAL", defaults.decimal_mode),
            trace: env_flag("MOS6502_TRACE", defaults.trace),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Strict".parse::<UndefinedOpcodePolicy>(), Ok(UndefinedOpcodePolicy::Strict));
        assert_eq!(" nop ".parse::<UndefinedOpcodePolicy>(), Ok(UndefinedOpcodePolicy::Nop));
        assert_eq!("emulate".parse::<UndefinedOpcodePolicy>(), Ok(UndefinedOpcodePolicy::Emulate));
        assert!(matches!(
            "halt".parse::<UndefinedOpcodePolicy>(),
            Err(CpuError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config: CpuConfig = serde_json::from_str(r#"{ "undefined_opcodes": "strict" }"#)
            .expect("valid config");
        assert_eq!(config.undefined_opcodes, UndefinedOpcodePolicy::Strict);
        assert!(config.decimal_mode);
        assert!(!config.trace);

        let config: CpuConfig =
            serde_json::from_str(r#"{ "decimal_mode": false }"#).expect("valid config");
        assert_eq!(config.undefined_opcodes, UndefinedOpcodePolicy::Nop);
        assert!(!config.decimal_mode);
    }

    #[test]
    fn test_config_rejects_unknown_policy_in_json() {
        let parsed = serde_json::from_str::<CpuConfig>(r#"{ "undefined_opcodes": "explode" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables.
        std::env::set_var("MOS6502_UNDEFINED_OPCODES", "emulate");
        std::env::set_var("MOS6502_DECIMAL", "0");
        std::env::set_var("MOS6502_TRACE", "on");
        let config = CpuConfig::from_env().expect("valid environment");
        assert_eq!(config.undefined_opcodes, UndefinedOpcodePolicy::Emulate);
        assert!(!config.decimal_mode);
        assert!(config.trace);

        std::env::set_var("MOS6502_UNDEFINED_OPCODES", "sometimes");
        assert!(CpuConfig::from_env().is_err());

        std::env::remove_var("MOS6502_UNDEFINED_OPCODES");
        std::env::remove_var("MOS6502_DECIMAL");
        std::env::remove_var("MOS6502_TRACE");
        assert_eq!(CpuConfig::from_env(), Ok(CpuConfig::default()));
    }

    #[test]
    fn test_strict_preset() {
        let config = CpuConfig::strict();
        assert_eq!(config.undefined_opcodes, UndefinedOpcodePolicy::Strict);
        assert!(config.decimal_mode);
    }
}
