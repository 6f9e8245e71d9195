use serde::{Deserialize, Serialize};

use super::flags::StatusFlags;

pub const STACK_PAGE: u16 = 0x0100;

/// Programmer-visible 6502 registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    pub a: u8,      // Accumulator
    pub x: u8,      // X register
    pub y: u8,      // Y register
    pub sp: u8,     // Stack pointer, offset into $0100-$01FF
    pub pc: u16,    // Program counter
    pub status: StatusFlags,
}

impl Registers {
    pub const fn new() -> Self {
        Registers {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: StatusFlags::POWER_ON,
        }
    }

    /// Address the next push writes to; decrements SP within the stack page.
    pub fn push_addr(&mut self) -> u16 {
        let addr = STACK_PAGE | self.sp as u16;
        self.sp = self.sp.wrapping_sub(1);
        addr
    }

    /// Increments SP within the stack page and returns the address to pull from.
    pub fn pull_addr(&mut self) -> u16 {
        self.sp = self.sp.wrapping_add(1);
        STACK_PAGE | self.sp as u16
    }

    pub fn stack_addr(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
