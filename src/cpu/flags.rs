//! Processor status register (P).
//!
//! Bit layout, bit 7 to bit 0: N V 1 B D I Z C.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        const DECIMAL = 0b00001000;
        const BREAK = 0b00010000;
        const UNUSED = 0b00100000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

impl StatusFlags {
    /// Value after a reset: only the always-set bit and I.
    pub const POWER_ON: StatusFlags =
        StatusFlags::UNUSED.union(StatusFlags::INTERRUPT_DISABLE);

    pub fn get(self, flag: StatusFlags) -> bool {
        self.contains(flag)
    }

    pub fn update_nz(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// `bit` is the bit shifted or rotated out of the operand.
    pub fn update_carry_from_shift(&mut self, bit: bool) {
        self.set(StatusFlags::CARRY, bit);
    }

    /// V for `a + b (+ carry) = result`: operands share a sign the result lacks.
    pub fn update_overflow_add(&mut self, a: u8, b: u8, result: u8) {
        self.set(
            StatusFlags::OVERFLOW,
            (a ^ result) & (b ^ result) & 0x80 != 0,
        );
    }

    /// V for `a - b (- borrow) = result`.
    pub fn update_overflow_sub(&mut self, a: u8, b: u8, result: u8) {
        self.set(
            StatusFlags::OVERFLOW,
            (a ^ b) & (a ^ result) & 0x80 != 0,
        );
    }

    /// Byte written to the stack by PHP, BRK (`brk = true`) or a hardware
    /// interrupt (`brk = false`).
    pub fn to_stack_byte(self, brk: bool) -> u8 {
        let mut pushed = self | StatusFlags::UNUSED;
        pushed.set(StatusFlags::BREAK, brk);
        pushed.bits()
    }

    /// Live register value for a byte pulled by PLP or RTI. B only exists on
    /// the stack, so it is dropped here.
    pub fn from_stack_byte(byte: u8) -> Self {
        (StatusFlags::from_bits_truncate(byte) - StatusFlags::BREAK) | StatusFlags::UNUSED
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        StatusFlags::POWER_ON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_nz() {
        let mut p = StatusFlags::POWER_ON;
        p.update_nz(0x00);
        assert!(p.get(StatusFlags::ZERO));
        assert!(!p.get(StatusFlags::NEGATIVE));

        p.update_nz(0x80);
        assert!(!p.get(StatusFlags::ZERO));
        assert!(p.get(StatusFlags::NEGATIVE));

        p.update_nz(0x7F);
        assert!(!p.get(StatusFlags::ZERO));
        assert!(!p.get(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_overflow_add() {
        let mut p = StatusFlags::POWER_ON;
        // 127 + 1 leaves the signed range
        p.update_overflow_add(0x7F, 0x01, 0x80);
        assert!(p.get(StatusFlags::OVERFLOW));
        // -128 + -1
        p.update_overflow_add(0x80, 0xFF, 0x7F);
        assert!(p.get(StatusFlags::OVERFLOW));
        // mixed signs never overflow
        p.update_overflow_add(0x7F, 0x80, 0xFF);
        assert!(!p.get(StatusFlags::OVERFLOW));
    }

    #[test]
    fn test_overflow_sub() {
        let mut p = StatusFlags::POWER_ON;
        // -128 - 1 = +127
        p.update_overflow_sub(0x80, 0x01, 0x7F);
        assert!(p.get(StatusFlags::OVERFLOW));
        // 127 - (-1) = -128
        p.update_overflow_sub(0x7F, 0xFF, 0x80);
        assert!(p.get(StatusFlags::OVERFLOW));
        // 5 - 3
        p.update_overflow_sub(0x05, 0x03, 0x02);
        assert!(!p.get(StatusFlags::OVERFLOW));
    }

    #[test]
    fn test_carry_from_shift() {
        let mut p = StatusFlags::POWER_ON;
        p.update_carry_from_shift(true);
        assert!(p.get(StatusFlags::CARRY));
        p.update_carry_from_shift(false);
        assert!(!p.get(StatusFlags::CARRY));
    }

    #[test]
    fn test_stack_byte_break_bit() {
        let p = StatusFlags::POWER_ON | StatusFlags::CARRY;
        assert_eq!(p.to_stack_byte(true), 0x35);
        assert_eq!(p.to_stack_byte(false), 0x25);

        let restored = StatusFlags::from_stack_byte(0x10 | 0x01);
        assert!(!restored.get(StatusFlags::BREAK));
        assert!(restored.get(StatusFlags::UNUSED));
        assert!(restored.get(StatusFlags::CARRY));
    }
}
