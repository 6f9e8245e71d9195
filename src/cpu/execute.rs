//! Instruction semantics.
//!
//! `execute` runs with PC already past the whole instruction and the operand
//! resolved. It returns cycles on top of the table's base count that only
//! the instruction itself can know about (taken branches).

use super::addressing::{Operand, Resolved};
use super::flags::StatusFlags;
use super::interrupt::{self, Interrupt};
use super::opcodes::Instruction;
use super::registers::Registers;
use crate::cpu_bus::CpuBus;

/// Magic constant ORed into A by XAA/LXA. Varies between chips; $EE is the
/// value most commonly observed.
const UNSTABLE_MAGIC: u8 = 0xEE;

pub(crate) struct ExecContext<'a> {
    pub regs: &'a mut Registers,
    pub bus: &'a mut dyn CpuBus,
    /// BCD arithmetic is available on this part.
    pub decimal_mode: bool,
}

impl ExecContext<'_> {
    fn read(&mut self, resolved: &Resolved) -> u8 {
        match resolved.operand {
            Operand::Address(addr) => self.bus.read_byte(addr),
            Operand::Accumulator => self.regs.a,
            Operand::Implied => 0,
        }
    }

    fn write(&mut self, resolved: &Resolved, value: u8) {
        match resolved.operand {
            Operand::Address(addr) => self.bus.write_byte(addr, value),
            Operand::Accumulator => self.regs.a = value,
            Operand::Implied => {}
        }
    }

    fn address(resolved: &Resolved) -> u16 {
        match resolved.operand {
            Operand::Address(addr) => addr,
            _ => 0,
        }
    }

    fn flag(&self, flag: StatusFlags) -> bool {
        self.regs.status.get(flag)
    }

    fn bcd(&self) -> bool {
        self.decimal_mode && self.flag(StatusFlags::DECIMAL)
    }

    fn load_a(&mut self, value: u8) {
        self.regs.a = value;
        self.regs.status.update_nz(value);
    }

    fn load_x(&mut self, value: u8) {
        self.regs.x = value;
        self.regs.status.update_nz(value);
    }

    fn load_y(&mut self, value: u8) {
        self.regs.y = value;
        self.regs.status.update_nz(value);
    }

    fn adc(&mut self, value: u8) {
        if self.bcd() {
            self.adc_decimal(value);
            return;
        }
        let a = self.regs.a;
        let carry = self.flag(StatusFlags::CARRY) as u16;
        let sum = a as u16 + value as u16 + carry;
        let result = sum as u8;
        self.regs.status.set(StatusFlags::CARRY, sum > 0xFF);
        self.regs.status.update_overflow_add(a, value, result);
        self.load_a(result);
    }

    /// NMOS decimal add: Z follows the binary sum, N and V the intermediate
    /// result before the high nibble is corrected.
    fn adc_decimal(&mut self, value: u8) {
        let a = self.regs.a;
        let carry = self.flag(StatusFlags::CARRY) as u16;

        let binary = (a as u16 + value as u16 + carry) as u8;
        let mut low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
        let mut high = (a >> 4) as u16 + (value >> 4) as u16;
        if low > 0x09 {
            low += 0x06;
        }
        if low > 0x0F {
            high += 1;
        }

        let intermediate = ((high << 4) | (low & 0x0F)) as u8;
        self.regs.status.set(StatusFlags::ZERO, binary == 0);
        self.regs.status.set(StatusFlags::NEGATIVE, intermediate & 0x80 != 0);
        self.regs.status.update_overflow_add(a, value, intermediate);

        if high > 0x09 {
            high += 0x06;
        }
        self.regs.status.set(StatusFlags::CARRY, high > 0x0F);
        self.regs.a = ((high << 4) | (low & 0x0F)) as u8;
    }

    fn sbc(&mut self, value: u8) {
        let a = self.regs.a;
        let borrow = !self.flag(StatusFlags::CARRY) as i16;
        let diff = a as i16 - value as i16 - borrow;
        let result = diff as u8;

        // Flags come from the binary difference in both modes.
        self.regs.status.set(StatusFlags::CARRY, diff >= 0);
        self.regs.status.update_overflow_sub(a, value, result);
        self.regs.status.update_nz(result);

        if self.bcd() {
            let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
            let mut high = (a >> 4) as i16 - (value >> 4) as i16;
            if low < 0 {
                low -= 0x06;
                high -= 1;
            }
            if high < 0 {
                high -= 0x06;
            }
            self.regs.a = (((high << 4) | (low & 0x0F)) & 0xFF) as u8;
        } else {
            self.regs.a = result;
        }
    }

    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.regs.status.set(StatusFlags::CARRY, register >= value);
        self.regs.status.update_nz(result);
    }

    fn asl(&mut self, value: u8) -> u8 {
        self.regs.status.update_carry_from_shift(value & 0x80 != 0);
        let result = value << 1;
        self.regs.status.update_nz(result);
        result
    }

    fn lsr(&mut self, value: u8) -> u8 {
        self.regs.status.update_carry_from_shift(value & 0x01 != 0);
        let result = value >> 1;
        self.regs.status.update_nz(result);
        result
    }

    fn rol(&mut self, value: u8) -> u8 {
        let carry = self.flag(StatusFlags::CARRY) as u8;
        self.regs.status.update_carry_from_shift(value & 0x80 != 0);
        let result = (value << 1) | carry;
        self.regs.status.update_nz(result);
        result
    }

    fn ror(&mut self, value: u8) -> u8 {
        let carry = if self.flag(StatusFlags::CARRY) { 0x80 } else { 0 };
        self.regs.status.update_carry_from_shift(value & 0x01 != 0);
        let result = (value >> 1) | carry;
        self.regs.status.update_nz(result);
        result
    }

    fn modify(&mut self, resolved: &Resolved, op: fn(&mut Self, u8) -> u8) -> u8 {
        let value = self.read(resolved);
        let result = op(self, value);
        self.write(resolved, result);
        result
    }

    fn branch(&mut self, condition: bool, resolved: &Resolved) -> u8 {
        if !condition {
            return 0;
        }
        self.regs.pc = Self::address(resolved);
        if resolved.page_crossed {
            2
        } else {
            1
        }
    }

    /// SHA/SHX/SHY/TAS store `value & (high byte of base + 1)`.
    ///
    /// On a page cross NMOS parts also replace the high byte of the target
    /// address with the stored value. That corruption is not modeled: the
    /// write always lands on the indexed address.
    fn store_high_and(&mut self, resolved: &Resolved, value: u8) {
        let high = (resolved.base >> 8) as u8;
        self.write(resolved, value & high.wrapping_add(1));
    }
}

pub(crate) fn execute(ctx: &mut ExecContext<'_>, instruction: Instruction, resolved: &Resolved) -> u8 {
    use Instruction::*;

    match instruction {
        // Load/store
        Lda => {
            let v = ctx.read(resolved);
            ctx.load_a(v);
        }
        Ldx => {
            let v = ctx.read(resolved);
            ctx.load_x(v);
        }
        Ldy => {
            let v = ctx.read(resolved);
            ctx.load_y(v);
        }
        Sta => ctx.write(resolved, ctx.regs.a),
        Stx => ctx.write(resolved, ctx.regs.x),
        Sty => ctx.write(resolved, ctx.regs.y),

        // Transfers; TXS is the only one that leaves the flags alone
        Tax => ctx.load_x(ctx.regs.a),
        Tay => ctx.load_y(ctx.regs.a),
        Tsx => ctx.load_x(ctx.regs.sp),
        Txa => ctx.load_a(ctx.regs.x),
        Txs => ctx.regs.sp = ctx.regs.x,
        Tya => ctx.load_a(ctx.regs.y),

        // Stack
        Pha => {
            let a = ctx.regs.a;
            interrupt::push(ctx.regs, ctx.bus, a);
        }
        Php => {
            let pushed = ctx.regs.status.to_stack_byte(true);
            interrupt::push(ctx.regs, ctx.bus, pushed);
        }
        Pla => {
            let v = interrupt::pull(ctx.regs, ctx.bus);
            ctx.load_a(v);
        }
        Plp => {
            let v = interrupt::pull(ctx.regs, ctx.bus);
            ctx.regs.status = StatusFlags::from_stack_byte(v);
        }

        // Logic and arithmetic
        And => {
            let v = ctx.read(resolved);
            ctx.load_a(ctx.regs.a & v);
        }
        Eor => {
            let v = ctx.read(resolved);
            ctx.load_a(ctx.regs.a ^ v);
        }
        Ora => {
            let v = ctx.read(resolved);
            ctx.load_a(ctx.regs.a | v);
        }
        Bit => {
            let v = ctx.read(resolved);
            let status = &mut ctx.regs.status;
            status.set(StatusFlags::ZERO, ctx.regs.a & v == 0);
            status.set(StatusFlags::NEGATIVE, v & 0x80 != 0);
            status.set(StatusFlags::OVERFLOW, v & 0x40 != 0);
        }
        Adc => {
            let v = ctx.read(resolved);
            ctx.adc(v);
        }
        Sbc => {
            let v = ctx.read(resolved);
            ctx.sbc(v);
        }
        Cmp => {
            let v = ctx.read(resolved);
            ctx.compare(ctx.regs.a, v);
        }
        Cpx => {
            let v = ctx.read(resolved);
            ctx.compare(ctx.regs.x, v);
        }
        Cpy => {
            let v = ctx.read(resolved);
            ctx.compare(ctx.regs.y, v);
        }

        // Increments and decrements
        Inc => {
            ctx.modify(resolved, |ctx, v| {
                let r = v.wrapping_add(1);
                ctx.regs.status.update_nz(r);
                r
            });
        }
        Dec => {
            ctx.modify(resolved, |ctx, v| {
                let r = v.wrapping_sub(1);
                ctx.regs.status.update_nz(r);
                r
            });
        }
        Inx => ctx.load_x(ctx.regs.x.wrapping_add(1)),
        Iny => ctx.load_y(ctx.regs.y.wrapping_add(1)),
        Dex => ctx.load_x(ctx.regs.x.wrapping_sub(1)),
        Dey => ctx.load_y(ctx.regs.y.wrapping_sub(1)),

        // Shifts
        Asl => {
            ctx.modify(resolved, ExecContext::asl);
        }
        Lsr => {
            ctx.modify(resolved, ExecContext::lsr);
        }
        Rol => {
            ctx.modify(resolved, ExecContext::rol);
        }
        Ror => {
            ctx.modify(resolved, ExecContext::ror);
        }

        // Jumps and calls
        Jmp => ctx.regs.pc = ExecContext::address(resolved),
        Jsr => {
            // PC is past the operand; the pushed address is one less.
            let return_addr = ctx.regs.pc.wrapping_sub(1);
            interrupt::push_word(ctx.regs, ctx.bus, return_addr);
            ctx.regs.pc = ExecContext::address(resolved);
        }
        Rts => {
            let addr = interrupt::pull_word(ctx.regs, ctx.bus);
            ctx.regs.pc = addr.wrapping_add(1);
        }
        Rti => interrupt::leave(ctx.regs, ctx.bus),
        Brk => {
            // BRK skips a signature byte after the opcode.
            ctx.regs.pc = ctx.regs.pc.wrapping_add(1);
            interrupt::enter(ctx.regs, ctx.bus, Interrupt::Brk);
        }

        // Branches
        Bcc => return ctx.branch(!ctx.flag(StatusFlags::CARRY), resolved),
        Bcs => return ctx.branch(ctx.flag(StatusFlags::CARRY), resolved),
        Bne => return ctx.branch(!ctx.flag(StatusFlags::ZERO), resolved),
        Beq => return ctx.branch(ctx.flag(StatusFlags::ZERO), resolved),
        Bpl => return ctx.branch(!ctx.flag(StatusFlags::NEGATIVE), resolved),
        Bmi => return ctx.branch(ctx.flag(StatusFlags::NEGATIVE), resolved),
        Bvc => return ctx.branch(!ctx.flag(StatusFlags::OVERFLOW), resolved),
        Bvs => return ctx.branch(ctx.flag(StatusFlags::OVERFLOW), resolved),

        // Flags
        Clc => ctx.regs.status.remove(StatusFlags::CARRY),
        Cld => ctx.regs.status.remove(StatusFlags::DECIMAL),
        Cli => ctx.regs.status.remove(StatusFlags::INTERRUPT_DISABLE),
        Clv => ctx.regs.status.remove(StatusFlags::OVERFLOW),
        Sec => ctx.regs.status.insert(StatusFlags::CARRY),
        Sed => ctx.regs.status.insert(StatusFlags::DECIMAL),
        Sei => ctx.regs.status.insert(StatusFlags::INTERRUPT_DISABLE),

        Nop => {}

        // Undocumented read-modify-write combinations
        Slo => {
            let r = ctx.modify(resolved, ExecContext::asl);
            ctx.load_a(ctx.regs.a | r);
        }
        Rla => {
            let r = ctx.modify(resolved, ExecContext::rol);
            ctx.load_a(ctx.regs.a & r);
        }
        Sre => {
            let r = ctx.modify(resolved, ExecContext::lsr);
            ctx.load_a(ctx.regs.a ^ r);
        }
        Rra => {
            let r = ctx.modify(resolved, ExecContext::ror);
            ctx.adc(r);
        }
        Dcp => {
            let v = ctx.read(resolved);
            let r = v.wrapping_sub(1);
            ctx.write(resolved, r);
            ctx.compare(ctx.regs.a, r);
        }
        Isc => {
            let v = ctx.read(resolved);
            let r = v.wrapping_add(1);
            ctx.write(resolved, r);
            ctx.sbc(r);
        }
        Sax => ctx.write(resolved, ctx.regs.a & ctx.regs.x),
        Lax => {
            let v = ctx.read(resolved);
            ctx.load_a(v);
            ctx.regs.x = v;
        }

        // Undocumented immediate forms
        Anc => {
            let v = ctx.read(resolved);
            ctx.load_a(ctx.regs.a & v);
            let negative = ctx.flag(StatusFlags::NEGATIVE);
            ctx.regs.status.set(StatusFlags::CARRY, negative);
        }
        Alr => {
            let v = ctx.read(resolved);
            let r = ctx.lsr(ctx.regs.a & v);
            ctx.regs.a = r;
        }
        Arr => {
            // Binary-mode behavior; the decimal variant is not modeled.
            let v = ctx.read(resolved);
            let carry = if ctx.flag(StatusFlags::CARRY) { 0x80 } else { 0 };
            let r = ((ctx.regs.a & v) >> 1) | carry;
            ctx.load_a(r);
            let status = &mut ctx.regs.status;
            status.set(StatusFlags::CARRY, r & 0x40 != 0);
            status.set(StatusFlags::OVERFLOW, ((r >> 6) ^ (r >> 5)) & 0x01 != 0);
        }
        Sbx => {
            let v = ctx.read(resolved);
            let ax = ctx.regs.a & ctx.regs.x;
            ctx.regs.status.set(StatusFlags::CARRY, ax >= v);
            ctx.load_x(ax.wrapping_sub(v));
        }

        // Unstable; best-effort values
        Xaa => {
            let v = ctx.read(resolved);
            ctx.load_a((ctx.regs.a | UNSTABLE_MAGIC) & ctx.regs.x & v);
        }
        Lxa => {
            let v = ctx.read(resolved);
            let r = (ctx.regs.a | UNSTABLE_MAGIC) & v;
            ctx.load_a(r);
            ctx.regs.x = r;
        }
        Sha => ctx.store_high_and(resolved, ctx.regs.a & ctx.regs.x),
        Shx => ctx.store_high_and(resolved, ctx.regs.x),
        Shy => ctx.store_high_and(resolved, ctx.regs.y),
        Tas => {
            ctx.regs.sp = ctx.regs.a & ctx.regs.x;
            ctx.store_high_and(resolved, ctx.regs.sp);
        }
        Las => {
            let v = ctx.read(resolved) & ctx.regs.sp;
            ctx.load_a(v);
            ctx.regs.x = v;
            ctx.regs.sp = v;
        }

        // Handled by the dispatcher before execution.
        Jam => {}
    }
    0
}
