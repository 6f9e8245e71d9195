//! Static opcode table: one entry per opcode byte.
//!
//! Cycle counts are the documented NMOS base counts. `page_penalty` marks
//! the read instructions that take one extra cycle when indexing crosses a
//! page; stores and read-modify-write forms already include that cycle.

use super::addressing::AddressingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Logic and arithmetic
    And,
    Eor,
    Ora,
    Bit,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    // Increments and decrements
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    // Shifts
    Asl,
    Lsr,
    Rol,
    Ror,
    // Jumps and calls
    Jmp,
    Jsr,
    Rts,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    // Flag changes
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    // System
    Brk,
    Nop,
    Rti,
    // Undocumented, stable
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,
    Anc,
    Alr,
    Arr,
    Sbx,
    // Undocumented, unstable on real silicon
    Xaa,
    Lxa,
    Sha,
    Shx,
    Shy,
    Tas,
    Las,
    /// Locks the processor until reset.
    Jam,
}

impl Instruction {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::And => "AND",
            Instruction::Eor => "EOR",
            Instruction::Ora => "ORA",
            Instruction::Bit => "BIT",
            Instruction::Adc => "ADC",
            Instruction::Sbc => "SBC",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Asl => "ASL",
            Instruction::Lsr => "LSR",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Rts => "RTS",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Brk => "BRK",
            Instruction::Nop => "NOP",
            Instruction::Rti => "RTI",
            Instruction::Slo => "SLO",
            Instruction::Rla => "RLA",
            Instruction::Sre => "SRE",
            Instruction::Rra => "RRA",
            Instruction::Sax => "SAX",
            Instruction::Lax => "LAX",
            Instruction::Dcp => "DCP",
            Instruction::Isc => "ISC",
            Instruction::Anc => "ANC",
            Instruction::Alr => "ALR",
            Instruction::Arr => "ARR",
            Instruction::Sbx => "SBX",
            Instruction::Xaa => "XAA",
            Instruction::Lxa => "LXA",
            Instruction::Sha => "SHA",
            Instruction::Shx => "SHX",
            Instruction::Shy => "SHY",
            Instruction::Tas => "TAS",
            Instruction::Las => "LAS",
            Instruction::Jam => "JAM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub instruction: Instruction,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub page_penalty: bool,
    pub documented: bool,
}

impl Opcode {
    const fn new(instruction: Instruction, mode: AddressingMode, cycles: u8) -> Self {
        Opcode {
            instruction,
            mode,
            cycles,
            page_penalty: false,
            documented: true,
        }
    }

    const fn with_page_penalty(mut self) -> Self {
        self.page_penalty = true;
        self
    }

    const fn undocumented(mut self) -> Self {
        self.documented = false;
        self
    }

    pub const fn byte_len(&self) -> u16 {
        self.mode.instruction_len()
    }
}

pub fn lookup(opcode: u8) -> &'static Opcode {
    &OPCODES[opcode as usize]
}

use AddressingMode::*;
use Instruction::*;

pub static OPCODES: [Opcode; 256] = [
    /* 0x00 */ Opcode::new(Brk, Implied, 7),
    /* 0x01 */ Opcode::new(Ora, IndexedIndirect, 6),
    /* 0x02 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x03 */ Opcode::new(Slo, IndexedIndirect, 8).undocumented(),
    /* 0x04 */ Opcode::new(Nop, ZeroPage, 3).undocumented(),
    /* 0x05 */ Opcode::new(Ora, ZeroPage, 3),
    /* 0x06 */ Opcode::new(Asl, ZeroPage, 5),
    /* 0x07 */ Opcode::new(Slo, ZeroPage, 5).undocumented(),
    /* 0x08 */ Opcode::new(Php, Implied, 3),
    /* 0x09 */ Opcode::new(Ora, Immediate, 2),
    /* 0x0A */ Opcode::new(Asl, Accumulator, 2),
    /* 0x0B */ Opcode::new(Anc, Immediate, 2).undocumented(),
    /* 0x0C */ Opcode::new(Nop, Absolute, 4).undocumented(),
    /* 0x0D */ Opcode::new(Ora, Absolute, 4),
    /* 0x0E */ Opcode::new(Asl, Absolute, 6),
    /* 0x0F */ Opcode::new(Slo, Absolute, 6).undocumented(),
    /* 0x10 */ Opcode::new(Bpl, Relative, 2),
    /* 0x11 */ Opcode::new(Ora, IndirectIndexed, 5).with_page_penalty(),
    /* 0x12 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x13 */ Opcode::new(Slo, IndirectIndexed, 8).undocumented(),
    /* 0x14 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0x15 */ Opcode::new(Ora, ZeroPageX, 4),
    /* 0x16 */ Opcode::new(Asl, ZeroPageX, 6),
    /* 0x17 */ Opcode::new(Slo, ZeroPageX, 6).undocumented(),
    /* 0x18 */ Opcode::new(Clc, Implied, 2),
    /* 0x19 */ Opcode::new(Ora, AbsoluteY, 4).with_page_penalty(),
    /* 0x1A */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0x1B */ Opcode::new(Slo, AbsoluteY, 7).undocumented(),
    /* 0x1C */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0x1D */ Opcode::new(Ora, AbsoluteX, 4).with_page_penalty(),
    /* 0x1E */ Opcode::new(Asl, AbsoluteX, 7),
    /* 0x1F */ Opcode::new(Slo, AbsoluteX, 7).undocumented(),
    /* 0x20 */ Opcode::new(Jsr, Absolute, 6),
    /* 0x21 */ Opcode::new(And, IndexedIndirect, 6),
    /* 0x22 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x23 */ Opcode::new(Rla, IndexedIndirect, 8).undocumented(),
    /* 0x24 */ Opcode::new(Bit, ZeroPage, 3),
    /* 0x25 */ Opcode::new(And, ZeroPage, 3),
    /* 0x26 */ Opcode::new(Rol, ZeroPage, 5),
    /* 0x27 */ Opcode::new(Rla, ZeroPage, 5).undocumented(),
    /* 0x28 */ Opcode::new(Plp, Implied, 4),
    /* 0x29 */ Opcode::new(And, Immediate, 2),
    /* 0x2A */ Opcode::new(Rol, Accumulator, 2),
    /* 0x2B */ Opcode::new(Anc, Immediate, 2).undocumented(),
    /* 0x2C */ Opcode::new(Bit, Absolute, 4),
    /* 0x2D */ Opcode::new(And, Absolute, 4),
    /* 0x2E */ Opcode::new(Rol, Absolute, 6),
    /* 0x2F */ Opcode::new(Rla, Absolute, 6).undocumented(),
    /* 0x30 */ Opcode::new(Bmi, Relative, 2),
    /* 0x31 */ Opcode::new(And, IndirectIndexed, 5).with_page_penalty(),
    /* 0x32 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x33 */ Opcode::new(Rla, IndirectIndexed, 8).undocumented(),
    /* 0x34 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0x35 */ Opcode::new(And, ZeroPageX, 4),
    /* 0x36 */ Opcode::new(Rol, ZeroPageX, 6),
    /* 0x37 */ Opcode::new(Rla, ZeroPageX, 6).undocumented(),
    /* 0x38 */ Opcode::new(Sec, Implied, 2),
    /* 0x39 */ Opcode::new(And, AbsoluteY, 4).with_page_penalty(),
    /* 0x3A */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0x3B */ Opcode::new(Rla, AbsoluteY, 7).undocumented(),
    /* 0x3C */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0x3D */ Opcode::new(And, AbsoluteX, 4).with_page_penalty(),
    /* 0x3E */ Opcode::new(Rol, AbsoluteX, 7),
    /* 0x3F */ Opcode::new(Rla, AbsoluteX, 7).undocumented(),
    /* 0x40 */ Opcode::new(Rti, Implied, 6),
    /* 0x41 */ Opcode::new(Eor, IndexedIndirect, 6),
    /* 0x42 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x43 */ Opcode::new(Sre, IndexedIndirect, 8).undocumented(),
    /* 0x44 */ Opcode::new(Nop, ZeroPage, 3).undocumented(),
    /* 0x45 */ Opcode::new(Eor, ZeroPage, 3),
    /* 0x46 */ Opcode::new(Lsr, ZeroPage, 5),
    /* 0x47 */ Opcode::new(Sre, ZeroPage, 5).undocumented(),
    /* 0x48 */ Opcode::new(Pha, Implied, 3),
    /* 0x49 */ Opcode::new(Eor, Immediate, 2),
    /* 0x4A */ Opcode::new(Lsr, Accumulator, 2),
    /* 0x4B */ Opcode::new(Alr, Immediate, 2).undocumented(),
    /* 0x4C */ Opcode::new(Jmp, Absolute, 3),
    /* 0x4D */ Opcode::new(Eor, Absolute, 4),
    /* 0x4E */ Opcode::new(Lsr, Absolute, 6),
    /* 0x4F */ Opcode::new(Sre, Absolute, 6).undocumented(),
    /* 0x50 */ Opcode::new(Bvc, Relative, 2),
    /* 0x51 */ Opcode::new(Eor, IndirectIndexed, 5).with_page_penalty(),
    /* 0x52 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x53 */ Opcode::new(Sre, IndirectIndexed, 8).undocumented(),
    /* 0x54 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0x55 */ Opcode::new(Eor, ZeroPageX, 4),
    /* 0x56 */ Opcode::new(Lsr, ZeroPageX, 6),
    /* 0x57 */ Opcode::new(Sre, ZeroPageX, 6).undocumented(),
    /* 0x58 */ Opcode::new(Cli, Implied, 2),
    /* 0x59 */ Opcode::new(Eor, AbsoluteY, 4).with_page_penalty(),
    /* 0x5A */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0x5B */ Opcode::new(Sre, AbsoluteY, 7).undocumented(),
    /* 0x5C */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0x5D */ Opcode::new(Eor, AbsoluteX, 4).with_page_penalty(),
    /* 0x5E */ Opcode::new(Lsr, AbsoluteX, 7),
    /* 0x5F */ Opcode::new(Sre, AbsoluteX, 7).undocumented(),
    /* 0x60 */ Opcode::new(Rts, Implied, 6),
    /* 0x61 */ Opcode::new(Adc, IndexedIndirect, 6),
    /* 0x62 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x63 */ Opcode::new(Rra, IndexedIndirect, 8).undocumented(),
    /* 0x64 */ Opcode::new(Nop, ZeroPage, 3).undocumented(),
    /* 0x65 */ Opcode::new(Adc, ZeroPage, 3),
    /* 0x66 */ Opcode::new(Ror, ZeroPage, 5),
    /* 0x67 */ Opcode::new(Rra, ZeroPage, 5).undocumented(),
    /* 0x68 */ Opcode::new(Pla, Implied, 4),
    /* 0x69 */ Opcode::new(Adc, Immediate, 2),
    /* 0x6A */ Opcode::new(Ror, Accumulator, 2),
    /* 0x6B */ Opcode::new(Arr, Immediate, 2).undocumented(),
    /* 0x6C */ Opcode::new(Jmp, Indirect, 5),
    /* 0x6D */ Opcode::new(Adc, Absolute, 4),
    /* 0x6E */ Opcode::new(Ror, Absolute, 6),
    /* 0x6F */ Opcode::new(Rra, Absolute, 6).undocumented(),
    /* 0x70 */ Opcode::new(Bvs, Relative, 2),
    /* 0x71 */ Opcode::new(Adc, IndirectIndexed, 5).with_page_penalty(),
    /* 0x72 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x73 */ Opcode::new(Rra, IndirectIndexed, 8).undocumented(),
    /* 0x74 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0x75 */ Opcode::new(Adc, ZeroPageX, 4),
    /* 0x76 */ Opcode::new(Ror, ZeroPageX, 6),
    /* 0x77 */ Opcode::new(Rra, ZeroPageX, 6).undocumented(),
    /* 0x78 */ Opcode::new(Sei, Implied, 2),
    /* 0x79 */ Opcode::new(Adc, AbsoluteY, 4).with_page_penalty(),
    /* 0x7A */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0x7B */ Opcode::new(Rra, AbsoluteY, 7).undocumented(),
    /* 0x7C */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0x7D */ Opcode::new(Adc, AbsoluteX, 4).with_page_penalty(),
    /* 0x7E */ Opcode::new(Ror, AbsoluteX, 7),
    /* 0x7F */ Opcode::new(Rra, AbsoluteX, 7).undocumented(),
    /* 0x80 */ Opcode::new(Nop, Immediate, 2).undocumented(),
    /* 0x81 */ Opcode::new(Sta, IndexedIndirect, 6),
    /* 0x82 */ Opcode::new(Nop, Immediate, 2).undocumented(),
    /* 0x83 */ Opcode::new(Sax, IndexedIndirect, 6).undocumented(),
    /* 0x84 */ Opcode::new(Sty, ZeroPage, 3),
    /* 0x85 */ Opcode::new(Sta, ZeroPage, 3),
    /* 0x86 */ Opcode::new(Stx, ZeroPage, 3),
    /* 0x87 */ Opcode::new(Sax, ZeroPage, 3).undocumented(),
    /* 0x88 */ Opcode::new(Dey, Implied, 2),
    /* 0x89 */ Opcode::new(Nop, Immediate, 2).undocumented(),
    /* 0x8A */ Opcode::new(Txa, Implied, 2),
    /* 0x8B */ Opcode::new(Xaa, Immediate, 2).undocumented(),
    /* 0x8C */ Opcode::new(Sty, Absolute, 4),
    /* 0x8D */ Opcode::new(Sta, Absolute, 4),
    /* 0x8E */ Opcode::new(Stx, Absolute, 4),
    /* 0x8F */ Opcode::new(Sax, Absolute, 4).undocumented(),
    /* 0x90 */ Opcode::new(Bcc, Relative, 2),
    /* 0x91 */ Opcode::new(Sta, IndirectIndexed, 6),
    /* 0x92 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0x93 */ Opcode::new(Sha, IndirectIndexed, 6).undocumented(),
    /* 0x94 */ Opcode::new(Sty, ZeroPageX, 4),
    /* 0x95 */ Opcode::new(Sta, ZeroPageX, 4),
    /* 0x96 */ Opcode::new(Stx, ZeroPageY, 4),
    /* 0x97 */ Opcode::new(Sax, ZeroPageY, 4).undocumented(),
    /* 0x98 */ Opcode::new(Tya, Implied, 2),
    /* 0x99 */ Opcode::new(Sta, AbsoluteY, 5),
    /* 0x9A */ Opcode::new(Txs, Implied, 2),
    /* 0x9B */ Opcode::new(Tas, AbsoluteY, 5).undocumented(),
    /* 0x9C */ Opcode::new(Shy, AbsoluteX, 5).undocumented(),
    /* 0x9D */ Opcode::new(Sta, AbsoluteX, 5),
    /* 0x9E */ Opcode::new(Shx, AbsoluteY, 5).undocumented(),
    /* 0x9F */ Opcode::new(Sha, AbsoluteY, 5).undocumented(),
    /* 0xA0 */ Opcode::new(Ldy, Immediate, 2),
    /* 0xA1 */ Opcode::new(Lda, IndexedIndirect, 6),
    /* 0xA2 */ Opcode::new(Ldx, Immediate, 2),
    /* 0xA3 */ Opcode::new(Lax, IndexedIndirect, 6).undocumented(),
    /* 0xA4 */ Opcode::new(Ldy, ZeroPage, 3),
    /* 0xA5 */ Opcode::new(Lda, ZeroPage, 3),
    /* 0xA6 */ Opcode::new(Ldx, ZeroPage, 3),
    /* 0xA7 */ Opcode::new(Lax, ZeroPage, 3).undocumented(),
    /* 0xA8 */ Opcode::new(Tay, Implied, 2),
    /* 0xA9 */ Opcode::new(Lda, Immediate, 2),
    /* 0xAA */ Opcode::new(Tax, Implied, 2),
    /* 0xAB */ Opcode::new(Lxa, Immediate, 2).undocumented(),
    /* 0xAC */ Opcode::new(Ldy, Absolute, 4),
    /* 0xAD */ Opcode::new(Lda, Absolute, 4),
    /* 0xAE */ Opcode::new(Ldx, Absolute, 4),
    /* 0xAF */ Opcode::new(Lax, Absolute, 4).undocumented(),
    /* 0xB0 */ Opcode::new(Bcs, Relative, 2),
    /* 0xB1 */ Opcode::new(Lda, IndirectIndexed, 5).with_page_penalty(),
    /* 0xB2 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0xB3 */ Opcode::new(Lax, IndirectIndexed, 5).with_page_penalty().undocumented(),
    /* 0xB4 */ Opcode::new(Ldy, ZeroPageX, 4),
    /* 0xB5 */ Opcode::new(Lda, ZeroPageX, 4),
    /* 0xB6 */ Opcode::new(Ldx, ZeroPageY, 4),
    /* 0xB7 */ Opcode::new(Lax, ZeroPageY, 4).undocumented(),
    /* 0xB8 */ Opcode::new(Clv, Implied, 2),
    /* 0xB9 */ Opcode::new(Lda, AbsoluteY, 4).with_page_penalty(),
    /* 0xBA */ Opcode::new(Tsx, Implied, 2),
    /* 0xBB */ Opcode::new(Las, AbsoluteY, 4).with_page_penalty().undocumented(),
    /* 0xBC */ Opcode::new(Ldy, AbsoluteX, 4).with_page_penalty(),
    /* 0xBD */ Opcode::new(Lda, AbsoluteX, 4).with_page_penalty(),
    /* 0xBE */ Opcode::new(Ldx, AbsoluteY, 4).with_page_penalty(),
    /* 0xBF */ Opcode::new(Lax, AbsoluteY, 4).with_page_penalty().undocumented(),
    /* 0xC0 */ Opcode::new(Cpy, Immediate, 2),
    /* 0xC1 */ Opcode::new(Cmp, IndexedIndirect, 6),
    /* 0xC2 */ Opcode::new(Nop, Immediate, 2).undocumented(),
    /* 0xC3 */ Opcode::new(Dcp, IndexedIndirect, 8).undocumented(),
    /* 0xC4 */ Opcode::new(Cpy, ZeroPage, 3),
    /* 0xC5 */ Opcode::new(Cmp, ZeroPage, 3),
    /* 0xC6 */ Opcode::new(Dec, ZeroPage, 5),
    /* 0xC7 */ Opcode::new(Dcp, ZeroPage, 5).undocumented(),
    /* 0xC8 */ Opcode::new(Iny, Implied, 2),
    /* 0xC9 */ Opcode::new(Cmp, Immediate, 2),
    /* 0xCA */ Opcode::new(Dex, Implied, 2),
    /* 0xCB */ Opcode::new(Sbx, Immediate, 2).undocumented(),
    /* 0xCC */ Opcode::new(Cpy, Absolute, 4),
    /* 0xCD */ Opcode::new(Cmp, Absolute, 4),
    /* 0xCE */ Opcode::new(Dec, Absolute, 6),
    /* 0xCF */ Opcode::new(Dcp, Absolute, 6).undocumented(),
    /* 0xD0 */ Opcode::new(Bne, Relative, 2),
    /* 0xD1 */ Opcode::new(Cmp, IndirectIndexed, 5).with_page_penalty(),
    /* 0xD2 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0xD3 */ Opcode::new(Dcp, IndirectIndexed, 8).undocumented(),
    /* 0xD4 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0xD5 */ Opcode::new(Cmp, ZeroPageX, 4),
    /* 0xD6 */ Opcode::new(Dec, ZeroPageX, 6),
    /* 0xD7 */ Opcode::new(Dcp, ZeroPageX, 6).undocumented(),
    /* 0xD8 */ Opcode::new(Cld, Implied, 2),
    /* 0xD9 */ Opcode::new(Cmp, AbsoluteY, 4).with_page_penalty(),
    /* 0xDA */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0xDB */ Opcode::new(Dcp, AbsoluteY, 7).undocumented(),
    /* 0xDC */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0xDD */ Opcode::new(Cmp, AbsoluteX, 4).with_page_penalty(),
    /* 0xDE */ Opcode::new(Dec, AbsoluteX, 7),
    /* 0xDF */ Opcode::new(Dcp, AbsoluteX, 7).undocumented(),
    /* 0xE0 */ Opcode::new(Cpx, Immediate, 2),
    /* 0xE1 */ Opcode::new(Sbc, IndexedIndirect, 6),
    /* 0xE2 */ Opcode::new(Nop, Immediate, 2).undocumented(),
    /* 0xE3 */ Opcode::new(Isc, IndexedIndirect, 8).undocumented(),
    /* 0xE4 */ Opcode::new(Cpx, ZeroPage, 3),
    /* 0xE5 */ Opcode::new(Sbc, ZeroPage, 3),
    /* 0xE6 */ Opcode::new(Inc, ZeroPage, 5),
    /* 0xE7 */ Opcode::new(Isc, ZeroPage, 5).undocumented(),
    /* 0xE8 */ Opcode::new(Inx, Implied, 2),
    /* 0xE9 */ Opcode::new(Sbc, Immediate, 2),
    /* 0xEA */ Opcode::new(Nop, Implied, 2),
    /* 0xEB */ Opcode::new(Sbc, Immediate, 2).undocumented(),
    /* 0xEC */ Opcode::new(Cpx, Absolute, 4),
    /* 0xED */ Opcode::new(Sbc, Absolute, 4),
    /* 0xEE */ Opcode::new(Inc, Absolute, 6),
    /* 0xEF */ Opcode::new(Isc, Absolute, 6).undocumented(),
    /* 0xF0 */ Opcode::new(Beq, Relative, 2),
    /* 0xF1 */ Opcode::new(Sbc, IndirectIndexed, 5).with_page_penalty(),
    /* 0xF2 */ Opcode::new(Jam, Implied, 2).undocumented(),
    /* 0xF3 */ Opcode::new(Isc, IndirectIndexed, 8).undocumented(),
    /* 0xF4 */ Opcode::new(Nop, ZeroPageX, 4).undocumented(),
    /* 0xF5 */ Opcode::new(Sbc, ZeroPageX, 4),
    /* 0xF6 */ Opcode::new(Inc, ZeroPageX, 6),
    /* 0xF7 */ Opcode::new(Isc, ZeroPageX, 6).undocumented(),
    /* 0xF8 */ Opcode::new(Sed, Implied, 2),
    /* 0xF9 */ Opcode::new(Sbc, AbsoluteY, 4).with_page_penalty(),
    /* 0xFA */ Opcode::new(Nop, Implied, 2).undocumented(),
    /* 0xFB */ Opcode::new(Isc, AbsoluteY, 7).undocumented(),
    /* 0xFC */ Opcode::new(Nop, AbsoluteX, 4).with_page_penalty().undocumented(),
    /* 0xFD */ Opcode::new(Sbc, AbsoluteX, 4).with_page_penalty(),
    /* 0xFE */ Opcode::new(Inc, AbsoluteX, 7),
    /* 0xFF */ Opcode::new(Isc, AbsoluteX, 7).undocumented(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODES.iter().filter(|op| op.documented).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_every_mnemonic_uses_consistent_modes() {
        for (byte, op) in OPCODES.iter().enumerate() {
            match op.instruction {
                Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => {
                    assert_eq!(op.mode, Relative, "opcode {:#04x}", byte)
                }
                Jam | Brk | Rti | Rts | Pha | Php | Pla | Plp => {
                    assert_eq!(op.mode, Implied, "opcode {:#04x}", byte)
                }
                _ => {}
            }
            assert!(op.cycles >= 2, "opcode {:#04x}", byte);
        }
    }

    #[test]
    fn test_page_penalty_only_on_indexed_modes() {
        for (byte, op) in OPCODES.iter().enumerate() {
            if op.page_penalty {
                assert!(
                    matches!(op.mode, AbsoluteX | AbsoluteY | IndirectIndexed),
                    "opcode {:#04x}",
                    byte
                );
            }
        }
    }

    #[test]
    fn test_spot_check_entries() {
        assert_eq!(*lookup(0xA9), Opcode::new(Lda, Immediate, 2));
        assert_eq!(*lookup(0xBD), Opcode::new(Lda, AbsoluteX, 4).with_page_penalty());
        assert_eq!(*lookup(0x9D), Opcode::new(Sta, AbsoluteX, 5));
        assert_eq!(*lookup(0x6C), Opcode::new(Jmp, Indirect, 5));
        assert_eq!(*lookup(0x20), Opcode::new(Jsr, Absolute, 6));
        assert_eq!(*lookup(0x1E), Opcode::new(Asl, AbsoluteX, 7));
        assert_eq!(lookup(0xEB).instruction, Sbc);
        assert!(!lookup(0xEB).documented);
        assert_eq!(lookup(0x00).byte_len(), 1);
        assert_eq!(lookup(0x4C).byte_len(), 3);
    }

    #[test]
    fn test_store_forms_never_pay_page_penalty() {
        for op in OPCODES.iter() {
            if matches!(op.instruction, Sta | Stx | Sty | Sax | Sha | Shx | Shy | Tas) {
                assert!(!op.page_penalty);
            }
        }
    }
}
