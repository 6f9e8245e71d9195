use super::*;

#[cfg(test)]
mod addressing_mode_tests {
    use super::*;

    #[test]
    fn test_zero_page_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        bus.write_byte(0x42, 0xAB);

        // LDA $42
        bus.load_program(&[0xA5, 0x42], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xAB);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_zero_page_x_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x10;
        bus.write_byte(0x52, 0xCD); // 0x42 + 0x10

        // LDA $42,X
        bus.load_program(&[0xB5, 0x42], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xCD);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_zero_page_x_wraparound() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x02;
        bus.write_byte(0x01, 0xEF); // (0xFF + 0x02) & 0xFF
        bus.write_byte(0x0101, 0x11);

        // LDA $FF,X
        bus.load_program(&[0xB5, 0xFF], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xEF);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_zero_page_y_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.y = 0x05;
        bus.write_byte(0x04, 0x77); // (0xFF + 0x05) & 0xFF

        // LDX $FF,Y
        bus.load_program(&[0xB6, 0xFF], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.x, 0x77);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_absolute_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        bus.write_byte(0x1234, 0x56);

        // LDA $1234
        bus.load_program(&[0xAD, 0x34, 0x12], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x56);
        assert_eq!(cpu.regs.pc, 0x8003);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_absolute_x_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x10;
        bus.write_byte(0x1244, 0x99);

        // LDA $1234,X
        bus.load_program(&[0xBD, 0x34, 0x12], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x99);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x01;
        bus.write_byte(0x1300, 0x88);

        // LDA $12FF,X
        bus.load_program(&[0xBD, 0xFF, 0x12], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x88);
        assert_eq!(cycles, 5); // +1 for page cross
    }

    #[test]
    fn test_absolute_y_addressing() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.y = 0x20;
        bus.write_byte(0x1254, 0x44);

        // LDA $1234,Y
        bus.load_program(&[0xB9, 0x34, 0x12], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x44);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_store_absolute_x_never_pays_page_cross() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.a = 0x5A;
        cpu.regs.x = 0x01;

        // STA $12FF,X
        bus.load_program(&[0x9D, 0xFF, 0x12], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(bus.read(0x1300), 0x5A);
        assert_eq!(cycles, 5);

        // Same cost without a crossing
        cpu.regs.x = 0x00;
        bus.load_program(&[0x9D, 0x00, 0x12], 0x8003);
        assert_eq!(step(&mut cpu, &mut bus), 5);
    }

    #[test]
    fn test_indexed_indirect_x() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x04;
        bus.write_byte(0x24, 0x74); // pointer at $20 + X
        bus.write_byte(0x25, 0x20);
        bus.write_byte(0x2074, 0x66);

        // LDA ($20,X)
        bus.load_program(&[0xA1, 0x20], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x66);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_indexed_indirect_x_wraparound() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.x = 0x01;
        // pointer at $FF, high byte read from $00 rather than $100
        bus.write_byte(0xFF, 0x00);
        bus.write_byte(0x00, 0x30);
        bus.write_byte(0x0100, 0x40);
        bus.write_byte(0x3000, 0x12);

        // LDA ($FE,X)
        bus.load_program(&[0xA1, 0xFE], 0x8000);

        step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x12);
    }

    #[test]
    fn test_indirect_indexed_y() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.y = 0x10;
        bus.write_byte(0x86, 0x28);
        bus.write_byte(0x87, 0x40);
        bus.write_byte(0x4038, 0x33);

        // LDA ($86),Y
        bus.load_program(&[0xB1, 0x86], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x33);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn test_indirect_indexed_y_page_cross() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.y = 0x10;
        bus.write_byte(0x86, 0xF8);
        bus.write_byte(0x87, 0x40);
        bus.write_byte(0x4108, 0x21);

        // LDA ($86),Y
        bus.load_program(&[0xB1, 0x86], 0x8000);

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x21);
        assert_eq!(cycles, 6);

        // STA ($86),Y costs 6 either way
        bus.load_program(&[0x91, 0x86], 0x8002);
        assert_eq!(step(&mut cpu, &mut bus), 6);
        assert_eq!(bus.read(0x4108), 0x21);
    }

    #[test]
    fn test_jmp_indirect_bug() {
        let (mut cpu, mut bus) = setup_cpu();

        bus.write_byte(0x30FF, 0x80);
        bus.write_byte(0x3100, 0x50);
        bus.write_byte(0x3000, 0x40); // high byte comes from the same page

        // JMP ($30FF)
        bus.load_program(&[0x6C, 0xFF, 0x30], 0x8000);

        step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.pc, 0x4080);
    }

    #[test]
    fn test_relative_addressing_backward() {
        let (mut cpu, mut bus) = setup_cpu();

        cpu.regs.status.remove(StatusFlags::ZERO);

        // $8010: BNE -$12 -> $8000
        bus.load_program(&[0xD0, 0xEE], 0x8010);
        cpu.regs.pc = 0x8010;

        let cycles = step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.pc, 0x8000);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_implied_and_accumulator_consume_one_byte() {
        let (mut cpu, mut bus) = setup_cpu();

        // INX; LSR A
        bus.load_program(&[0xE8, 0x4A], 0x8000);
        cpu.regs.a = 0x02;

        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.regs.pc, 0x8001);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.regs.pc, 0x8002);
        assert_eq!(cpu.regs.a, 0x01);
    }

    #[test]
    fn test_operand_fetch_wraps_at_top_of_memory() {
        let (mut cpu, mut bus) = setup_cpu();

        // LDA $1234 with the opcode at $FFFE
        bus.write_byte(0xFFFE, 0xAD);
        bus.write_byte(0xFFFF, 0x34);
        bus.write_byte(0x0000, 0x12);
        bus.write_byte(0x1234, 0x9C);
        cpu.regs.pc = 0xFFFE;

        step(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x9C);
        assert_eq!(cpu.regs.pc, 0x0001);
    }
}
