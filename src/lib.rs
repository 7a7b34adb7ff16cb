#![doc = r#"
A cycle-counted functional emulator for the MOS 6502 microprocessor.

Given a flat 64 KiB memory image and a cycle budget, `Cpu::execute`
retires instructions in program order, mutating registers and memory
and consuming cycles, with per-cycle-accurate behavior across all eight
addressing modes (including page-crossing penalties), ALU/flag
semantics, stack discipline, and branch/jump/subroutine/BRK/RTI cycle
accounting.

Modules:
- cpu: register/flag state, addressing modes, ALU kernels, opcode
  cycle table, and the per-family dispatch + execution loop
- memory: the flat 64 KiB address space
- loader: a minimal two-byte-header program loader
- error: the fault taxonomy (unknown opcode, decimal mode attempted)

Decimal (BCD) arithmetic, hardware interrupts (IRQ/NMI) and vector
dispatch, clock pacing, and peripherals/memory-mapped I/O are out of
scope for this crate.
"#]

pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;

pub use cpu::Cpu;
pub use error::Fault;
pub use loader::load_prog;
pub use memory::Memory;

/// End-to-end scenarios exercised through the public `Cpu`/`Memory`/
/// `load_prog` surface, rather than through an individual family
/// handler's internals.
#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::cpu::state::{NEGATIVE, ZERO};

    #[test]
    fn lda_immediate_sets_negative_flag() {
        let mut mem = Memory::new();
        mem[0xFFFC] = 0xA9;
        mem[0xFFFD] = 0x84;
        let mut cpu = Cpu::new();
        cpu.set_pc(0xFFFC);
        let cycles = cpu.execute(2, &mut mem);
        assert_eq!(cpu.a(), 0x84);
        assert_eq!(cycles, 2);
        assert!(!cpu.is_flag_set(ZERO));
        assert!(cpu.is_flag_set(NEGATIVE));
    }

    #[test]
    fn lda_zero_page_x_wraps() {
        let mut mem = Memory::new();
        mem[0xFFFC] = 0xB5;
        mem[0xFFFD] = 0x80;
        mem[0x007F] = 0x37;
        let mut cpu = Cpu::new();
        cpu.set_pc(0xFFFC);
        cpu.set_x(0xFF);
        let cycles = cpu.execute(4, &mut mem);
        assert_eq!(cpu.a(), 0x37);
        assert_eq!(cycles, 4);
        assert!(!cpu.is_flag_set(ZERO));
        assert!(!cpu.is_flag_set(NEGATIVE));
    }

    #[test]
    fn jsr_rts_lda_restores_stack_pointer() {
        let mut mem = Memory::new();
        mem[0xFF00] = 0x20;
        mem[0xFF01] = 0x00;
        mem[0xFF02] = 0x80;
        mem[0x8000] = 0x60;
        mem[0xFF03] = 0xA9;
        mem[0xFF04] = 0x42;
        let mut cpu = Cpu::new();
        cpu.set_pc(0xFF00);
        cpu.set_sp(0xFF);
        let sp_before = cpu.sp();
        let cycles = cpu.execute(14, &mut mem);
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cycles, 14);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn beq_taken_with_page_cross_costs_four_cycles() {
        let mut mem = Memory::new();
        mem[0xFEFD] = 0xF0;
        mem[0xFEFE] = 0x01;
        let mut cpu = Cpu::new();
        cpu.set_pc(0xFEFD);
        cpu.assign_flag(ZERO, true);
        let cycles = cpu.execute(4, &mut mem);
        assert_eq!(cpu.pc(), 0xFF00);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn brk_then_rti_round_trip_restores_pc_sp_and_status() {
        let mut mem = Memory::new();
        mem[0xFF00] = 0x00;
        mem[0xFFFE] = 0x00;
        mem[0xFFFF] = 0x80;
        mem[0x8000] = 0x40;
        let mut cpu = Cpu::new();
        cpu.set_pc(0xFF00);
        cpu.set_sp(0xFF);
        cpu.assign_flag(crate::cpu::state::CARRY, true);
        let sp_before = cpu.sp();
        let status_before = cpu.status();
        let cycles = cpu.execute(13, &mut mem);
        assert_eq!(cpu.pc(), 0xFF02);
        assert_eq!(cycles, 13);
        assert_eq!(cpu.sp(), sp_before);
        assert_eq!(cpu.status(), status_before);
    }

    /// Loads the self-incrementing loop program from spec scenario 7 and
    /// drives it one instruction at a time via repeated `Cpu::execute(1, ..)`
    /// calls, exactly as a host clock loop would. The loop body (INC/LDX/
    /// INX/JMP) costs 13 cycles per pass after a 5-cycle LDA+STA setup, so
    /// the first full pass completes at cycle 18 — the budget used here —
    /// landing precisely on the values this scenario names (A=0,
    /// mem[0x42]=1, X=2); driving further would start a second pass and
    /// increment mem[0x42] again.
    #[test]
    fn self_loop_program_via_load_prog() {
        let image = [
            0x00, 0xFF, 0xA9, 0x00, 0x85, 0x42, 0xE6, 0x42, 0xA6, 0x42, 0xE8, 0x4C, 0x04, 0xFF,
        ];
        let mut mem = Memory::new();
        let load_addr = load_prog(&image, &mut mem);
        assert_eq!(load_addr, 0xFF00);

        let mut cpu = Cpu::new();
        cpu.set_pc(load_addr);

        let mut total = 0u32;
        while total < 18 {
            total += cpu.execute(1, &mut mem) as u32;
        }

        assert_eq!(cpu.a(), 0x00);
        assert_eq!(mem[0x0042], 1);
        assert_eq!(cpu.x(), 2);
        assert_eq!(cpu.pc(), 0xFF04);
    }
}
