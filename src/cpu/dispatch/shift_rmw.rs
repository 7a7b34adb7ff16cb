/*!
shift_rmw.rs - ASL/LSR/ROL/ROR/INC/DEC/INX/INY/DEX/DEY opcode family handler.

Overview
========
The four shift/rotate instructions (accumulator and memory-target
addressing modes), INC/DEC on memory, and the four register
increment/decrement instructions.

Responsibilities
================
- Memory-target shifts/rotates and INC/DEC perform the full
  read-modify-write choreography: read the byte, compute the new value,
  write it back, then update N/Z from the new value. The observable
  ordering (original value visible, then new value, never an
  intermediate) falls out naturally from doing the read and write as two
  ordinary memory accesses with no partial state exposed in between.
- Accumulator shifts/rotates operate on A directly; INX/INY/DEX/DEY
  operate on the named register. Both update N/Z.
- The carry-affecting kernels (ASL/LSR/ROL/ROR) live in `alu`; this
  module only wires addressing + register/memory target selection.

Return Contract
===============
`true` if handled here; `false` otherwise.
*/

use crate::cpu::addressing::{absolute, absolute_x_write, zero_page, zero_page_x};
use crate::cpu::alu::{asl, lsr, rol, ror, set_zn};
use crate::cpu::state::{CARRY, Cpu};
use crate::error::Fault;
use crate::memory::Memory;

enum ShiftOp {
    Asl,
    Lsr,
    Rol,
    Ror,
}

pub(crate) fn handle(
    opcode: u8,
    cpu: &mut Cpu,
    memory: &mut Memory,
    cycles: &mut u32,
) -> Result<bool, Fault> {
    match opcode {
        0xE8 => {
            cpu.set_x(cpu.x().wrapping_add(1));
            let v = cpu.x();
            set_zn(cpu, v);
        }
        0xC8 => {
            cpu.set_y(cpu.y().wrapping_add(1));
            let v = cpu.y();
            set_zn(cpu, v);
        }
        0xCA => {
            cpu.set_x(cpu.x().wrapping_sub(1));
            let v = cpu.x();
            set_zn(cpu, v);
        }
        0x88 => {
            cpu.set_y(cpu.y().wrapping_sub(1));
            let v = cpu.y();
            set_zn(cpu, v);
        }

        0xE6 | 0xF6 | 0xEE | 0xFE => rmw_memory_addr(opcode, cpu, memory, |v| v.wrapping_add(1)),
        0xC6 | 0xD6 | 0xCE | 0xDE => rmw_memory_addr(opcode, cpu, memory, |v| v.wrapping_sub(1)),

        0x0A | 0x06 | 0x16 | 0x0E | 0x1E => shift(opcode, cpu, memory, ShiftOp::Asl),
        0x4A | 0x46 | 0x56 | 0x4E | 0x5E => shift(opcode, cpu, memory, ShiftOp::Lsr),
        0x2A | 0x26 | 0x36 | 0x2E | 0x3E => shift(opcode, cpu, memory, ShiftOp::Rol),
        0x6A | 0x66 | 0x76 | 0x6E | 0x7E => shift(opcode, cpu, memory, ShiftOp::Ror),

        _ => return Ok(false),
    }
    let _ = cycles; // no dynamic penalty in this family: every cost is fixed per opcode.
    Ok(true)
}

#[inline]
fn rmw_memory_addr(opcode: u8, cpu: &mut Cpu, memory: &mut Memory, f: impl FnOnce(u8) -> u8) {
    let addr = match opcode {
        0xE6 | 0xC6 => zero_page(cpu, memory),
        0xF6 | 0xD6 => zero_page_x(cpu, memory),
        0xEE | 0xCE => absolute(cpu, memory),
        0xFE | 0xDE => absolute_x_write(cpu, memory),
        _ => unreachable!(),
    };
    let old = memory[addr];
    let new = f(old);
    memory[addr] = new;
    set_zn(cpu, new);
}

#[inline]
fn shift(opcode: u8, cpu: &mut Cpu, memory: &mut Memory, op: ShiftOp) {
    let is_accumulator = matches!(opcode, 0x0A | 0x4A | 0x2A | 0x6A);
    let carry_in = cpu.is_flag_set(CARRY);

    if is_accumulator {
        let v = cpu.a();
        let (result, carry_out) = apply(op, v, carry_in);
        cpu.set_a(result);
        cpu.assign_flag(CARRY, carry_out);
        set_zn(cpu, result);
        return;
    }

    let addr = match opcode {
        0x06 | 0x46 | 0x26 | 0x66 => zero_page(cpu, memory),
        0x16 | 0x56 | 0x36 | 0x76 => zero_page_x(cpu, memory),
        0x0E | 0x4E | 0x2E | 0x6E => absolute(cpu, memory),
        0x1E | 0x5E | 0x3E | 0x7E => absolute_x_write(cpu, memory),
        _ => unreachable!(),
    };
    let old = memory[addr];
    let (result, carry_out) = apply(op, old, carry_in);
    memory[addr] = result;
    cpu.assign_flag(CARRY, carry_out);
    set_zn(cpu, result);
}

#[inline]
fn apply(op: ShiftOp, v: u8, carry_in: bool) -> (u8, bool) {
    match op {
        ShiftOp::Asl => asl(v),
        ShiftOp::Lsr => lsr(v),
        ShiftOp::Rol => rol(v, carry_in),
        ShiftOp::Ror => ror(v, carry_in),
    }
}
