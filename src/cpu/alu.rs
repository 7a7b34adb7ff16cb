/*!
alu.rs - Flag-setting kernels shared by the dispatch handlers.

These are pure functions over register/memory values; they do not fetch
operands or know about addressing modes (that is `addressing.rs`'s job)
and they do not charge cycles (that is the opcode table's job). Each
function mirrors one ALU rule from the instruction-set specification.
*/

use crate::cpu::state::{CARRY, Cpu, DECIMAL, NEGATIVE, OVERFLOW, ZERO};
use crate::error::Fault;

/// `LoadRegisterSetStatus(v)`: Z = (v == 0), N = bit7(v). Shared by every
/// load, transfer, pull, shift, and increment/decrement on a register.
#[inline]
pub(crate) fn set_zn(cpu: &mut Cpu, v: u8) {
    cpu.update_zn(v);
}

/// `ADC(operand)`. Faults if D is set; otherwise performs the add with
/// carry-in, sets C/Z/N/V, and writes the result back to A.
pub(crate) fn adc(cpu: &mut Cpu, operand: u8, opcode: u8) -> Result<(), Fault> {
    if cpu.is_flag_set(DECIMAL) {
        log::error!("decimal mode ADC/SBC attempted at opcode {opcode:#04X}");
        return Err(Fault::DecimalModeNotImplemented {
            opcode,
            pc: cpu.pc(),
        });
    }
    let a_before = cpu.a();
    let carry_in = cpu.is_flag_set(CARRY) as u16;
    let sum = a_before as u16 + operand as u16 + carry_in;
    let result = (sum & 0xFF) as u8;
    let overflow = (!(a_before ^ operand)) & (a_before ^ result) & 0x80 != 0;
    cpu.set_a(result);
    cpu.assign_flag(CARRY, sum > 0xFF);
    cpu.assign_flag(OVERFLOW, overflow);
    set_zn(cpu, result);
    Ok(())
}

/// `SBC(operand)`: ADC with the operand's bits inverted, same carry input.
#[inline]
pub(crate) fn sbc(cpu: &mut Cpu, operand: u8, opcode: u8) -> Result<(), Fault> {
    adc(cpu, operand ^ 0xFF, opcode)
}

/// `CMP`/`CPX`/`CPY(reg, operand)`: sets C/Z/N from `reg - operand`;
/// never writes a register.
#[inline]
pub(crate) fn compare(cpu: &mut Cpu, reg: u8, operand: u8) {
    let diff = reg.wrapping_sub(operand);
    cpu.assign_flag(CARRY, reg >= operand);
    cpu.assign_flag(ZERO, reg == operand);
    cpu.assign_flag(NEGATIVE, diff & 0x80 != 0);
}

/// `BIT(operand)`: Z from `A & operand`, N/V from bits 7/6 of the operand
/// directly (not the AND result). A is unchanged.
#[inline]
pub(crate) fn bit(cpu: &mut Cpu, operand: u8) {
    cpu.assign_flag(ZERO, cpu.a() & operand == 0);
    cpu.assign_flag(NEGATIVE, operand & 0x80 != 0);
    cpu.assign_flag(OVERFLOW, operand & 0x40 != 0);
}

/// `ASL(v)`: C = bit7(v); shifted value with N/Z left to the caller.
#[inline]
pub(crate) fn asl(v: u8) -> (u8, bool) {
    (v << 1, v & 0x80 != 0)
}

/// `LSR(v)`: C = bit0(v).
#[inline]
pub(crate) fn lsr(v: u8) -> (u8, bool) {
    (v >> 1, v & 0x01 != 0)
}

/// `ROL(v)`: rotate left through carry.
#[inline]
pub(crate) fn rol(v: u8, carry_in: bool) -> (u8, bool) {
    let result = (v << 1) | (carry_in as u8);
    (result, v & 0x80 != 0)
}

/// `ROR(v)`: rotate right through carry.
#[inline]
pub(crate) fn ror(v: u8, carry_in: bool) -> (u8, bool) {
    let result = (v >> 1) | ((carry_in as u8) << 7);
    (result, v & 0x01 != 0)
}
