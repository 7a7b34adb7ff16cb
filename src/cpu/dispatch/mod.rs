/*!
dispatch/mod.rs - Orchestrator for a single 6502 instruction step.

Overview
========
Fetches the opcode, looks up its documented base cycle cost, and hands it
to the first opcode-family handler that claims it. Each family handler
receives a running `cycles` accumulator it may add conditional penalties
to (page-crossing reads, taken branches); the base cost is seeded before
any handler runs.

No interrupts, DMA, or table-dispatch fast path: this crate has no
peripherals, no hardware interrupt lines, and no legacy dual-dispatch
story to support. A single family-chain match covers every documented
opcode.

Design Notes
============
- An opcode byte with no entry in `opcode::base_cycles` is a fault
  (`Fault::UnknownOpcode`), raised before any family is consulted.
- A documented opcode that no family claims is a defect in this crate's
  wiring, not a runtime fault a caller should see as a normal error; it
  is treated the same as unknown, since it can only indicate a
  programming mistake in the family tables staying in sync with
  `opcode::base_cycles`.
*/

use crate::cpu::addressing::fetch_u8;
use crate::cpu::opcode::base_cycles;
use crate::cpu::state::Cpu;
use crate::error::Fault;
use crate::memory::Memory;

pub(crate) mod arithmetic;
pub(crate) mod branch;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod shift_rmw;
pub(crate) mod stack_transfer_flags;

/// Fetch, decode, and execute one instruction. Returns the number of
/// cycles it consumed.
pub(crate) fn step(cpu: &mut Cpu, memory: &mut Memory) -> Result<u32, Fault> {
    let start_pc = cpu.pc();
    let opcode = fetch_u8(cpu, memory);

    let base = base_cycles(opcode).ok_or(Fault::UnknownOpcode {
        opcode,
        pc: start_pc,
    })?;
    let mut cycles = base as u32;

    let handled = load_store::handle(opcode, cpu, memory, &mut cycles)?
        || logical::handle(opcode, cpu, memory, &mut cycles)?
        || arithmetic::handle(opcode, cpu, memory, &mut cycles)?
        || compare::handle(opcode, cpu, memory, &mut cycles)?
        || shift_rmw::handle(opcode, cpu, memory, &mut cycles)?
        || branch::handle(opcode, cpu, memory, &mut cycles)?
        || stack_transfer_flags::handle(opcode, cpu, memory, &mut cycles)?
        || control_flow::handle(opcode, cpu, memory, &mut cycles)?;

    if !handled {
        return Err(Fault::UnknownOpcode {
            opcode,
            pc: start_pc,
        });
    }

    log::trace!(
        "retired opcode {:#04X} at pc {:#06X} in {} cycles",
        opcode,
        start_pc,
        cycles
    );
    Ok(cycles)
}
