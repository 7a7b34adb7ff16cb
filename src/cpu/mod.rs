/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout
======
    state.rs      - Core CPU state (registers, flags) + constructors.
    addressing.rs - Addressing mode operand resolution helpers.
    alu.rs        - Pure arithmetic/logical kernels (ADC/SBC/CMP/BIT/shifts).
    opcode.rs      - Documented opcode -> base cycle cost table.
    dispatch/      - One handler module per opcode family, plus the
                     fetch/decode/execute orchestrator.
    execute.rs    - Budgeted execution loop built on `dispatch::step`.

Only `Cpu` (from `state`) is re-exported here; downstream code should
reach the CPU exclusively through it.
*/

pub mod addressing;
pub mod alu;
pub(crate) mod dispatch;
pub mod execute;
pub mod opcode;
pub mod state;

pub use state::Cpu;
