/*!
error.rs - The fatal fault taxonomy.

Only two failure modes exist for this core (everything else wraps or
saturates silently by design): an opcode byte that does not correspond to
a documented instruction, and an attempt to run ADC/SBC with the D flag
set. Both are unrecoverable for the instruction stream that raised them;
`cpu/execute.rs` turns either one into a panic at the `Cpu::execute`
boundary while still letting callers who want a `Result` reach it via
`Cpu::try_execute`/`Cpu::step`.
*/

use thiserror::Error;

/// A fatal fault raised by the core. Execution must not silently proceed
/// past the instruction that raised one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The fetched opcode byte does not correspond to a documented
    /// instruction. Carries the opcode and the PC it was fetched from.
    #[error("unknown opcode {opcode:#04X} at pc {pc:#06X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    /// ADC or SBC was attempted while the D (decimal) flag was set.
    /// Decimal-mode BCD arithmetic is explicitly unsupported.
    #[error("decimal mode is not implemented (opcode {opcode:#04X} at pc {pc:#06X})")]
    DecimalModeNotImplemented { opcode: u8, pc: u16 },
}
