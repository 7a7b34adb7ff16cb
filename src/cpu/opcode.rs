/*!
opcode.rs - Opcode -> base cycle count table (the complete documented
6502 instruction set, per the external opcode table).

`base_cycles` is the single source of truth for how many cycles an
instruction costs before any dynamic page-cross/branch-taken penalty is
added by the dispatcher. Any byte not present here is not a documented
opcode: `None` is the fatal-fault signal, replacing the teacher's
`cpu/cycles.rs` convention of silently defaulting unknown bytes to 2
cycles (which this crate's error taxonomy explicitly forbids).

Where a mode's cost varies with a condition not knowable until dispatch
time (absolute,X/Y read variants, indirect,Y read, and branches), the
value here is the *baseline*; the dispatcher adds the conditional extra.
Store-indexed and RMW-indexed addressing pay their fix-up cycle
unconditionally, so it is already folded into the number below.
*/

pub(crate) fn base_cycles(op: u8) -> Option<u8> {
    Some(match op {
        // LDA
        0xA9 => 2, 0xA5 => 3, 0xB5 => 4, 0xAD => 4, 0xBD => 4, 0xB9 => 4, 0xA1 => 6, 0xB1 => 5,
        // LDX
        0xA2 => 2, 0xA6 => 3, 0xB6 => 4, 0xAE => 4, 0xBE => 4,
        // LDY
        0xA0 => 2, 0xA4 => 3, 0xB4 => 4, 0xAC => 4, 0xBC => 4,
        // STA
        0x85 => 3, 0x95 => 4, 0x8D => 4, 0x9D => 5, 0x99 => 5, 0x81 => 6, 0x91 => 6,
        // STX / STY
        0x86 => 3, 0x96 => 4, 0x8E => 4,
        0x84 => 3, 0x94 => 4, 0x8C => 4,
        // Transfers
        0xAA => 2, 0xA8 => 2, 0x8A => 2, 0x98 => 2, 0xBA => 2, 0x9A => 2,
        // Stack
        0x48 => 3, 0x08 => 3, 0x68 => 4, 0x28 => 4,
        // AND / EOR / ORA
        0x29 => 2, 0x25 => 3, 0x35 => 4, 0x2D => 4, 0x3D => 4, 0x39 => 4, 0x21 => 6, 0x31 => 5,
        0x49 => 2, 0x45 => 3, 0x55 => 4, 0x4D => 4, 0x5D => 4, 0x59 => 4, 0x41 => 6, 0x51 => 5,
        0x09 => 2, 0x05 => 3, 0x15 => 4, 0x0D => 4, 0x1D => 4, 0x19 => 4, 0x01 => 6, 0x11 => 5,
        // BIT
        0x24 => 3, 0x2C => 4,
        // ADC / SBC
        0x69 => 2, 0x65 => 3, 0x75 => 4, 0x6D => 4, 0x7D => 4, 0x79 => 4, 0x61 => 6, 0x71 => 5,
        0xE9 => 2, 0xE5 => 3, 0xF5 => 4, 0xED => 4, 0xFD => 4, 0xF9 => 4, 0xE1 => 6, 0xF1 => 5,
        // CMP / CPX / CPY
        0xC9 => 2, 0xC5 => 3, 0xD5 => 4, 0xCD => 4, 0xDD => 4, 0xD9 => 4, 0xC1 => 6, 0xD1 => 5,
        0xE0 => 2, 0xE4 => 3, 0xEC => 4,
        0xC0 => 2, 0xC4 => 3, 0xCC => 4,
        // INX/INY/DEX/DEY
        0xE8 => 2, 0xC8 => 2, 0xCA => 2, 0x88 => 2,
        // INC / DEC (memory)
        0xE6 => 5, 0xF6 => 6, 0xEE => 6, 0xFE => 7,
        0xC6 => 5, 0xD6 => 6, 0xCE => 6, 0xDE => 7,
        // ASL / LSR / ROL / ROR
        0x0A => 2, 0x06 => 5, 0x16 => 6, 0x0E => 6, 0x1E => 7,
        0x4A => 2, 0x46 => 5, 0x56 => 6, 0x4E => 6, 0x5E => 7,
        0x2A => 2, 0x26 => 5, 0x36 => 6, 0x2E => 6, 0x3E => 7,
        0x6A => 2, 0x66 => 5, 0x76 => 6, 0x6E => 6, 0x7E => 7,
        // Branches (baseline; dispatcher adds taken/page-cross penalty)
        0x10 | 0x30 | 0x50 | 0x70 | 0x90 | 0xB0 | 0xD0 | 0xF0 => 2,
        // Flag sets
        0x18 => 2, 0x38 => 2, 0x58 => 2, 0x78 => 2, 0xB8 => 2, 0xD8 => 2, 0xF8 => 2,
        // Jumps / calls
        0x4C => 3, 0x6C => 5, 0x20 => 6, 0x60 => 6,
        // System
        0x00 => 7, 0x40 => 6, 0xEA => 2,
        _ => return None,
    })
}
