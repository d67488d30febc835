//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JSR: Jump to Subroutine
//!
//! JSR transfers control to an absolute address after saving a return
//! address on the stack. The stack lives in the stack page and grows upward
//! from 0x0100, with the stack pointer holding a full address.

use crate::{Cpu, MemoryBus};

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// JSR jumps to an absolute address after recording where to come back to:
/// 1. Fetch the 16-bit target address (little-endian)
/// 2. Compute the return address, the address of the last byte of this
///    instruction (PC - 1 after the operand fetch)
/// 3. Push the return address as a little-endian word at SP, then move SP
///    up by two
/// 4. Set PC to the target address
///
/// Cycle timing: 6 cycles counting the opcode fetch (2 for the operand
/// fetch, 1 for the return address computation, 2 for the stack write).
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let target = cpu.fetch_word();

    // Return address is the last byte of this instruction
    let return_addr = cpu.sub_word(cpu.pc, 1);

    // Push little-endian at SP, then advance SP past the word
    cpu.write_word(cpu.sp, return_addr);
    cpu.sp = cpu.sp.wrapping_add(2);

    cpu.pc = target;
}
