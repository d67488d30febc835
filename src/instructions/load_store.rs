//! # Load Instructions
//!
//! This module implements load operations:
//! - LDA: Load Accumulator

use crate::{AddressingMode, Cpu, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate. The operand is resolved through the given addressing
/// mode, which charges cycles as it touches memory.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Cycle Costs
///
/// Counting the opcode fetch:
/// - Immediate: 2 cycles
/// - Zero page: 3 cycles
/// - Zero page, X: 4 cycles
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode for this LDA variant
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);

    // Load value into accumulator and update flags
    cpu.a = value;
    cpu.set_zn(value);
}
