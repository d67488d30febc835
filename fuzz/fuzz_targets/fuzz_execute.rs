//! Fuzz target for budgeted execution.
//!
//! This target creates arbitrary CPU states, program bytes, and cycle
//! budgets, then runs the execution loop to find panics and
//! termination bugs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use micro6502::{AddressSpace, Cpu, MemoryBus};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Accumulator register
    a: u8,
    /// X index register
    x: u8,
    /// Y index register
    y: u8,
    /// Stack pointer (full address, not constrained to the stack page)
    sp: u16,
    /// Program counter
    pc: u16,
    /// Carry flag
    flag_c: bool,
    /// Zero flag
    flag_z: bool,
    /// Interrupt disable flag
    flag_i: bool,
    /// Decimal mode flag
    flag_d: bool,
    /// Break flag
    flag_b: bool,
    /// Overflow flag
    flag_v: bool,
    /// Negative flag
    flag_n: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Program bytes placed at the fuzzed PC
    program: [u8; 64],
    /// Cycle budget for the run (unsigned so every run terminates)
    budget: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Create CPU over zeroed memory
    let mut cpu = Cpu::new(AddressSpace::new());

    // Write program bytes at the fuzzed PC (wrapping past 0xFFFF)
    cpu.memory_mut().load(input.cpu_state.pc, &input.program);

    // Set CPU state from fuzz input
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_flag_c(input.cpu_state.flag_c);
    cpu.set_flag_z(input.cpu_state.flag_z);
    cpu.set_flag_i(input.cpu_state.flag_i);
    cpu.set_flag_d(input.cpu_state.flag_d);
    cpu.set_flag_b(input.cpu_state.flag_b);
    cpu.set_flag_v(input.cpu_state.flag_v);
    cpu.set_flag_n(input.cpu_state.flag_n);

    // Run the budget down
    // We don't care about faults (unknown opcodes) - just no panics
    let faults = cpu.execute(input.budget as i32);

    // Sanity checks after execution (these should never fail)
    // If they do, we found a bug
    if input.budget > 0 {
        // The loop stops once the budget is spent, overdrawn by at
        // most one instruction's worth of cycles
        assert!(cpu.cycles_remaining() <= 0);
        assert!(cpu.cycles_remaining() > -6);
    } else {
        assert_eq!(cpu.cycles_remaining(), 0);
    }

    // Each fault consumed at least its opcode fetch cycle
    assert!(faults.len() <= input.budget as usize);
});
