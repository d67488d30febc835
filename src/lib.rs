//! # 6502 Budgeted Execution Core
//!
//! A minimal MOS 6502 fetch-decode-execute engine designed for modularity,
//! clarity, and WebAssembly portability.
//!
//! This crate provides a flat 64KB address space behind a trait-based memory
//! bus abstraction and a CPU that runs against a signed cycle budget: every
//! memory touch goes through a small set of cycle-costed primitives, and the
//! execution loop stops once the budget is spent. Unknown opcodes are
//! reported as diagnostics rather than halting the machine.
//!
//! ## Quick Start
//!
//! ```rust
//! use micro6502::{AddressSpace, Cpu};
//!
//! // Construction resets everything, so load the program afterwards
//! let mut cpu = Cpu::new(AddressSpace::new());
//! cpu.memory_mut().load(0xFFFC, &[0xA9, 0x42]); // LDA #$42
//!
//! // Run with a budget of 2 cycles, exactly what LDA immediate costs
//! let faults = cpu.execute(2);
//!
//! assert!(faults.is_empty());
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0xFFFE);
//! assert_eq!(cpu.cycles_remaining(), 0);
//! ```
//!
//! ## Architecture
//!
//! The engine follows a modular architecture adhering to these principles:
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **Budgeted Execution**: A signed cycle counter drives the run loop and records overshoot
//! - **Clarity & Hackability**: Adding an instruction is one enum variant, one decode arm, and one handler
//!
//! ## Modules
//!
//! - `cpu` - CPU state, cycle-costed primitives, and the execution loop
//! - `memory` - MemoryBus trait and the flat AddressSpace
//! - `opcodes` - Opcode constants and instruction decoding
//! - `addressing` - Addressing mode enumerations

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, RESET_VECTOR, STACK_BASE};
pub use memory::{AddressSpace, MemoryBus};
pub use opcodes::Instruction;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte did not decode to an implemented instruction.
    ///
    /// This is a diagnostic, not a halt: by the time it is reported the
    /// fetch has cost its cycle and PC has moved past the offending byte,
    /// so execution can continue with the next one.
    UnknownOpcode {
        /// The byte that failed to decode.
        opcode: u8,

        /// The address the byte was fetched from.
        addr: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, addr } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, addr)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
