//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of the instructions the engine
//! supports, organized by category. Each instruction is implemented as a
//! standalone function that takes a mutable reference to the CPU; all cycle
//! accounting happens inside the CPU primitives the handlers call.
//!
//! ## Categories
//!
//! - **load_store**: Load instructions (LDA)
//! - **control**: Control flow instructions (JSR)

pub mod control;
pub mod load_store;
