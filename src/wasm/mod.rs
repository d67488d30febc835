//! WebAssembly bindings for the micro6502 engine.
//!
//! This module provides JavaScript-callable interfaces to the CPU and its
//! address space, enabling browser-based execution of 6502 machine code.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
