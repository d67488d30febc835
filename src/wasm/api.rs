//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! and memory access.

use crate::{AddressSpace, Cpu, MemoryBus};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: Cpu<AddressSpace>,
    on_fault: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a new emulator instance with a zeroed 64KB address space
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(AddressSpace::new()),
            on_fault: None,
        }
    }

    /// Register a callback invoked with a message for each unknown opcode
    /// encountered during `execute`
    pub fn set_fault_callback(&mut self, callback: js_sys::Function) {
        self.on_fault = Some(callback);
    }

    /// Execute a single instruction, ignoring the cycle budget
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run with a cycle budget and return the diagnostics as strings.
    ///
    /// Unknown opcodes never abort the run; each one is passed to the fault
    /// callback (if registered) and collected into the returned array.
    pub fn execute(&mut self, budget: i32) -> Vec<JsValue> {
        let faults = self.cpu.execute(budget);

        faults
            .iter()
            .map(|fault| {
                let message = fault.to_string();
                if let Some(callback) = &self.on_fault {
                    let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&message));
                }
                JsValue::from_str(&message)
            })
            .collect()
    }

    /// Reset the CPU and zero the address space
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles_remaining(&self) -> i32 {
        self.cpu.cycles_remaining()
    }

    // Flag getters

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Register setters

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory.write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory.read(start + i)).collect()
    }

    /// Load a program into memory and set PC to its first byte
    pub fn load_program(&mut self, program: &[u8], origin: u16) {
        self.cpu.memory_mut().load(origin, program);
        self.cpu.set_pc(origin);
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
