//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): full 16-bit address into the stack page,
//!   growing upward from 0x0100
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: signed count of cycles remaining in the current budget
//!
//! ## Execution Model
//!
//! All memory traffic goes through six cycle-costed primitives (`fetch_byte`,
//! `fetch_word`, `read_byte`, `write_word`, `add_byte`, `sub_word`), each of
//! which decrements the cycle counter as a side effect. `execute()` seeds the
//! counter with a budget and steps instructions while the counter stays
//! positive. The budget is checked only between instructions, so the final
//! instruction always runs to completion and may leave the counter a few
//! cycles negative.

use crate::instructions::{control, load_store};
use crate::{AddressingMode, ExecutionError, Instruction, MemoryBus};

/// Address execution starts from after a reset.
///
/// On reset the program counter is set to this address itself; the word
/// stored there is not dereferenced.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address the stack pointer starts from after a reset.
///
/// The stack grows upward from here as return addresses are pushed.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, and the cycle counter. It is generic over
/// the memory implementation via the `MemoryBus` trait.
///
/// Constructing a CPU performs a full reset, which also resets the memory
/// bus. Load programs through [`Cpu::memory_mut`] after construction.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use micro6502::{AddressSpace, Cpu};
///
/// let mut cpu = Cpu::new(AddressSpace::new());
///
/// // Inspect the reset state
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0x0100);
/// assert_eq!(cpu.cycles_remaining(), 0);
///
/// // Load and run a short program
/// cpu.memory_mut().load(0xFFFC, &[0xA9, 0x42]); // LDA #$42
/// let faults = cpu.execute(2);
///
/// assert!(faults.is_empty());
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (full address in the stack page, grows upward)
    pub(crate) sp: u16,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag (set when BRK instruction executed)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Cycles remaining in the current budget (may go negative)
    pub(crate) cycles: i32,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU is constructed in the reset state via [`Cpu::reset`], which
    /// also resets the bus. For `AddressSpace` that zeroes all 64KB, so any
    /// program must be loaded after construction.
    ///
    /// # Arguments
    ///
    /// * `memory` - A MemoryBus implementation backing all loads and stores
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let cpu = Cpu::new(AddressSpace::new());
    /// assert_eq!(cpu.pc(), 0xFFFC);
    /// assert_eq!(cpu.sp(), 0x0100);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x0000,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU and its memory bus to the power-on state.
    ///
    /// After a reset:
    /// - Program counter (PC) is set to 0xFFFC
    /// - Stack pointer (SP) is set to 0x0100, the bottom of the stack page
    /// - All registers (A, X, Y) are zeroed
    /// - All status flags are cleared
    /// - The cycle counter is set to 0
    /// - The memory bus is reset (for `AddressSpace`, all 64KB is zeroed)
    ///
    /// Unlike hardware, the reset vector is not dereferenced: execution
    /// begins at 0xFFFC itself, not at the address stored there.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let mut cpu = Cpu::new(AddressSpace::new());
    /// cpu.set_a(0x42);
    /// cpu.set_pc(0x8000);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.pc(), 0xFFFC);
    /// ```
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = RESET_VECTOR;
        self.sp = STACK_BASE;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles = 0;
        self.memory.reset();
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC (costs one cycle, advances PC)
    /// 2. Decode it to an instruction
    /// 3. Execute the instruction, charging cycles as it touches memory
    ///
    /// Stepping ignores the cycle budget entirely; the counter simply keeps
    /// decrementing and may go negative. Only [`Cpu::execute`] consults it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the instruction executed
    /// - `Err(ExecutionError::UnknownOpcode)` if the byte did not decode. The
    ///   fetch has already cost one cycle and PC has already advanced past
    ///   the byte, so stepping again resumes at the next byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu, ExecutionError};
    ///
    /// let mut cpu = Cpu::new(AddressSpace::new());
    /// cpu.memory_mut().load(0xFFFC, &[0xA9, 0x42]); // LDA #$42
    ///
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.cycles_remaining(), -2);
    ///
    /// // All of memory is zeroed, and 0x00 is not an implemented opcode
    /// match cpu.step() {
    ///     Err(ExecutionError::UnknownOpcode { opcode, addr }) => {
    ///         assert_eq!(opcode, 0x00);
    ///         assert_eq!(addr, 0xFFFE);
    ///     }
    ///     _ => panic!("expected an unknown opcode"),
    /// }
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let addr = self.pc;
        let opcode = self.fetch_byte();

        let instruction = match Instruction::decode(opcode) {
            Some(instruction) => instruction,
            // The fetch already cost one cycle and PC is past the byte
            None => return Err(ExecutionError::UnknownOpcode { opcode, addr }),
        };

        match instruction {
            Instruction::LdaImmediate | Instruction::LdaZeroPage | Instruction::LdaZeroPageX => {
                load_store::execute_lda(self, instruction.addressing_mode());
            }
            Instruction::Jsr => {
                control::execute_jsr(self);
            }
        }

        Ok(())
    }

    /// Runs instructions until a cycle budget is exhausted.
    ///
    /// The budget replaces whatever remained in the cycle counter, then
    /// instructions execute while the counter is positive. The counter is
    /// consulted only between instructions, so the last instruction always
    /// completes and may overshoot: the counter ends at zero or slightly
    /// negative, and the overshoot is visible through
    /// [`Cpu::cycles_remaining`]. A zero or negative budget executes
    /// nothing.
    ///
    /// Unknown opcodes do not stop execution; each one is collected as a
    /// diagnostic and the loop continues with the following byte.
    ///
    /// # Arguments
    ///
    /// * `budget` - Number of cycles to run for
    ///
    /// # Returns
    ///
    /// All unknown-opcode diagnostics encountered, in the order they were
    /// hit. Empty if every fetched byte decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let mut cpu = Cpu::new(AddressSpace::new());
    /// cpu.memory_mut().load(0xFFFC, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let faults = cpu.execute(2);
    /// assert!(faults.is_empty());
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0xFFFE);
    /// assert_eq!(cpu.cycles_remaining(), 0);
    /// ```
    pub fn execute(&mut self, budget: i32) -> Vec<ExecutionError> {
        self.cycles = budget;
        let mut faults = Vec::new();

        while self.cycles > 0 {
            if let Err(fault) = self.step() {
                faults.push(fault);
            }
        }

        faults
    }

    // ========== Cycle-Costed Primitives ==========

    /// Fetches the byte at PC, advancing PC by one.
    ///
    /// Costs 1 cycle. PC wraps at the top of memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu, MemoryBus};
    ///
    /// let mut cpu = Cpu::new(AddressSpace::new());
    /// cpu.memory_mut().write(0xFFFC, 0x42);
    ///
    /// assert_eq!(cpu.fetch_byte(), 0x42);
    /// assert_eq!(cpu.pc(), 0xFFFD);
    /// assert_eq!(cpu.cycles_remaining(), -1);
    /// ```
    pub fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.cycles -= 1;
        value
    }

    /// Fetches the 16-bit word at PC (little-endian), advancing PC by two.
    ///
    /// Costs 2 cycles. The two bytes are fetched independently, so a word
    /// starting at 0xFFFF takes its high byte from 0x0000.
    pub fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    /// Reads the byte at an arbitrary address, leaving PC alone.
    ///
    /// Costs 1 cycle.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.cycles -= 1;
        self.memory.read(addr)
    }

    /// Writes a 16-bit word (little-endian) at an arbitrary address.
    ///
    /// Costs 2 cycles. The low byte lands at `addr` and the high byte at
    /// `addr + 1`, wrapping at the top of memory.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write(addr, (value & 0xFF) as u8);
        self.memory.write(addr.wrapping_add(1), (value >> 8) as u8);
        self.cycles -= 2;
    }

    /// Adds two bytes with wraparound.
    ///
    /// Costs 1 cycle. This is address arithmetic, not ADC: the carry flag
    /// is not consulted and not touched, and the sum wraps modulo 256.
    pub fn add_byte(&mut self, value: u8, offset: u8) -> u8 {
        self.cycles -= 1;
        value.wrapping_add(offset)
    }

    /// Subtracts one 16-bit word from another with wraparound.
    ///
    /// Costs 1 cycle. No flags are touched; the difference wraps modulo
    /// 65536.
    pub fn sub_word(&mut self, value: u16, amount: u16) -> u16 {
        self.cycles -= 1;
        value.wrapping_sub(amount)
    }

    // ========== Instruction Support ==========

    /// Resolves an operand through the given addressing mode and reads it.
    ///
    /// Charges cycles through the primitives as it goes: 1 cycle for an
    /// immediate operand, 2 for zero page, 3 for zero page indexed by X,
    /// and 3 for absolute. Zero page indexing wraps within the zero page.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(),
            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte();
                self.read_byte(addr as u16)
            }
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                let addr = self.add_byte(base, self.x);
                self.read_byte(addr as u16)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                self.read_byte(addr)
            }
        }
    }

    /// Updates the zero and negative flags from a result value.
    pub(crate) fn set_zn(&mut self, value: u8) {
        // Zero flag: set if result is 0
        self.flag_z = value == 0;

        // Negative flag: set if bit 7 of result is set
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let cpu = Cpu::new(AddressSpace::new());
    /// assert_eq!(cpu.a(), 0x00); // Initial value
    /// ```
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The stack pointer is a full address. It starts at 0x0100 and
    /// grows upward as return addresses are pushed.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let cpu = Cpu::new(AddressSpace::new());
    ///
    /// // All flags clear after reset; bit 5 always reads 1
    /// assert_eq!(cpu.status(), 0b00100000);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }

    /// Returns the cycles remaining in the current budget.
    ///
    /// Zero before any execution. After [`Cpu::execute`] returns this is
    /// zero when the budget was consumed exactly, or negative by the
    /// overshoot of the final instruction.
    pub fn cycles_remaining(&self) -> i32 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, addr: u16) {
        self.pc = addr;
    }

    /// Sets the stack pointer to a full stack address.
    pub fn set_sp(&mut self, addr: u16) {
        self.sp = addr;
    }

    // ========== Status Flag Setters ==========

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This is the intended way to load a program: construction resets the
    /// bus, so writes must happen afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, Cpu};
    ///
    /// let mut cpu = Cpu::new(AddressSpace::new());
    /// cpu.memory_mut().load(0xFFFC, &[0xA9, 0xFF]); // LDA #$FF
    /// ```
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
