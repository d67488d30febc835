//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the execution
//! engine from specific memory implementations, plus `AddressSpace`, the flat
//! 64KB store used by default. The trait enables flexible configurations
//! including:
//!
//! - Flat 64KB RAM (AddressSpace implementation provided)
//! - Memory-mapped I/O
//! - ROM/RAM splits
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is valid, so there is nothing to range-check
//! - Writes to ROM-like regions may be ignored by implementations
//! - Simple signatures for WASM compatibility

/// Memory bus trait for the engine to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the engine.
/// All memory (RAM, ROM, I/O) is accessed through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism, and a `u16`
///   address cannot fall outside the 64KB range
///
/// # Examples
///
/// ```
/// use micro6502::{AddressSpace, MemoryBus};
///
/// let mut mem = AddressSpace::new();
///
/// // Write a value
/// mem.write(0x1234, 0x42);
///
/// // Read it back
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use micro6502::MemoryBus;
///
/// struct RomRamBus {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamBus {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             // Writes to RAM succeed
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
///
///     fn reset(&mut self) {
///         // RAM returns to power-on contents; ROM keeps its data
///         self.ram = [0; 0x8000];
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching 6502 hardware
    /// behavior).
    ///
    /// # Arguments
    ///
    /// * `addr` - 16-bit memory address (0x0000-0xFFFF)
    ///
    /// # Returns
    ///
    /// The byte value at the specified address
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or
    /// unmapped, implementations may ignore the write (matching 6502
    /// hardware behavior).
    ///
    /// # Arguments
    ///
    /// * `addr` - 16-bit memory address (0x0000-0xFFFF)
    /// * `value` - Byte value to write
    fn write(&mut self, addr: u16, value: u8);

    /// Returns the bus to its power-on contents.
    ///
    /// The engine calls this as part of its own reset so that execution
    /// starts from a known memory state.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, which suits buses whose contents are fixed (ROM) or
    /// managed externally. `AddressSpace` overrides it to zero all 64KB.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, MemoryBus};
    ///
    /// let mut mem = AddressSpace::new();
    /// mem.write(0x1234, 0x42);
    ///
    /// mem.reset();
    /// assert_eq!(mem.read(0x1234), 0x00);
    /// ```
    fn reset(&mut self) {}
}

/// Flat 64KB address space.
///
/// This is a straightforward memory implementation where all 65536 addresses
/// (0x0000-0xFFFF) are mapped to a single contiguous RAM array, so every
/// address the engine can form is backed by a byte.
///
/// Useful for:
/// - Testing and development
/// - Simple programs that don't need ROM/RAM distinction
/// - Fantasy console applications
///
/// # Memory Layout
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use micro6502::{AddressSpace, Cpu, MemoryBus};
///
/// // The engine resets its bus on construction, so load programs through
/// // the engine afterwards
/// let mut cpu = Cpu::new(AddressSpace::new());
///
/// // LDA #$42 at the reset address
/// cpu.memory_mut().write(0xFFFC, 0xA9);
/// cpu.memory_mut().write(0xFFFD, 0x42);
///
/// let faults = cpu.execute(2);
/// assert!(faults.is_empty());
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct AddressSpace {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl AddressSpace {
    /// Creates a new AddressSpace with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, MemoryBus};
    ///
    /// let mem = AddressSpace::new();
    /// // All memory initially zero
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// The destination address wraps past 0xFFFF, so a block that reaches
    /// the top of the address space continues at 0x0000.
    ///
    /// # Arguments
    ///
    /// * `origin` - Address the first byte lands at
    /// * `bytes` - Program or data bytes to copy
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::{AddressSpace, MemoryBus};
    ///
    /// let mut mem = AddressSpace::new();
    /// mem.load(0x8000, &[0xA9, 0x42]);
    ///
    /// assert_eq!(mem.read(0x8000), 0xA9);
    /// assert_eq!(mem.read(0x8001), 0x42);
    /// ```
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for AddressSpace {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn reset(&mut self) {
        self.data.fill(0);
    }
}
