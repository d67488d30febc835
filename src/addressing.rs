//! # Addressing Modes
//!
//! This module defines the addressing modes understood by the execution
//! engine. Each mode determines how the operand bytes that follow an opcode
//! are interpreted and how the effective value or address is formed.

/// Addressing mode enumeration.
///
/// The addressing mode determines how the engine interprets the operand
/// bytes that follow an opcode. New load-class instructions resolve their
/// operands through the same centralized machinery, so adding a mode here is
/// the first step of extending the instruction set.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX
/// - **2 bytes**: Absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into the accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Full 16-bit address, stored little-endian after the opcode.
    ///
    /// Example: JSR $1234 (call the subroutine at 0x1234)
    Absolute,
}

impl AddressingMode {
    /// Returns the number of operand bytes that follow the opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Immediate.operand_size(), 1);
    /// assert_eq!(AddressingMode::Absolute.operand_size(), 2);
    /// ```
    pub fn operand_size(&self) -> u16 {
        match self {
            AddressingMode::Immediate | AddressingMode::ZeroPage | AddressingMode::ZeroPageX => 1,
            AddressingMode::Absolute => 2,
        }
    }
}
