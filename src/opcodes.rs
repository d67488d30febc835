//! # Opcode Decode
//!
//! This module contains the opcode byte constants and the `Instruction` enum
//! that maps fetched bytes to the operations the engine implements.
//!
//! The enum is the single source of truth for decoding: adding an
//! instruction means adding a variant, one `decode` arm, and a handler in
//! the instructions module. Opcodes outside the implemented set decode to
//! `None` and surface as non-fatal diagnostics at execution time.

use crate::addressing::AddressingMode;

/// LDA with an immediate operand (2 cycles).
pub const LDA_IMMEDIATE: u8 = 0xA9;

/// LDA from a zero page address (3 cycles).
pub const LDA_ZERO_PAGE: u8 = 0xA5;

/// LDA from a zero page address indexed by X (4 cycles).
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;

/// JSR to an absolute address (6 cycles).
pub const JSR_ABSOLUTE: u8 = 0x20;

/// An instruction the engine knows how to execute.
///
/// Each variant pairs a mnemonic with one addressing mode, mirroring how
/// opcode bytes work on the 6502: LDA immediate and LDA zero page are
/// distinct bytes and distinct variants.
///
/// # Examples
///
/// ```
/// use micro6502::{AddressingMode, Instruction};
///
/// let instruction = Instruction::decode(0xA9).unwrap();
/// assert_eq!(instruction.mnemonic(), "LDA");
/// assert_eq!(instruction.addressing_mode(), AddressingMode::Immediate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load accumulator with an immediate operand.
    LdaImmediate,

    /// Load accumulator from a zero page address.
    LdaZeroPage,

    /// Load accumulator from a zero page address indexed by X.
    LdaZeroPageX,

    /// Jump to subroutine at an absolute address.
    Jsr,
}

impl Instruction {
    /// Decodes an opcode byte.
    ///
    /// Returns `None` for bytes the engine does not implement; the engine
    /// reports those as unknown-opcode diagnostics rather than halting.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro6502::Instruction;
    ///
    /// assert_eq!(Instruction::decode(0xA9), Some(Instruction::LdaImmediate));
    /// assert_eq!(Instruction::decode(0xEA), None);
    /// ```
    pub fn decode(opcode: u8) -> Option<Instruction> {
        match opcode {
            LDA_IMMEDIATE => Some(Instruction::LdaImmediate),
            LDA_ZERO_PAGE => Some(Instruction::LdaZeroPage),
            LDA_ZERO_PAGE_X => Some(Instruction::LdaZeroPageX),
            JSR_ABSOLUTE => Some(Instruction::Jsr),
            _ => None,
        }
    }

    /// Returns the opcode byte for this instruction.
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::LdaImmediate => LDA_IMMEDIATE,
            Instruction::LdaZeroPage => LDA_ZERO_PAGE,
            Instruction::LdaZeroPageX => LDA_ZERO_PAGE_X,
            Instruction::Jsr => JSR_ABSOLUTE,
        }
    }

    /// Three-letter instruction name (e.g. "LDA").
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::LdaImmediate | Instruction::LdaZeroPage | Instruction::LdaZeroPageX => {
                "LDA"
            }
            Instruction::Jsr => "JSR",
        }
    }

    /// How this instruction interprets its operand bytes.
    pub fn addressing_mode(&self) -> AddressingMode {
        match self {
            Instruction::LdaImmediate => AddressingMode::Immediate,
            Instruction::LdaZeroPage => AddressingMode::ZeroPage,
            Instruction::LdaZeroPageX => AddressingMode::ZeroPageX,
            Instruction::Jsr => AddressingMode::Absolute,
        }
    }
}
