//! Opcode definitions for the LS-8 instruction set.
//!
//! Every opcode is a full instruction byte laid out as `AABCDDDD`:
//!
//! ```text
//! AA   operand count (0-2)
//! B    1 if the instruction is an ALU operation
//! C    1 if the instruction sets the program counter itself
//! DDDD instruction identifier
//! ```
//!
//! Identity is always the whole byte. The fields overlap between opcodes,
//! so masking off the low nibble is not enough to tell two instructions
//! apart.

use crate::error::DecodeError;

/// Identifies the operation to perform.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Register loads and output
    /// Load an immediate value into a register. `LDI reg, value`
    Ldi = 0b1000_0010,
    /// Print the decimal value of a register to the output sink.
    Prn = 0b0100_0111,

    // ALU
    /// `regA = regA + regB`, wrapping.
    Add = 0b1010_0000,
    /// `regA = regA * regB`, wrapping.
    Mul = 0b1010_0010,
    /// Compare two registers and set exactly one of the L/G/E flags.
    Cmp = 0b1010_0111,

    // Stack
    /// Decrement R7, then store the register at `memory[R7]`.
    Push = 0b0100_0101,
    /// Load `memory[R7]` into the register, then increment R7.
    Pop = 0b0100_0110,

    // Control flow
    /// Jump to the address held in a register.
    Jmp = 0b0101_0100,
    /// Jump if the E flag is set.
    Jeq = 0b0101_0101,
    /// Jump if the E flag is clear.
    Jne = 0b0101_0110,
    /// Push the return address and jump to the address held in a register.
    Call = 0b0101_0000,
    /// Pop the return address into the program counter.
    Ret = 0b0001_0001,

    // Machine control
    /// Stop the CPU.
    Hlt = 0b0000_0001,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 13] = [
    Opcode::Ldi,
    Opcode::Prn,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Cmp,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
    Opcode::Call,
    Opcode::Ret,
    Opcode::Hlt,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b1000_0010 => Ok(Opcode::Ldi),
            0b0100_0111 => Ok(Opcode::Prn),

            0b1010_0000 => Ok(Opcode::Add),
            0b1010_0010 => Ok(Opcode::Mul),
            0b1010_0111 => Ok(Opcode::Cmp),

            0b0100_0101 => Ok(Opcode::Push),
            0b0100_0110 => Ok(Opcode::Pop),

            0b0101_0100 => Ok(Opcode::Jmp),
            0b0101_0101 => Ok(Opcode::Jeq),
            0b0101_0110 => Ok(Opcode::Jne),
            0b0101_0000 => Ok(Opcode::Call),
            0b0001_0001 => Ok(Opcode::Ret),

            0b0000_0001 => Ok(Opcode::Hlt),

            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Hlt => "HLT",
        }
    }

    /// Look up an opcode by its (uppercase) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Number of operand bytes that follow this opcode.
    pub fn operand_count(self) -> usize {
        (self as u8 >> 6) as usize
    }

    /// Whether the instruction assigns the program counter itself.
    pub fn sets_pc(self) -> bool {
        (self as u8 >> 4) & 1 == 1
    }
}
