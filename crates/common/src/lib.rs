//! LS-8 common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the LS-8
//! instruction set:
//!
//! - [`Opcode`]: the instruction set, one full byte per opcode
//! - [`Instruction`]: the decoded view of an instruction byte
//!   (operand count, ALU bit, sets-PC bit)
//! - [`Program`]: a byte image ready to be loaded into memory
//! - [`DecodeError`]: errors from classifying instruction bytes

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
