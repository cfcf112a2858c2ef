//! Runtime errors for the LS-8 CPU.
//!
//! Components (memory, register file, ALU) report a bare [`Fault`]. The
//! execution engine attaches the program counter and opcode of the cycle
//! that raised it, producing a [`RuntimeError`]. Every fault is fatal.

use thiserror::Error;

/// A fault raised by one of the CPU components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Memory address outside `[0, capacity)`.
    #[error("memory address {address:#04x} out of bounds (capacity {capacity})")]
    OutOfBounds { address: usize, capacity: usize },

    /// Register index outside `[0, 8)`.
    #[error("invalid register index {index}")]
    InvalidRegister { index: usize },

    /// The ALU was asked for a function it does not implement.
    #[error("unsupported ALU operation {code:#06b}")]
    UnsupportedOperation { code: u8 },

    /// Unknown opcode under strict decoding.
    #[error("unknown opcode {opcode:#010b}")]
    UnknownOpcode { opcode: u8 },

    /// The output sink rejected a write.
    #[error("output failed: {message}")]
    Output { message: String },
}

/// A fault together with the cycle that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{fault} at pc {pc:#04x}{}", opcode_suffix(.opcode))]
pub struct RuntimeError {
    /// Program counter of the faulting cycle.
    pub pc: usize,
    /// Instruction byte, if it could be fetched.
    pub opcode: Option<u8>,
    /// What went wrong.
    #[source]
    pub fault: Fault,
}

impl RuntimeError {
    pub fn new(pc: usize, opcode: Option<u8>, fault: Fault) -> Self {
        Self { pc, opcode, fault }
    }
}

fn opcode_suffix(opcode: &Option<u8>) -> String {
    match opcode {
        Some(byte) => format!(" (opcode {byte:#010b})"),
        None => String::new(),
    }
}
