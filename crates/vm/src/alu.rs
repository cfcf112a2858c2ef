//! Arithmetic-logic unit.
//!
//! ALU-class opcodes carry a function code in their low nibble, following
//! the LS-8 ALU table (`ADD` = 0, `SUB` = 1, `MUL` = 2, ...). Only the
//! functions in [`AluOp`] are implemented; anything else faults.

use crate::error::Fault;

/// Operations the ALU implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
}

impl AluOp {
    /// The function code for this operation.
    pub fn code(self) -> u8 {
        match self {
            AluOp::Add => 0b0000,
            AluOp::Mul => 0b0010,
        }
    }
}

impl TryFrom<u8> for AluOp {
    type Error = Fault;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0b0000 => Ok(AluOp::Add),
            0b0010 => Ok(AluOp::Mul),
            other => Err(Fault::UnsupportedOperation { code: other }),
        }
    }
}

/// Apply `op` to two register values.
///
/// Results wrap at the register width.
pub fn compute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    }
}
