//! Instruction-byte decoding.
//!
//! An instruction is not stored anywhere; it is the transient reading of
//! the byte under the program counter:
//! ```text
//! bits 7-6: operand count
//! bit  5:   ALU operation
//! bit  4:   sets the program counter itself
//! bits 3-0: instruction identifier (ALU function code for ALU ops)
//! ```

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// The decoded view of one instruction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The raw instruction byte.
    pub byte: u8,
    /// How many operand bytes follow (0-3; the instruction set uses 0-2).
    pub operand_count: usize,
    /// True if the handler assigns the program counter itself.
    pub sets_pc: bool,
    /// True if the instruction is routed through the ALU.
    pub is_alu: bool,
}

impl Instruction {
    /// Decode a raw instruction byte.
    ///
    /// Decoding never fails: every byte has an operand count and flag bits,
    /// whether or not it names a known opcode.
    pub fn decode(byte: u8) -> Self {
        Self {
            byte,
            operand_count: (byte >> 6) as usize,
            sets_pc: (byte >> 4) & 1 == 1,
            is_alu: (byte >> 5) & 1 == 1,
        }
    }

    /// Total instruction length in bytes (opcode plus operands).
    pub fn size(&self) -> usize {
        self.operand_count + 1
    }

    /// The ALU function code carried in the low nibble.
    pub fn alu_code(&self) -> u8 {
        self.byte & 0x0F
    }

    /// Resolve the full byte to a known opcode.
    pub fn opcode(&self) -> Result<Opcode, DecodeError> {
        Opcode::try_from(self.byte)
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Self {
        Instruction::decode(opcode as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ALL_OPCODES;

    #[test]
    fn decode_ldi() {
        let instr = Instruction::decode(0b1000_0010);
        assert_eq!(instr.operand_count, 2);
        assert!(!instr.sets_pc);
        assert!(!instr.is_alu);
        assert_eq!(instr.size(), 3);
        assert_eq!(instr.opcode(), Ok(Opcode::Ldi));
    }

    #[test]
    fn decode_mul_is_alu() {
        let instr = Instruction::decode(0b1010_0010);
        assert!(instr.is_alu);
        assert_eq!(instr.alu_code(), 0b0010);
        assert_eq!(instr.opcode(), Ok(Opcode::Mul));
    }

    #[test]
    fn decode_jmp_sets_pc() {
        let instr = Instruction::decode(0b0101_0100);
        assert_eq!(instr.operand_count, 1);
        assert!(instr.sets_pc);
        assert!(!instr.is_alu);
    }

    #[test]
    fn decode_hlt_has_no_operands() {
        let instr = Instruction::decode(0b0000_0001);
        assert_eq!(instr.operand_count, 0);
        assert_eq!(instr.size(), 1);
    }

    #[test]
    fn unknown_byte_still_has_a_size() {
        let instr = Instruction::decode(0b1100_0000);
        assert_eq!(instr.operand_count, 3);
        assert_eq!(instr.size(), 4);
        assert_eq!(
            instr.opcode(),
            Err(DecodeError::UnknownOpcode(0b1100_0000))
        );
    }

    #[test]
    fn decode_agrees_with_opcode_helpers() {
        for &opcode in &ALL_OPCODES {
            let instr = Instruction::from(opcode);
            assert_eq!(instr.operand_count, opcode.operand_count(), "{opcode:?}");
            assert_eq!(instr.sets_pc, opcode.sets_pc(), "{opcode:?}");
        }
    }
}
