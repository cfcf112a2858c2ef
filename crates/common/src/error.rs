//! Decode errors for LS-8 instruction bytes.

use thiserror::Error;

/// Errors that occur while classifying an instruction byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte is not one of the opcodes in the instruction set.
    #[error("unknown opcode: {0:#010b}")]
    UnknownOpcode(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_opcode() {
        assert_eq!(
            DecodeError::UnknownOpcode(0b1000_0011).to_string(),
            "unknown opcode: 0b10000011"
        );
    }

    #[test]
    fn display_pads_small_bytes() {
        assert_eq!(
            DecodeError::UnknownOpcode(0x02).to_string(),
            "unknown opcode: 0b00000010"
        );
    }
}
