//! Disassembler: byte image → canonical assembly text.
//!
//! Output is one instruction per line, operands comma-separated with no
//! spaces (`LDI R0,8`). Any byte that cannot be shown as a well-formed
//! instruction (unknown opcode, register operand above R7, truncated
//! operands) is emitted as `DB 0bXXXXXXXX`, so the text always reassembles
//! to the same bytes.

use ls8_common::{Opcode, Program};

/// One decoded entry of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    /// Offset of the first byte within the image.
    pub offset: usize,
    /// Number of bytes covered.
    pub len: usize,
    pub text: String,
}

fn format_instruction(opcode: Opcode, operands: &[u8]) -> Option<String> {
    let mut parts = Vec::with_capacity(operands.len());
    for (i, &operand) in operands.iter().enumerate() {
        match (opcode, i) {
            (Opcode::Ldi, 1) => parts.push(operand.to_string()),
            _ if operand < 8 => parts.push(format!("R{operand}")),
            _ => return None,
        }
    }
    if parts.is_empty() {
        Some(opcode.mnemonic().to_string())
    } else {
        Some(format!("{} {}", opcode.mnemonic(), parts.join(",")))
    }
}

/// Walk the image, one instruction (or raw byte) at a time.
pub(crate) fn entries(bytes: &[u8]) -> Vec<Entry> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let byte = bytes[offset];
        let decoded = Opcode::try_from(byte).ok().and_then(|opcode| {
            let end = offset + 1 + opcode.operand_count();
            let operands = bytes.get(offset + 1..end)?;
            format_instruction(opcode, operands).map(|text| (text, end - offset))
        });

        let (text, len) = decoded.unwrap_or_else(|| (format!("DB {byte:#010b}"), 1));
        out.push(Entry { offset, len, text });
        offset += len;
    }

    out
}

/// Disassemble an image into canonical assembly text.
pub fn disassemble(program: &Program) -> String {
    let mut text = String::new();
    for entry in entries(program.as_bytes()) {
        text.push_str(&entry.text);
        text.push('\n');
    }
    text
}

/// Render an image as `.ls8` binary text, with the disassembly of each
/// instruction as a comment on its first byte.
pub fn annotate(program: &Program) -> String {
    let bytes = program.as_bytes();
    let mut text = String::new();
    for entry in entries(bytes) {
        for (i, byte) in bytes[entry.offset..entry.offset + entry.len].iter().enumerate() {
            if i == 0 {
                text.push_str(&format!("{byte:08b} # {}\n", entry.text));
            } else {
                text.push_str(&format!("{byte:08b}\n"));
            }
        }
    }
    text
}
