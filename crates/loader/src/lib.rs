//! LS-8 program loader, assembler and disassembler.
//!
//! The CPU core only ever sees a byte image. This crate produces one from
//! text:
//!
//! - [`load`] reads `.ls8` binary text (one byte per line, eight binary
//!   digits, `#` comments)
//! - [`assemble`] translates mnemonic assembly (`LDI R0,8`) with labels
//! - [`disassemble`] and [`annotate`] go the other way
//!
//! # Usage
//!
//! ```
//! use ls8_loader::{assemble, disassemble, load, Policy};
//!
//! let text = "10000010 # LDI R0,8\n00000000\n00001000\n00000001 # HLT\n";
//! let program = load(text, Policy::Permissive).unwrap();
//! assert_eq!(disassemble(&program), "LDI R0,8\nHLT\n");
//! assert_eq!(assemble("LDI R0,8\nHLT\n").unwrap(), program);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every image.

pub mod error;

mod binary;
mod disassembler;
mod lexer;
mod parser;

pub use binary::{load, Policy};
pub use disassembler::{annotate, disassemble};
pub use error::{AsmError, LoadError};

use std::collections::HashMap;

use lexer::{tokenize_line, Token};
use ls8_common::Program;
use parser::parse_statement;

/// Assemble mnemonic text into a program image.
///
/// Labels are defined with `name:` at the start of a line and may be used
/// as `LDI` immediates or `DB` values, before or after their definition.
/// Returns the first error encountered.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut statements = Vec::new();
    let mut address = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;

        let mut rest = &tokens[..];
        while let Some(Token::Label(name)) = rest.first() {
            if labels.insert(name.clone(), address).is_some() {
                return Err(AsmError::DuplicateLabel {
                    line: line_num,
                    label: name.clone(),
                });
            }
            rest = &rest[1..];
        }

        if let Some(statement) = parse_statement(rest, line_num)? {
            address += statement.size();
            statements.push(statement);
        }
    }

    let mut bytes = Vec::with_capacity(address);
    for statement in &statements {
        statement.encode(&labels, &mut bytes)?;
    }

    log::debug!("assembled {} bytes, {} labels", bytes.len(), labels.len());
    Ok(Program::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_minimal() {
        let program = assemble("LDI R0,8\nPRN R0\nHLT\n").unwrap();
        assert_eq!(
            program.bytes,
            vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
        );
    }

    #[test]
    fn assemble_with_comments_and_blanks() {
        let text = "\
; print8
LDI R0,8   ; load

# output
PRN R0
HLT
";
        assert_eq!(assemble(text).unwrap().len(), 6);
    }

    #[test]
    fn forward_label_reference() {
        let text = "\
LDI R1,end
JMP R1
PRN R0
end: HLT
";
        let program = assemble(text).unwrap();
        assert_eq!(program.bytes[2], 7);
        assert_eq!(program.bytes[7], 0b0000_0001);
    }

    #[test]
    fn label_on_its_own_line() {
        let text = "LDI R0,1\nloop:\nPRN R0\nLDI R1,loop\nJMP R1\n";
        let program = assemble(text).unwrap();
        assert_eq!(program.bytes[7], 3);
    }

    #[test]
    fn labels_are_case_insensitive() {
        let program = assemble("LDI R0,Target\ntarget: HLT\n").unwrap();
        assert_eq!(program.bytes[2], 3);
    }

    #[test]
    fn duplicate_label() {
        let err = assemble("a: HLT\na: HLT\n").unwrap_err();
        assert_eq!(
            err,
            AsmError::DuplicateLabel {
                line: 2,
                label: "A".to_string()
            }
        );
    }

    #[test]
    fn label_beyond_memory() {
        let mut text = String::from("LDI R0,end\n");
        for _ in 0..300 {
            text.push_str("HLT\n");
        }
        text.push_str("end: HLT\n");
        assert!(matches!(
            assemble(&text),
            Err(AsmError::LabelOutOfRange { line: 1, address: 303, .. })
        ));
    }

    #[test]
    fn error_reports_correct_line() {
        let err = assemble("HLT\nFOOBAR\n").unwrap_err();
        assert!(matches!(err, AsmError::UnknownMnemonic { line: 2, .. }));
    }

    #[test]
    fn roundtrip_disassemble_then_assemble() {
        let original = Program::new(vec![
            0b1000_0010, 0, 9, 0b1000_0010, 1, 10, 0b1010_0010, 0, 1, 0b0100_0111, 0, 0xFF,
            0b0000_0001,
        ]);
        let text = disassemble(&original);
        assert_eq!(assemble(&text).unwrap(), original);
    }

    #[test]
    fn annotated_output_loads_back() {
        let program = assemble("LDI R0,9\nLDI R1,10\nMUL R0,R1\nPRN R0\nHLT\n").unwrap();
        let text = annotate(&program);
        assert_eq!(load(&text, Policy::Strict).unwrap(), program);
    }
}
