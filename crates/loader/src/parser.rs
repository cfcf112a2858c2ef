//! Parser for LS-8 assembly tokens → statements, and statement encoding.
//!
//! Operand shapes follow the opcode's operand-count bits. `LDI` takes a
//! register and an immediate (number or label); every other operand is a
//! register. `DB` emits raw bytes.

use std::collections::HashMap;

use ls8_common::Opcode;

use crate::error::AsmError;
use crate::lexer::Token;

/// An operand as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Operand {
    Register(u8),
    Immediate(u8),
    /// A label reference, resolved to its address during encoding.
    Label(String),
}

/// One assembled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement {
    Instr {
        opcode: Opcode,
        operands: Vec<Operand>,
        line: usize,
    },
    /// `DB v1 v2 ...`
    Data { values: Vec<Operand>, line: usize },
}

impl Statement {
    /// Number of bytes this statement occupies in the image.
    pub(crate) fn size(&self) -> usize {
        match self {
            Statement::Instr { operands, .. } => 1 + operands.len(),
            Statement::Data { values, .. } => values.len(),
        }
    }

    /// Append the encoded bytes to `out`, resolving labels.
    pub(crate) fn encode(
        &self,
        labels: &HashMap<String, usize>,
        out: &mut Vec<u8>,
    ) -> Result<(), AsmError> {
        match self {
            Statement::Instr {
                opcode,
                operands,
                line,
            } => {
                out.push(*opcode as u8);
                for operand in operands {
                    out.push(resolve(operand, labels, *line)?);
                }
            }
            Statement::Data { values, line } => {
                for value in values {
                    out.push(resolve(value, labels, *line)?);
                }
            }
        }
        Ok(())
    }
}

fn resolve(
    operand: &Operand,
    labels: &HashMap<String, usize>,
    line: usize,
) -> Result<u8, AsmError> {
    match operand {
        Operand::Register(r) => Ok(*r),
        Operand::Immediate(v) => Ok(*v),
        Operand::Label(name) => {
            let address = *labels.get(name).ok_or_else(|| AsmError::UndefinedLabel {
                line,
                label: name.clone(),
            })?;
            u8::try_from(address).map_err(|_| AsmError::LabelOutOfRange {
                line,
                label: name.clone(),
                address,
            })
        }
    }
}

fn token_text(token: &Token) -> String {
    match token {
        Token::Ident(s) => s.clone(),
        Token::Number(n) => n.to_string(),
        Token::Label(s) => format!("{s}:"),
    }
}

fn parse_register(token: &Token, line: usize) -> Result<Operand, AsmError> {
    if let Token::Ident(name) = token {
        if let Some(index) = name.strip_prefix('R').and_then(|n| n.parse::<u8>().ok()) {
            if index < 8 {
                return Ok(Operand::Register(index));
            }
        }
    }
    Err(AsmError::ExpectedRegister {
        line,
        token: token_text(token),
    })
}

fn parse_immediate(token: &Token, line: usize) -> Result<Operand, AsmError> {
    match token {
        Token::Number(n) => u8::try_from(*n)
            .map(Operand::Immediate)
            .map_err(|_| AsmError::InvalidNumber {
                line,
                token: n.to_string(),
            }),
        Token::Ident(name) => Ok(Operand::Label(name.clone())),
        Token::Label(_) => Err(AsmError::UnexpectedToken {
            line,
            token: token_text(token),
        }),
    }
}

/// Parse a line's tokens (label definitions already removed) into a
/// statement.
///
/// Returns `Ok(None)` for an empty token list.
pub(crate) fn parse_statement(
    tokens: &[Token],
    line: usize,
) -> Result<Option<Statement>, AsmError> {
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let mnemonic = match first {
        Token::Ident(s) => s.as_str(),
        other => {
            return Err(AsmError::UnexpectedToken {
                line,
                token: token_text(other),
            })
        }
    };
    let args = &tokens[1..];

    if mnemonic == "DB" {
        if args.is_empty() {
            return Err(AsmError::MissingOperand {
                line,
                mnemonic: "DB",
                expected: 1,
            });
        }
        let values = args
            .iter()
            .map(|t| parse_immediate(t, line))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Some(Statement::Data { values, line }));
    }

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        line,
        token: mnemonic.to_string(),
    })?;

    let expected = opcode.operand_count();
    if args.len() < expected {
        return Err(AsmError::MissingOperand {
            line,
            mnemonic: opcode.mnemonic(),
            expected,
        });
    }
    if let Some(extra) = args.get(expected) {
        return Err(AsmError::UnexpectedToken {
            line,
            token: token_text(extra),
        });
    }

    let operands = args
        .iter()
        .enumerate()
        .map(|(i, t)| match (opcode, i) {
            (Opcode::Ldi, 1) => parse_immediate(t, line),
            _ => parse_register(t, line),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Statement::Instr {
        opcode,
        operands,
        line,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize_line;

    fn parse(text: &str) -> Result<Option<Statement>, AsmError> {
        let tokens = tokenize_line(text, 1)?;
        parse_statement(&tokens, 1)
    }

    #[test]
    fn empty_tokens() {
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn ldi_register_and_immediate() {
        assert_eq!(
            parse("LDI R0,8").unwrap(),
            Some(Statement::Instr {
                opcode: Opcode::Ldi,
                operands: vec![Operand::Register(0), Operand::Immediate(8)],
                line: 1,
            })
        );
    }

    #[test]
    fn ldi_label_reference() {
        let stmt = parse("LDI R2, loop").unwrap().unwrap();
        assert_eq!(
            stmt,
            Statement::Instr {
                opcode: Opcode::Ldi,
                operands: vec![Operand::Register(2), Operand::Label("LOOP".to_string())],
                line: 1,
            }
        );
        assert_eq!(stmt.size(), 3);
    }

    #[test]
    fn zero_operand_instruction() {
        let stmt = parse("HLT").unwrap().unwrap();
        assert_eq!(stmt.size(), 1);
    }

    #[test]
    fn db_values() {
        let stmt = parse("DB 1, 0x02, 0b11").unwrap().unwrap();
        let mut out = Vec::new();
        stmt.encode(&HashMap::new(), &mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn missing_operand() {
        assert_eq!(
            parse("MUL R0"),
            Err(AsmError::MissingOperand {
                line: 1,
                mnemonic: "MUL",
                expected: 2
            })
        );
    }

    #[test]
    fn extra_operand() {
        assert_eq!(
            parse("PRN R0 R1"),
            Err(AsmError::UnexpectedToken {
                line: 1,
                token: "R1".to_string()
            })
        );
    }

    #[test]
    fn register_out_of_range() {
        assert_eq!(
            parse("PUSH R8"),
            Err(AsmError::ExpectedRegister {
                line: 1,
                token: "R8".to_string()
            })
        );
    }

    #[test]
    fn number_where_register_expected() {
        assert!(matches!(
            parse("PRN 3"),
            Err(AsmError::ExpectedRegister { .. })
        ));
    }

    #[test]
    fn immediate_too_large() {
        assert_eq!(
            parse("LDI R0,256"),
            Err(AsmError::InvalidNumber {
                line: 1,
                token: "256".to_string()
            })
        );
    }

    #[test]
    fn unknown_mnemonic() {
        assert!(matches!(
            parse("NOP"),
            Err(AsmError::UnknownMnemonic { line: 1, .. })
        ));
    }

    #[test]
    fn undefined_label_on_encode() {
        let stmt = parse("LDI R0,END").unwrap().unwrap();
        let err = stmt.encode(&HashMap::new(), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err,
            AsmError::UndefinedLabel {
                line: 1,
                label: "END".to_string()
            }
        );
    }
}
