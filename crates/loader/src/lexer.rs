//! Tokenizer for LS-8 assembly text.

use crate::error::AsmError;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A mnemonic, register name or label reference. Always uppercase.
    Ident(String),
    /// A numeric literal (decimal, `0x` hex or `0b` binary).
    Number(u64),
    /// A label definition (`name:`), without the colon. Always uppercase.
    Label(String),
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` or `#` and extend to end of line. Operands may
/// be separated by whitespace, commas, or both.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    let line = match line.find(|c: char| c == ';' || c == '#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
    {
        let invalid = || AsmError::InvalidNumber {
            line: line_num,
            token: word.to_string(),
        };

        let token = if let Some(hex) = word.strip_prefix("0x").or(word.strip_prefix("0X")) {
            Token::Number(u64::from_str_radix(hex, 16).map_err(|_| invalid())?)
        } else if let Some(bin) = word.strip_prefix("0b").or(word.strip_prefix("0B")) {
            Token::Number(u64::from_str_radix(bin, 2).map_err(|_| invalid())?)
        } else if word.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
            Token::Number(word.parse().map_err(|_| invalid())?)
        } else if let Some(name) = word.strip_suffix(':') {
            Token::Label(name.to_uppercase())
        } else {
            Token::Ident(word.to_uppercase())
        };
        tokens.push(token);
    }

    Ok(tokens)
}
