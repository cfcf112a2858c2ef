//! Reader for `.ls8` binary text: one byte per line, eight `0`/`1` digits,
//! optional `#` comment.

use ls8_common::Program;

use crate::error::LoadError;

/// How to treat lines that are neither blank, comments, nor bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Log and skip them.
    #[default]
    Permissive,
    /// Reject the whole image.
    Strict,
}

/// What a single line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    /// Blank or comment-only.
    Empty,
    Byte(u8),
    Malformed,
}

/// Classify one line of program text.
///
/// Only the first eight characters after trimming are read; anything
/// between them and the comment is ignored.
pub(crate) fn parse_line(line: &str) -> Line {
    let code = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
    .trim();

    if code.is_empty() {
        return Line::Empty;
    }

    let digits = code.as_bytes();
    if digits.len() < 8 || !digits[..8].iter().all(|d| matches!(d, b'0' | b'1')) {
        return Line::Malformed;
    }

    let byte = digits[..8]
        .iter()
        .fold(0u8, |acc, d| (acc << 1) | (d - b'0'));
    Line::Byte(byte)
}

/// Convert `.ls8` text into a program image.
pub fn load(text: &str, policy: Policy) -> Result<Program, LoadError> {
    let mut bytes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            Line::Empty => {}
            Line::Byte(b) => bytes.push(b),
            Line::Malformed => match policy {
                Policy::Strict => {
                    return Err(LoadError::MalformedLine {
                        line: line_num,
                        text: line.trim().to_string(),
                    });
                }
                Policy::Permissive => {
                    log::warn!(
                        "line {line_num}: skipping malformed program line '{}'",
                        line.trim()
                    );
                }
            },
        }
    }

    log::debug!("loaded {} program bytes", bytes.len());
    Ok(Program::new(bytes))
}
