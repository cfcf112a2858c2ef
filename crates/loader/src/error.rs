//! Error types for the LS-8 loader and assembler.

use thiserror::Error;

/// Errors produced while reading `.ls8` binary text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A line that is not blank, not a comment, and does not start with
    /// eight binary digits. Only raised under [`Policy::Strict`](crate::Policy).
    #[error("line {line}: malformed program line '{text}'")]
    MalformedLine { line: usize, text: String },
}

/// Errors produced during assembly of mnemonic text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized mnemonic was encountered.
    #[error("line {line}: unknown mnemonic '{token}'")]
    UnknownMnemonic { line: usize, token: String },

    /// An instruction did not have enough operands.
    #[error("line {line}: {mnemonic} expects {expected} operand(s)")]
    MissingOperand {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
    },

    /// A register operand was required but something else was given.
    #[error("line {line}: expected register R0-R7, found '{token}'")]
    ExpectedRegister { line: usize, token: String },

    /// A numeric literal could not be parsed or does not fit in a byte.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    /// A label was used but never defined.
    #[error("line {line}: undefined label '{label}'")]
    UndefinedLabel { line: usize, label: String },

    /// A label was defined twice.
    #[error("line {line}: duplicate label '{label}'")]
    DuplicateLabel { line: usize, label: String },

    /// A label's address does not fit in a byte.
    #[error("line {line}: label '{label}' at address {address} is out of range")]
    LabelOutOfRange {
        line: usize,
        label: String,
        address: usize,
    },
}
