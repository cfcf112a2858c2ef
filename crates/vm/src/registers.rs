//! General-purpose register file.
//!
//! R7 is the stack pointer by convention only. It has no separate storage
//! and stack instructions read and write it through [`RegisterFile::get`]
//! and [`RegisterFile::set`] like any other register.

use crate::error::Fault;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Index of the register used as the stack pointer.
pub const STACK_POINTER: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Result<u8, Fault> {
        self.regs
            .get(index)
            .copied()
            .ok_or(Fault::InvalidRegister { index })
    }

    pub fn set(&mut self, index: usize, value: u8) -> Result<(), Fault> {
        let reg = self
            .regs
            .get_mut(index)
            .ok_or(Fault::InvalidRegister { index })?;
        *reg = value;
        Ok(())
    }

    /// All register values, R0 first.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}
