//! CPU state: memory, registers, flags, program counter, run state.

use std::io::Write;

use crate::error::Fault;
use crate::flags::Flags;
use crate::memory::Memory;
use crate::registers::{RegisterFile, STACK_POINTER};

/// Run configuration for a [`Cpu`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Address the program image is copied to, and where execution starts.
    pub load_address: usize,
    /// Fault on unknown opcodes instead of skipping them.
    pub strict: bool,
    /// Emit a [`Trace`](crate::trace::Trace) line at `trace` log level
    /// before every cycle.
    pub trace: bool,
}

impl Config {
    pub fn with_load_address(mut self, load_address: usize) -> Self {
        self.load_address = load_address;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Execution state. `Halted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// An LS-8 CPU. Owns all of its state, including the `PRN` output sink.
pub struct Cpu<W: Write> {
    pub(crate) config: Config,
    pub(crate) memory: Memory,
    pub(crate) registers: RegisterFile,
    pub(crate) flags: Flags,
    /// Address of the next instruction byte.
    pub(crate) pc: usize,
    pub(crate) state: State,
    pub(crate) output: W,
}

impl<W: Write> Cpu<W> {
    /// Create a CPU with zeroed memory and registers. The program counter
    /// starts at the configured load address.
    pub fn new(config: Config, output: W) -> Self {
        Self {
            pc: config.load_address,
            config,
            memory: Memory::new(),
            registers: RegisterFile::new(),
            flags: Flags::default(),
            state: State::Running,
            output,
        }
    }

    /// Copy a program image to the configured load address.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Fault> {
        self.memory
            .load_program(program, self.config.load_address)?;
        log::debug!(
            "loaded {} bytes at {:#04x}",
            program.len(),
            self.config.load_address
        );
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Give back the output sink, e.g. to inspect captured `PRN` output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Decrement the stack pointer, then store `value` at it.
    pub(crate) fn push_byte(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.registers.get(STACK_POINTER)?.wrapping_sub(1);
        self.registers.set(STACK_POINTER, sp)?;
        self.memory.write(sp as usize, value)
    }

    /// Load the byte at the stack pointer, then increment it.
    pub(crate) fn pop_byte(&mut self) -> Result<u8, Fault> {
        let sp = self.registers.get(STACK_POINTER)?;
        let value = self.memory.read(sp as usize)?;
        self.registers.set(STACK_POINTER, sp.wrapping_add(1))?;
        Ok(value)
    }
}
