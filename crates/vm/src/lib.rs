//! LS-8 virtual CPU: loads a byte image into memory and executes it.
//!
//! The CPU has:
//! - 256 bytes of memory
//! - eight byte-wide registers, with R7 used as the stack pointer
//! - an `FL` register holding the result of the last `CMP`
//! - one output side channel, written by `PRN`
//!
//! # Usage
//!
//! ```
//! use ls8_vm::{run_with, Config};
//!
//! // LDI R0,8 / PRN R0 / HLT
//! let program = [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001];
//!
//! let cpu = run_with(&program, Config::default(), Vec::new()).unwrap();
//! assert!(cpu.is_halted());
//! assert_eq!(cpu.registers().get(0), Ok(8));
//! assert_eq!(cpu.into_output(), b"8\n");
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod flags;
pub mod machine;
pub mod memory;
pub mod registers;
pub mod trace;

pub use error::{Fault, RuntimeError};
pub use flags::Flags;
pub use machine::{Config, Cpu, State};
pub use memory::{Memory, MEMORY_SIZE};
pub use registers::{RegisterFile, REGISTER_COUNT, STACK_POINTER};
pub use trace::Trace;

use std::io::{self, Write};

/// Load a program at address 0 and run it, printing to stdout.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the image does not fit in memory or any
/// cycle faults.
pub fn run(program: &[u8]) -> Result<Cpu<io::Stdout>, RuntimeError> {
    run_with(program, Config::default(), io::stdout())
}

/// Load a program per `config` and run it until HLT, writing `PRN` output
/// to `output`. Returns the halted CPU for inspection.
pub fn run_with<W: Write>(
    program: &[u8],
    config: Config,
    output: W,
) -> Result<Cpu<W>, RuntimeError> {
    let mut cpu = Cpu::new(config, output);
    cpu.load(program)
        .map_err(|fault| RuntimeError::new(cpu.pc(), None, fault))?;
    cpu.run()?;
    Ok(cpu)
}
