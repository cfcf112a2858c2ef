//! Read-only state snapshots for debugging.

use std::fmt;
use std::io::Write;

use crate::machine::Cpu;
use crate::registers::REGISTER_COUNT;

/// The program counter, the three bytes starting at it, and every register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub pc: usize,
    /// `None` where the address is past the end of memory.
    pub bytes: [Option<u8>; 3],
    pub registers: [u8; REGISTER_COUNT],
}

impl fmt::Display for Trace {
    /// `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACE: {:02X} |", self.pc)?;
        for byte in &self.bytes {
            match byte {
                Some(b) => write!(f, " {b:02X}")?,
                None => write!(f, " --")?,
            }
        }
        write!(f, " |")?;
        for reg in &self.registers {
            write!(f, " {reg:02X}")?;
        }
        Ok(())
    }
}

impl<W: Write> Cpu<W> {
    /// Snapshot the current state without touching it.
    pub fn trace(&self) -> Trace {
        let mut registers = [0u8; REGISTER_COUNT];
        registers.copy_from_slice(self.registers.as_slice());
        Trace {
            pc: self.pc,
            bytes: [0, 1, 2].map(|offset| {
                self.pc
                    .checked_add(offset)
                    .and_then(|address| self.memory.read(address).ok())
            }),
            registers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::{Config, Cpu};

    #[test]
    fn trace_format() {
        let mut cpu = Cpu::new(Config::default(), Vec::new());
        cpu.load(&[0b1000_0010, 0, 8, 0b0000_0001]).unwrap();
        assert_eq!(
            cpu.trace().to_string(),
            "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00"
        );
        cpu.step().unwrap();
        assert_eq!(
            cpu.trace().to_string(),
            "TRACE: 03 | 01 00 00 | 08 00 00 00 00 00 00 00"
        );
    }

    #[test]
    fn trace_near_end_of_memory() {
        let cpu = Cpu::new(Config::default().with_load_address(0xFE), Vec::new());
        let trace = cpu.trace();
        assert_eq!(trace.bytes, [Some(0), Some(0), None]);
        assert!(trace.to_string().starts_with("TRACE: FE | 00 00 -- |"));
    }

    #[test]
    fn trace_at_highest_address() {
        let cpu = Cpu::new(Config::default().with_load_address(usize::MAX), Vec::new());
        let trace = cpu.trace();
        assert_eq!(trace.bytes, [None, None, None]);
        assert!(trace.to_string().contains("| -- -- -- |"));
    }

    #[test]
    fn trace_does_not_mutate() {
        let mut cpu = Cpu::new(Config::default(), Vec::new());
        cpu.load(&[0b1000_0010, 3, 7]).unwrap();
        let before = cpu.trace();
        let _ = cpu.trace();
        assert_eq!(cpu.trace(), before);
        assert_eq!(cpu.pc(), 0);
    }
}
