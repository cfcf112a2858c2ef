//! Fetch-decode-execute loop and opcode dispatch.

use std::io::Write;

use ls8_common::{Instruction, Opcode};

use crate::alu::{self, AluOp};
use crate::error::{Fault, RuntimeError};
use crate::flags::Flags;
use crate::machine::{Cpu, State};

impl<W: Write> Cpu<W> {
    /// Run until HLT or a fault.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.state == State::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Execute one fetch-decode-execute cycle.
    ///
    /// A halted CPU does nothing and stays halted.
    pub fn step(&mut self) -> Result<State, RuntimeError> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }
        if self.config.trace {
            log::trace!("{}", self.trace());
        }

        let pc = self.pc;
        let byte = self
            .memory
            .read(pc)
            .map_err(|fault| RuntimeError::new(pc, None, fault))?;
        let at = move |fault: Fault| RuntimeError::new(pc, Some(byte), fault);

        // Both operand slots are fetched whatever the operand count.
        let operand_a = self.memory.read(pc + 1).map_err(at)?;
        let operand_b = self.memory.read(pc + 2).map_err(at)?;

        let instr = Instruction::decode(byte);
        match instr.opcode() {
            Ok(opcode) => {
                self.dispatch(opcode, &instr, operand_a, operand_b).map_err(at)?;
                if !instr.sets_pc {
                    self.pc = pc + instr.size();
                }
            }
            Err(_) if self.config.strict => {
                return Err(at(Fault::UnknownOpcode { opcode: byte }));
            }
            Err(_) => {
                // No handler: skip it by its decoded size, even if its
                // sets-PC bit is on.
                log::debug!("skipping unknown opcode {byte:#010b} at {pc:#04x}");
                self.pc = pc + instr.size();
            }
        }

        Ok(self.state)
    }

    fn dispatch(
        &mut self,
        opcode: Opcode,
        instr: &Instruction,
        operand_a: u8,
        operand_b: u8,
    ) -> Result<(), Fault> {
        let reg_a = operand_a as usize;
        match opcode {
            Opcode::Ldi => self.registers.set(reg_a, operand_b),
            Opcode::Prn => self.exec_prn(reg_a),

            Opcode::Add | Opcode::Mul => {
                let op = AluOp::try_from(instr.alu_code())?;
                self.exec_alu(op, reg_a, operand_b as usize)
            }
            Opcode::Cmp => self.exec_cmp(reg_a, operand_b as usize),

            Opcode::Push => {
                let value = self.registers.get(reg_a)?;
                self.push_byte(value)
            }
            Opcode::Pop => {
                let value = self.pop_byte()?;
                self.registers.set(reg_a, value)
            }

            Opcode::Jmp => self.exec_jump(reg_a, true, instr.size()),
            Opcode::Jeq => self.exec_jump(reg_a, self.flags.is_equal(), instr.size()),
            Opcode::Jne => self.exec_jump(reg_a, !self.flags.is_equal(), instr.size()),
            Opcode::Call => self.exec_call(reg_a, instr.size()),
            Opcode::Ret => self.exec_ret(),

            Opcode::Hlt => {
                self.state = State::Halted;
                log::debug!("halted at {:#04x}", self.pc);
                Ok(())
            }
        }
    }

    fn exec_prn(&mut self, reg: usize) -> Result<(), Fault> {
        let value = self.registers.get(reg)?;
        writeln!(self.output, "{value}").map_err(|e| Fault::Output {
            message: e.to_string(),
        })
    }

    fn exec_alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) -> Result<(), Fault> {
        let a = self.registers.get(reg_a)?;
        let b = self.registers.get(reg_b)?;
        self.registers.set(reg_a, alu::compute(op, a, b))
    }

    fn exec_cmp(&mut self, reg_a: usize, reg_b: usize) -> Result<(), Fault> {
        let a = self.registers.get(reg_a)?;
        let b = self.registers.get(reg_b)?;
        self.flags = Flags::compare(a, b);
        Ok(())
    }

    /// Jump to the address in `reg` if `taken`, otherwise fall through to
    /// the next instruction.
    fn exec_jump(&mut self, reg: usize, taken: bool, size: usize) -> Result<(), Fault> {
        let target = self.registers.get(reg)?;
        if taken {
            self.pc = target as usize;
        } else {
            self.pc += size;
        }
        Ok(())
    }

    fn exec_call(&mut self, reg: usize, size: usize) -> Result<(), Fault> {
        let target = self.registers.get(reg)?;
        let return_address = self.pc + size;
        let return_byte = u8::try_from(return_address).map_err(|_| Fault::OutOfBounds {
            address: return_address,
            capacity: self.memory.capacity(),
        })?;
        self.push_byte(return_byte)?;
        self.pc = target as usize;
        Ok(())
    }

    fn exec_ret(&mut self) -> Result<(), Fault> {
        self.pc = self.pop_byte()? as usize;
        Ok(())
    }
}
