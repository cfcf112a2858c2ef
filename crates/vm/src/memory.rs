//! Flat byte-addressable memory.

use crate::error::Fault;

/// Number of addressable cells.
pub const MEMORY_SIZE: usize = 256;

/// Zero-filled, fixed-size RAM. Every access is bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Read the byte at `address`.
    pub fn read(&self, address: usize) -> Result<u8, Fault> {
        self.cells
            .get(address)
            .copied()
            .ok_or_else(|| self.out_of_bounds(address))
    }

    /// Store `value` at `address`.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), Fault> {
        let capacity = self.capacity();
        match self.cells.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::OutOfBounds { address, capacity }),
        }
    }

    /// Copy a program image into memory starting at `start`.
    ///
    /// Nothing is written if the image does not fit. The fault names `start`
    /// if it is itself outside memory, otherwise the first address past the
    /// end.
    pub fn load_program(&mut self, bytes: &[u8], start: usize) -> Result<(), Fault> {
        if bytes.is_empty() {
            return Ok(());
        }
        let capacity = self.capacity();
        if start >= capacity {
            return Err(self.out_of_bounds(start));
        }
        let end = start + bytes.len();
        if end > capacity {
            return Err(self.out_of_bounds(capacity));
        }
        self.cells[start..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    fn out_of_bounds(&self, address: usize) -> Fault {
        Fault::OutOfBounds {
            address,
            capacity: self.capacity(),
        }
    }
}
