//! Program images for the LS-8.
//!
//! A program is a flat byte sequence that gets copied into memory at a
//! load address. The on-disk `.ls8` form is text with one byte per line,
//! written as eight binary digits.

/// An LS-8 program image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The raw image, in load order.
    pub bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Render the image as `.ls8` text, one `0bXXXXXXXX` line per byte
    /// without the `0b` prefix.
    pub fn to_binary_text(&self) -> String {
        let mut text = String::with_capacity(self.bytes.len() * 9);
        for byte in &self.bytes {
            text.push_str(&format!("{byte:08b}\n"));
        }
        text
    }

    /// Number of bytes in the image.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Program {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::new(vec![]);
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.to_binary_text(), "");
    }

    #[test]
    fn binary_text_is_zero_padded() {
        let program = Program::new(vec![0b1000_0010, 0, 8, 1]);
        assert_eq!(
            program.to_binary_text(),
            "10000010\n00000000\n00001000\n00000001\n"
        );
    }

    #[test]
    fn len_and_is_empty() {
        let program = Program::from(vec![1, 2, 3]);
        assert_eq!(program.len(), 3);
        assert!(!program.is_empty());
        assert_eq!(program.as_bytes(), &[1, 2, 3]);
    }
}
