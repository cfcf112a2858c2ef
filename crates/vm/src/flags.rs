//! The `FL` condition register.

/// Outcome of the most recent `CMP`, laid out as `00000LGE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const LESS: u8 = 0b100;
    pub const GREATER: u8 = 0b010;
    pub const EQUAL: u8 = 0b001;

    /// Flags for `a` compared against `b`. Exactly one bit is set.
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Flags(Self::LESS),
            std::cmp::Ordering::Greater => Flags(Self::GREATER),
            std::cmp::Ordering::Equal => Flags(Self::EQUAL),
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_less(self) -> bool {
        self.0 & Self::LESS != 0
    }

    pub fn is_greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    pub fn is_equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }
}
