use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// One of the three pegs, from left to right.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Peg {
    /// Left peg, where every puzzle starts.
    A,
    /// Middle peg.
    B,
    /// Right peg, where the default solution ends.
    C,
}
impl Peg {
    /// Returns the index of the peg, from 0 to 2.
    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Returns the peg with index `i`, or `None` if `i` is out of range.
    pub const fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Peg::A),
            1 => Some(Peg::B),
            2 => Some(Peg::C),
            _ => None,
        }
    }

    /// Returns the peg that is neither `self` nor `other`, or `None` if they
    /// are the same peg.
    pub fn third(self, other: Peg) -> Option<Peg> {
        if self == other {
            return None;
        }
        Peg::from_index(3 - self.index() - other.index())
    }
}
