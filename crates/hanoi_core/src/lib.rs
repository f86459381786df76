//! Tower of Hanoi puzzle model and optimal solver.
//!
//! The puzzle has exactly three pegs. Disks are identified by their size,
//! from 1 (smallest) to N (largest), and a larger disk may never rest on a
//! smaller one.

mod disk;
mod moves;
mod peg;
mod tower;


pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::disk::{Disk, DiskCount, DiskCountError};
    pub use crate::moves::{Move, solution, solve};
    pub use crate::peg::Peg;
    pub use crate::tower::{IllegalMove, Tower};
}

/// Minimum number of disks in a puzzle.
pub const MIN_DISKS: u8 = 1;
/// Maximum number of disks in a puzzle.
///
/// The optimal solution for this many disks has 4095 moves.
pub const MAX_DISKS: u8 = 12;
