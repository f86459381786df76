use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Disk, DiskCount, Peg};

/// Instruction to move the top disk of one peg onto another peg.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Peg that the disk is taken from.
    pub from: Peg,
    /// Peg that the disk is placed on.
    pub to: Peg,
    /// Disk being moved.
    pub disk: Disk,
}
impl Move {
    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            disk: self.disk,
        }
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} → {}", self.from, self.to)
    }
}

/// Returns the optimal solution moving `n` disks from peg A to peg C.
pub fn solution(n: DiskCount) -> Vec<Move> {
    solve(n, Peg::A, Peg::C, Peg::B)
}

/// Returns the optimal sequence of moves that carries a stack of `n` disks
/// from `source` to `destination`, using `auxiliary` as the spare peg.
///
/// The result always has exactly 2^N - 1 moves. The three pegs must be
/// distinct; see [`Peg::third()`].
pub fn solve(n: DiskCount, source: Peg, destination: Peg, auxiliary: Peg) -> Vec<Move> {
    let mut moves = Vec::with_capacity(n.move_count());
    push_moves(&mut moves, n.get(), source, destination, auxiliary);
    moves
}

fn push_moves(moves: &mut Vec<Move>, n: u8, source: Peg, destination: Peg, auxiliary: Peg) {
    if n == 0 {
        return;
    }
    push_moves(moves, n - 1, source, auxiliary, destination);
    moves.push(Move {
        from: source,
        to: destination,
        disk: Disk(n),
    });
    push_moves(moves, n - 1, auxiliary, destination, source);
}
