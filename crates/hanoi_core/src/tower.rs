use std::fmt;
use std::ops::Index;

use serde::Serialize;
use smallvec::SmallVec;
use strum::VariantArray;
use thiserror::Error;

use crate::{Disk, DiskCount, MAX_DISKS, Move, Peg};

/// Stack of disks on a single peg, from bottom to top.
type Stack = SmallVec<[Disk; MAX_DISKS as usize]>;

/// Arrangement of disks on the three pegs.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tower {
    #[serde(skip)]
    disk_count: DiskCount,
    pegs: [Stack; 3],
}
impl Tower {
    /// Constructs a tower with all disks stacked on peg A.
    pub fn new(disk_count: DiskCount) -> Self {
        Self::with_all_on(disk_count, Peg::A)
    }
    /// Constructs a tower with all disks stacked on `peg`.
    pub fn with_all_on(disk_count: DiskCount, peg: Peg) -> Self {
        let mut pegs: [Stack; 3] = Default::default();
        pegs[peg.index()] = disk_count.disks_bottom_to_top().collect();
        Self { disk_count, pegs }
    }

    /// Returns the number of disks in the tower.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Returns the disks on `peg`, from bottom to top.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }
    /// Returns each peg along with its disks, from bottom to top.
    pub fn pegs(&self) -> impl Iterator<Item = (Peg, &[Disk])> {
        Peg::VARIANTS.iter().map(|&peg| (peg, self.peg(peg)))
    }
    /// Returns the disk on top of `peg`, or `None` if the peg is empty.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.peg(peg).last().copied()
    }

    /// Returns whether every disk is stacked on `peg`.
    pub fn is_complete_on(&self, peg: Peg) -> bool {
        self.peg(peg).len() == self.disk_count.get() as usize
    }

    /// Returns whether each disk appears exactly once and no disk rests on a
    /// smaller one.
    pub fn is_valid(&self) -> bool {
        let mut seen = 0_u32;
        for stack in &self.pegs {
            if !stack.windows(2).all(|w| w[0] > w[1]) {
                return false;
            }
            for &Disk(size) in stack {
                if size == 0 || size > self.disk_count.get() || seen & (1 << size) != 0 {
                    return false;
                }
                seen |= 1 << size;
            }
        }
        seen.count_ones() == self.disk_count.get() as u32
    }

    /// Moves the top disk according to `mv`.
    ///
    /// Returns an error and leaves the tower unchanged if the move is not
    /// legal from the current arrangement.
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if mv.from == mv.to {
            return Err(IllegalMove::SamePeg(mv.from));
        }
        let found = self.top(mv.from);
        if found != Some(mv.disk) {
            return Err(IllegalMove::WrongDisk {
                peg: mv.from,
                expected: mv.disk,
                found,
            });
        }
        if let Some(below) = self.top(mv.to)
            && below < mv.disk
        {
            return Err(IllegalMove::LargerOnSmaller {
                disk: mv.disk,
                below,
            });
        }
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(mv.disk);
        Ok(())
    }
    /// Undoes `mv`, which must be the most recent move applied to the tower.
    pub fn unapply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.apply(mv.rev())
    }
}
impl Index<Peg> for Tower {
    type Output = [Disk];

    fn index(&self, peg: Peg) -> &Self::Output {
        self.peg(peg)
    }
}
impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_first = true;
        for (peg, disks) in self.pegs() {
            if !is_first {
                write!(f, "  ")?;
            }
            is_first = false;
            write!(f, "{peg}: [")?;
            for (i, disk) in disks.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{disk}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Error produced when a move cannot be applied to a tower.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// Source and destination are the same peg.
    #[error("cannot move disk from peg {0} onto itself")]
    SamePeg(Peg),
    /// The disk on top of the source peg is not the disk named by the move.
    #[error("expected disk {expected} on top of peg {peg}, found {found:?}")]
    WrongDisk {
        /// Source peg.
        peg: Peg,
        /// Disk named by the move.
        expected: Disk,
        /// Disk actually on top, if any.
        found: Option<Disk>,
    },
    /// The destination peg has a smaller disk on top.
    #[error("cannot place disk {disk} on smaller disk {below}")]
    LargerOnSmaller {
        /// Disk being moved.
        disk: Disk,
        /// Disk on top of the destination peg.
        below: Disk,
    },
}
