use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MAX_DISKS, MIN_DISKS};

/// Disk, identified by its size.
///
/// Size 1 is the smallest disk. Sizes are unique within a puzzle.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Disk(pub u8);
impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of disks in a puzzle, guaranteed to be between [`MIN_DISKS`] and
/// [`MAX_DISKS`] inclusive.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DiskCount(u8);
impl Default for DiskCount {
    fn default() -> Self {
        Self(3)
    }
}
impl DiskCount {
    /// Smallest allowed disk count.
    pub const MIN: Self = Self(MIN_DISKS);
    /// Largest allowed disk count.
    pub const MAX: Self = Self(MAX_DISKS);

    /// Constructs a disk count, or returns an error if `n` is out of range.
    pub fn new(n: i64) -> Result<Self, DiskCountError> {
        match u8::try_from(n) {
            Ok(n) if (MIN_DISKS..=MAX_DISKS).contains(&n) => Ok(Self(n)),
            _ => Err(DiskCountError::OutOfRange(n)),
        }
    }

    /// Returns the number of disks.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the length of the optimal solution: 2^N - 1.
    pub fn move_count(self) -> usize {
        (1_usize << self.0) - 1
    }

    /// Returns all disks from largest to smallest, which is the order they are
    /// stacked from the bottom of a peg.
    pub fn disks_bottom_to_top(self) -> impl Iterator<Item = Disk> {
        (1..=self.0).rev().map(Disk)
    }
}
impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl FromStr for DiskCount {
    type Err = DiskCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<i64>()
            .map_err(|_| DiskCountError::NotANumber(s.to_owned()))?;
        Self::new(n)
    }
}
impl<'de> Deserialize<'de> for DiskCount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Self::new(n).map_err(serde::de::Error::custom)
    }
}

/// Error produced when a disk count is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiskCountError {
    /// Input is not an integer.
    #[error("Please enter a number between {} and {}", MIN_DISKS, MAX_DISKS)]
    NotANumber(String),
    /// Integer is outside the allowed range.
    #[error("Please enter a number between {} and {}", MIN_DISKS, MAX_DISKS)]
    OutOfRange(i64),
}
