use std::fmt;

use thiserror::Error;
use web_time::Duration;

/// Number of speed steps per 1x.
const STEPS_PER_UNIT: u32 = 4;

/// Playback speed multiplier, from 0.25x to 4x in steps of 0.25x.
///
/// Every animation duration is divided by the multiplier. The multiplier is
/// stored as a whole number of steps so that scaled durations are exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Speed {
    steps: u32,
}
impl Default for Speed {
    fn default() -> Self {
        Self::NORMAL
    }
}
impl Speed {
    /// Slowest speed (0.25x).
    pub const MIN: Self = Self { steps: 1 };
    /// Normal speed (1x).
    pub const NORMAL: Self = Self {
        steps: STEPS_PER_UNIT,
    };
    /// Fastest speed (4x).
    pub const MAX: Self = Self {
        steps: 4 * STEPS_PER_UNIT,
    };
    /// Difference between adjacent speeds.
    pub const STEP: f32 = 1.0 / STEPS_PER_UNIT as f32;

    /// Constructs a speed from a multiplier, rounding to the nearest step.
    pub fn from_multiplier(multiplier: f32) -> Result<Self, SpeedError> {
        let steps = (multiplier * STEPS_PER_UNIT as f32).round();
        if !steps.is_finite() || steps < Self::MIN.steps as f32 || steps > Self::MAX.steps as f32
        {
            return Err(SpeedError::OutOfRange(multiplier));
        }
        Ok(Self {
            steps: steps as u32,
        })
    }

    /// Returns the speed multiplier.
    pub fn multiplier(self) -> f32 {
        self.steps as f32 / STEPS_PER_UNIT as f32
    }

    /// Returns `base` divided by the speed multiplier.
    pub fn scale(self, base: Duration) -> Duration {
        base * STEPS_PER_UNIT / self.steps
    }
}
impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

/// Error produced when a speed multiplier is invalid.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum SpeedError {
    /// Multiplier is outside the allowed range or not a number.
    #[error("speed {0} is out of range; must be between 0.25 and 4")]
    OutOfRange(f32),
}
