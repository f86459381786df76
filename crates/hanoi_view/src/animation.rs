use hanoi_core::prelude::*;
use strum::{Display, EnumIter};
use web_time::Duration;

/// Countdown toward a single scheduled event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timer {
    duration: Duration,
    elapsed: Duration,
}
impl Timer {
    /// Constructs a timer that fires after `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the timer by `delta`. If the timer fires, returns the time
    /// left over after it fired.
    pub fn advance(&mut self, delta: Duration) -> Option<Duration> {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.elapsed.checked_sub(self.duration)
    }

    /// Returns the total duration of the timer.
    pub fn duration(&self) -> Duration {
        self.duration
    }
    /// Returns the time remaining before the timer fires.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
    /// Returns the fraction of the timer that has elapsed, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }
}

/// Phase of a move animation.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnimPhase {
    /// Disk rises from the top of its source peg to above the pegs.
    Lift,
    /// Disk travels horizontally to above its destination peg.
    Move,
    /// Disk descends onto its destination peg.
    Drop,
}
impl AnimPhase {
    /// Returns the phase after this one, or `None` if this is the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            AnimPhase::Lift => Some(AnimPhase::Move),
            AnimPhase::Move => Some(AnimPhase::Drop),
            AnimPhase::Drop => None,
        }
    }
}

/// Direction of a step through the move list.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Applies the next move.
    Forward,
    /// Undoes the current move.
    Backward,
}

/// Move currently being animated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAnimation {
    /// Move from the solution that is being applied or undone.
    pub(crate) logical: Move,
    /// Direction of the step.
    pub(crate) direction: StepDirection,
    /// Current phase.
    pub(crate) phase: AnimPhase,
    /// Timer for the current phase.
    pub(crate) timer: Timer,
}
impl MoveAnimation {
    /// Returns the move from the solution that is being applied or undone.
    pub fn logical_move(&self) -> Move {
        self.logical
    }
    /// Returns the move that the disk visibly makes. When stepping backward,
    /// this is the reverse of the logical move.
    pub fn visual_move(&self) -> Move {
        match self.direction {
            StepDirection::Forward => self.logical,
            StepDirection::Backward => self.logical.rev(),
        }
    }
    /// Returns the direction of the step.
    pub fn direction(&self) -> StepDirection {
        self.direction
    }
    /// Returns the current phase.
    pub fn phase(&self) -> AnimPhase {
        self.phase
    }
    /// Returns the timer for the current phase.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

/// Event that the playback controller is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is scheduled.
    #[default]
    Idle,
    /// Auto-play will start the next move when the timer fires.
    Waiting(Timer),
    /// A move is being animated.
    Animating(MoveAnimation),
}
