//! Playback controller for the Tower of Hanoi visualizer, independent of any
//! UI toolkit.
//!
//! [`HanoiSimulation`] walks through the optimal solution one move at a
//! time, animating each move in three phases. [`HanoiView`] wraps it with the
//! disk count input and the speed setting.

mod action;
mod animation;
mod simulation;
mod speed;
mod view;

#[cfg(test)]
mod tests;

pub use action::{Controls, PlaybackAction};
pub use animation::{AnimPhase, MoveAnimation, PlaybackState, StepDirection, Timer};
pub use simulation::HanoiSimulation;
pub use speed::{Speed, SpeedError};
pub use view::HanoiView;
