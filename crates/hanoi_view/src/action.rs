use strum::{Display, EnumIter};

/// User request on the playback controls.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaybackAction {
    /// Toggle auto-play.
    TogglePlay,
    /// Undo the last applied move.
    StepBackward,
    /// Apply the next move.
    StepForward,
    /// Return all disks to the first peg.
    Reset,
}

/// Which controls are enabled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Controls {
    /// Whether the current input can generate a new puzzle.
    pub generate: bool,
    /// Whether the play/pause toggle is enabled.
    pub play_pause: bool,
    /// Whether stepping backward is enabled.
    pub step_backward: bool,
    /// Whether stepping forward is enabled.
    pub step_forward: bool,
    /// Whether reset is enabled.
    pub reset: bool,
}
impl Controls {
    /// Returns whether `action` is enabled.
    pub fn allows(self, action: PlaybackAction) -> bool {
        match action {
            PlaybackAction::TogglePlay => self.play_pause,
            PlaybackAction::StepBackward => self.step_backward,
            PlaybackAction::StepForward => self.step_forward,
            PlaybackAction::Reset => self.reset,
        }
    }
}
