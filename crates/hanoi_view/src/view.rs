use hanoi_core::prelude::*;
use hanoi_prefs::{AnimationPreferences, Preferences};

use crate::{Controls, HanoiSimulation, PlaybackAction, Speed};

/// Complete state of the visualizer, independent of any UI toolkit: the
/// disk count input, the speed setting, and the current puzzle.
#[derive(Debug, Clone)]
pub struct HanoiView {
    /// Current puzzle, or `None` before the first one has been generated.
    pub sim: Option<HanoiSimulation>,
    /// Raw text of the disk count input.
    pub disk_count_input: String,

    speed: Speed,
    timings: AnimationPreferences,
}
impl HanoiView {
    /// Constructs a view without a puzzle.
    pub fn new(prefs: &Preferences) -> Self {
        let speed = Speed::from_multiplier(prefs.default_speed).unwrap_or_else(|e| {
            log::warn!("Invalid default speed: {e}");
            Speed::NORMAL
        });
        Self {
            sim: None,
            disk_count_input: prefs.default_disk_count.to_string(),

            speed,
            timings: prefs.animation.clone(),
        }
    }
    /// Constructs a view and generates a puzzle from the default disk count.
    pub fn with_puzzle(prefs: &Preferences) -> Self {
        let mut ret = Self::new(prefs);
        ret.load_puzzle(prefs.default_disk_count);
        ret
    }

    /// Parses the disk count input.
    pub fn parse_input(&self) -> Result<DiskCount, DiskCountError> {
        self.disk_count_input.parse()
    }
    /// Returns the error message for the disk count input, if it is invalid.
    pub fn input_error(&self) -> Option<String> {
        self.parse_input().err().map(|e| e.to_string())
    }

    /// Replaces the current puzzle with a new one generated from the disk
    /// count input. If the input is invalid, the current puzzle is left
    /// unchanged and the error is returned.
    pub fn generate(&mut self) -> Result<DiskCount, DiskCountError> {
        let disk_count = self.parse_input().inspect_err(|e| {
            log::debug!("Not generating puzzle from {:?}: {e}", self.disk_count_input);
        })?;
        self.load_puzzle(disk_count);
        Ok(disk_count)
    }
    /// Replaces the current puzzle with a new one with `disk_count` disks.
    /// Any animation or auto-play in progress is discarded.
    pub fn load_puzzle(&mut self, disk_count: DiskCount) {
        log::info!("New puzzle with {disk_count} disks");
        self.sim = Some(HanoiSimulation::new(disk_count, self.speed, &self.timings));
    }

    /// Returns the speed multiplier.
    pub fn speed(&self) -> Speed {
        self.speed
    }
    /// Sets the speed multiplier for the current puzzle and every future
    /// puzzle.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        if let Some(sim) = &mut self.sim {
            sim.set_speed(speed);
        }
    }

    /// Returns which controls are enabled.
    pub fn controls(&self) -> Controls {
        let generate = self.parse_input().is_ok();
        match &self.sim {
            None => Controls {
                generate,
                ..Default::default()
            },
            Some(sim) => {
                let idle = !sim.is_animating();
                let manual = idle && !sim.is_playing();
                Controls {
                    generate,
                    play_pause: idle,
                    step_backward: manual && sim.can_step_backward(),
                    step_forward: manual && sim.can_step_forward(),
                    reset: idle,
                }
            }
        }
    }

    /// Performs `action` if its control is enabled. Returns whether the
    /// action was performed.
    pub fn do_action(&mut self, action: PlaybackAction) -> bool {
        if !self.controls().allows(action) {
            return false;
        }
        let Some(sim) = &mut self.sim else {
            return false;
        };
        match action {
            PlaybackAction::TogglePlay => sim.toggle_playing(),
            PlaybackAction::StepBackward => sim.step_backward(),
            PlaybackAction::StepForward => sim.step_forward(),
            PlaybackAction::Reset => sim.reset(),
        }
    }

    /// Advances the current puzzle by the real time elapsed since the last
    /// frame. Returns whether the puzzle should be redrawn next frame.
    pub fn step(&mut self) -> bool {
        self.sim.as_mut().is_some_and(|sim| sim.step())
    }
}
