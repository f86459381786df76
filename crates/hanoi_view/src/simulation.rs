use hanoi_core::prelude::*;
use hanoi_prefs::AnimationPreferences;
use strum::IntoEnumIterator;
use web_time::{Duration, Instant};

use crate::Speed;
use crate::animation::{AnimPhase, MoveAnimation, PlaybackState, StepDirection, Timer};

/// Frame rate assumed for the first frame of an animation.
const ASSUMED_FPS: f32 = 120.0;

/// Puzzle simulation, which owns the move list, the disk positions, and the
/// playback state.
///
/// All time-based behavior is driven by [`HanoiSimulation::advance()`], so
/// playback is deterministic given the same sequence of requests and time
/// deltas.
#[derive(Debug, Clone)]
pub struct HanoiSimulation {
    /// Optimal solution for the puzzle. Never changes after construction.
    moves: Vec<Move>,
    /// Logical disk positions, reflecting exactly the first `applied` moves.
    tower: Tower,
    /// Number of moves from `moves` that have been applied to `tower`.
    applied: usize,

    /// Whether auto-play is on.
    playing: bool,
    /// Speed multiplier for new timers.
    speed: Speed,
    /// Base animation timings.
    timings: AnimationPreferences,
    /// Scheduled event, if any.
    state: PlaybackState,

    /// Time of the last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl HanoiSimulation {
    /// Constructs a new simulation with all disks on peg A and playback
    /// stopped.
    pub fn new(disk_count: DiskCount, speed: Speed, timings: &AnimationPreferences) -> Self {
        let moves = solution(disk_count);
        log::debug!("Generated {} moves for {disk_count} disks", moves.len());
        Self {
            moves,
            tower: Tower::new(disk_count),
            applied: 0,

            playing: false,
            speed,
            timings: timings.clone(),
            state: PlaybackState::Idle,

            last_frame_time: None,
        }
    }

    /// Returns the number of disks.
    pub fn disk_count(&self) -> DiskCount {
        self.tower.disk_count()
    }
    /// Returns the full list of moves.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// Returns the logical disk positions. During an animation, this does not
    /// yet include the animated move.
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Returns the number of moves that have been applied.
    pub fn moves_applied(&self) -> usize {
        self.applied
    }
    /// Returns the index of the last applied move, or `None` if no moves have
    /// been applied.
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }
    /// Returns the last applied move.
    pub fn current_move(&self) -> Option<Move> {
        self.cursor().map(|i| self.moves[i])
    }
    /// Returns the next move to apply.
    pub fn next_move(&self) -> Option<Move> {
        self.moves.get(self.applied).copied()
    }
    /// Returns whether every move has been applied.
    pub fn is_finished(&self) -> bool {
        self.applied == self.moves.len()
    }
    /// Returns a human-readable description of the last applied move, such as
    /// `Move 3: from A → B`.
    pub fn move_description(&self) -> String {
        match self.current_move() {
            Some(mv) => format!("Move {}: {mv}", self.applied),
            None => "Ready to start".to_owned(),
        }
    }

    /// Returns whether auto-play is on.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
    /// Returns whether a move is being animated.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, PlaybackState::Animating(_))
    }
    /// Returns the scheduled event.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }
    /// Returns the move animation in progress, if any.
    pub fn animation(&self) -> Option<&MoveAnimation> {
        match &self.state {
            PlaybackState::Animating(anim) => Some(anim),
            _ => None,
        }
    }
    /// Returns the move animation in progress along with its eased progress
    /// through the current phase.
    pub fn animation_t(&self) -> Option<(&MoveAnimation, f32)> {
        let anim = self.animation()?;
        let t = self.timings.interpolation.interpolate(anim.timer.progress());
        Some((anim, t))
    }

    /// Returns the speed multiplier.
    pub fn speed(&self) -> Speed {
        self.speed
    }
    /// Sets the speed multiplier. This only affects timers started after the
    /// change.
    pub fn set_speed(&mut self, speed: Speed) {
        if self.speed != speed {
            log::trace!("Speed set to {speed}");
            self.speed = speed;
        }
    }

    /// Returns the duration of an animation phase at the current speed.
    pub fn phase_duration(&self, phase: AnimPhase) -> Duration {
        let base = match phase {
            AnimPhase::Lift => self.timings.lift_duration(),
            AnimPhase::Move => self.timings.move_duration(),
            AnimPhase::Drop => self.timings.drop_duration(),
        };
        self.speed.scale(base)
    }
    /// Returns the duration of a whole move animation at the current speed.
    pub fn step_duration(&self) -> Duration {
        AnimPhase::iter().map(|phase| self.phase_duration(phase)).sum()
    }
    /// Returns the delay between moves during auto-play at the current speed.
    pub fn autoplay_delay(&self) -> Duration {
        self.speed.scale(self.timings.autoplay_delay())
    }

    /// Returns whether [`Self::step_forward()`] would be accepted.
    pub fn can_step_forward(&self) -> bool {
        !self.is_animating() && !self.is_finished()
    }
    /// Returns whether [`Self::step_backward()`] would be accepted.
    pub fn can_step_backward(&self) -> bool {
        !self.is_animating() && self.applied > 0
    }

    /// Starts animating the next move. Returns `false` if the request was
    /// rejected because a move is already being animated or because every
    /// move has been applied.
    ///
    /// If auto-play is waiting to start the next move, the wait is cancelled.
    pub fn step_forward(&mut self) -> bool {
        self.try_begin_step(StepDirection::Forward)
    }
    /// Starts animating the reverse of the last applied move. Returns `false`
    /// if the request was rejected because a move is already being animated
    /// or because no moves have been applied.
    pub fn step_backward(&mut self) -> bool {
        self.try_begin_step(StepDirection::Backward)
    }

    /// Turns on auto-play. Returns `false` if the request was rejected
    /// because a move is being animated or because every move has already
    /// been applied.
    pub fn play(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Ignoring play request during animation");
            return false;
        }
        if self.is_finished() {
            log::debug!("Ignoring play request; all moves have been applied");
            self.playing = false;
            return false;
        }
        if !self.playing {
            log::debug!("Auto-play started at move {}", self.applied);
            self.playing = true;
        }
        self.continue_autoplay();
        true
    }
    /// Turns off auto-play. If auto-play is waiting to start the next move,
    /// the wait is cancelled. A move animation in progress still completes.
    pub fn pause(&mut self) {
        if self.playing {
            log::debug!("Auto-play paused at move {}", self.applied);
        }
        self.playing = false;
        if matches!(self.state, PlaybackState::Waiting(_)) {
            self.state = PlaybackState::Idle;
        }
    }
    /// Toggles auto-play. Returns `false` if the request was rejected.
    pub fn toggle_playing(&mut self) -> bool {
        if self.playing {
            self.pause();
            true
        } else {
            self.play()
        }
    }

    /// Returns all disks to peg A, rewinds to before the first move, and
    /// turns off auto-play. Returns `false` if the request was rejected
    /// because a move is being animated.
    pub fn reset(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Ignoring reset request during animation");
            return false;
        }
        log::debug!("Reset puzzle");
        self.tower = Tower::new(self.disk_count());
        self.applied = 0;
        self.playing = false;
        self.state = PlaybackState::Idle;
        true
    }

    /// Advances the scheduled timers by `delta`. Time left over when a timer
    /// fires carries over to whatever is scheduled next. Returns whether
    /// anything changed that should be redrawn.
    pub fn advance(&mut self, mut delta: Duration) -> bool {
        let mut needs_redraw = false;
        loop {
            let fired = match &mut self.state {
                PlaybackState::Idle => break,
                PlaybackState::Waiting(timer) => timer.advance(delta),
                PlaybackState::Animating(anim) => {
                    needs_redraw = true;
                    anim.timer.advance(delta)
                }
            };
            let Some(leftover) = fired else { break };
            delta = leftover;
            needs_redraw = true;
            self.fire();
        }
        needs_redraw
    }

    /// Advances the scheduled timers by the real time elapsed since the last
    /// frame. Returns whether the puzzle should be redrawn next frame.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let mut needs_redraw = self.advance(delta);
        // Keep the frame clock running while anything is scheduled.
        needs_redraw |= self.state != PlaybackState::Idle;

        if needs_redraw {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    fn try_begin_step(&mut self, direction: StepDirection) -> bool {
        if self.is_animating() {
            log::debug!("Ignoring {direction} step request during animation");
            return false;
        }
        let logical = match direction {
            StepDirection::Forward => self.next_move(),
            StepDirection::Backward => self.current_move(),
        };
        let Some(logical) = logical else {
            log::debug!("Ignoring {direction} step request; no move available");
            return false;
        };
        log::trace!("Begin {direction} step: disk {} {logical}", logical.disk);
        // Replaces any auto-play wait.
        self.state = PlaybackState::Animating(MoveAnimation {
            logical,
            direction,
            phase: AnimPhase::Lift,
            timer: Timer::new(self.phase_duration(AnimPhase::Lift)),
        });
        true
    }

    /// Handles the scheduled event whose timer just fired.
    fn fire(&mut self) {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => (),
            PlaybackState::Waiting(_) => {
                if !self.try_begin_step(StepDirection::Forward) {
                    self.playing = false;
                }
            }
            PlaybackState::Animating(mut anim) => match anim.phase.next() {
                Some(phase) => {
                    log::trace!("Move {} entering {phase} phase", anim.logical);
                    anim.phase = phase;
                    anim.timer = Timer::new(self.phase_duration(phase));
                    self.state = PlaybackState::Animating(anim);
                }
                None => self.finish_step(&anim),
            },
        }
    }

    /// Commits the animated move to the logical state.
    fn finish_step(&mut self, anim: &MoveAnimation) {
        let result = match anim.direction {
            StepDirection::Forward => self.tower.apply(anim.logical),
            StepDirection::Backward => self.tower.unapply(anim.logical),
        };
        match result {
            Ok(()) => match anim.direction {
                StepDirection::Forward => self.applied += 1,
                StepDirection::Backward => self.applied -= 1,
            },
            Err(e) => {
                log::error!("Error applying move {}: {e}", anim.logical);
                self.playing = false;
                return;
            }
        }
        log::trace!(
            "Finished {} step; {} moves applied",
            anim.direction,
            self.applied,
        );
        self.continue_autoplay();
    }

    /// Schedules the next auto-play move, or turns off auto-play if every
    /// move has been applied.
    fn continue_autoplay(&mut self) {
        if !self.playing || self.state != PlaybackState::Idle {
            return;
        }
        if self.is_finished() {
            log::debug!("Auto-play finished after {} moves", self.applied);
            self.playing = false;
        } else {
            self.state = PlaybackState::Waiting(Timer::new(self.autoplay_delay()));
        }
    }
}
