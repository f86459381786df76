use serde::{Deserialize, Serialize};
use web_time::Duration;

pub use interpolation::InterpolateFn;

/// Base timings for the move animation, before the speed multiplier is
/// applied.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of the phase that lifts a disk off its peg, in milliseconds.
    pub lift_ms: u32,
    /// Duration of the phase that carries a disk across, in milliseconds.
    pub move_ms: u32,
    /// Duration of the phase that drops a disk onto its peg, in milliseconds.
    pub drop_ms: u32,
    /// Delay between moves during auto-play, in milliseconds.
    pub autoplay_delay_ms: u32,
    /// Easing used within each phase.
    pub interpolation: InterpolateFn,
}
impl AnimationPreferences {
    pub fn lift_duration(&self) -> Duration {
        Duration::from_millis(self.lift_ms.into())
    }
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_ms.into())
    }
    pub fn drop_duration(&self) -> Duration {
        Duration::from_millis(self.drop_ms.into())
    }
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms.into())
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        #[default]
        Cosine,
        Cubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match self {
                Self::Lerp => t,
                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
                Self::Cubic => (3.0 - 2.0 * t) * t * t,
            }
        }
    }
}
