//! User preferences.
//!
//! Built-in defaults are embedded from `default.yaml`. A user file, if given,
//! is layered on top and may specify any subset of the fields. Preferences
//! are never written back to disk.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::{Context, Result};
use hanoi_core::DiskCount;
use serde::{Deserialize, Serialize};

mod animation;
mod schema;

pub use animation::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences = serde_norway::from_str::<schema::AnyVersion>(
        DEFAULT_PREFS_STR
    )
    .expect("error loading default preferences")
    .into_current();
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Number of disks in the puzzle shown at startup.
    pub default_disk_count: DiskCount,
    /// Playback speed multiplier at startup.
    pub default_speed: f32,

    pub animation: AnimationPreferences,
}
impl Preferences {
    /// Loads preferences, layering `user_file` (if any) on top of the
    /// defaults. If loading fails, the error is logged and the default
    /// preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences, layering `user_file` (if any) on top of the
    /// defaults.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .set_default("version", schema::CURRENT_VERSION)
            .context("error setting preferences schema version")?;

        // Load default preferences.
        config = config.add_source(config::File::from_str(
            DEFAULT_PREFS_STR,
            PREFS_FILE_FORMAT,
        ));

        // Load user preferences.
        if let Some(path) = user_file {
            log::debug!("Loading user preferences from {path:?}");
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        let prefs = config
            .build()
            .and_then(|c| c.try_deserialize::<schema::AnyVersion>())
            .map(schema::AnyVersion::into_current)
            .context("error reading preferences")?;
        Ok(prefs)
    }

    /// Serializes the preferences to YAML, in the same format as the user
    /// preferences file.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(&schema::AnyVersion::from(self.clone()))
            .context("error serializing preferences")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = &*DEFAULT_PREFS;
        assert_eq!(prefs.default_disk_count, DiskCount::new(3).unwrap());
        assert_eq!(prefs.default_speed, 1.0);
        assert_eq!(prefs.animation.lift_ms, 200);
        assert_eq!(prefs.animation.move_ms, 300);
        assert_eq!(prefs.animation.drop_ms, 200);
        assert_eq!(prefs.animation.autoplay_delay_ms, 500);
        assert_eq!(prefs.animation.interpolation, InterpolateFn::Cosine);
    }

    #[test]
    fn test_load_without_user_file() {
        assert_eq!(Preferences::try_load(None).unwrap(), *DEFAULT_PREFS);
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_disk_count: 5\nanimation:\n  move_ms: 1000").unwrap();

        let prefs = Preferences::try_load(Some(file.path())).unwrap();
        assert_eq!(prefs.default_disk_count, DiskCount::new(5).unwrap());
        assert_eq!(prefs.animation.move_ms, 1000);
        // Unspecified fields keep their defaults.
        assert_eq!(prefs.animation.lift_ms, 200);
        assert_eq!(prefs.default_speed, 1.0);
    }

    #[test]
    fn test_invalid_user_file_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_disk_count: 13").unwrap();

        Preferences::try_load(Some(file.path())).expect_err("disk count out of range");
        assert_eq!(Preferences::load(Some(file.path())), *DEFAULT_PREFS);
    }

    #[test]
    fn test_yaml_output_is_loadable() {
        let yaml = DEFAULT_PREFS.to_yaml().unwrap();
        assert!(yaml.starts_with("version: v1"));
        let reloaded = serde_norway::from_str::<schema::AnyVersion>(&yaml)
            .unwrap()
            .into_current();
        assert_eq!(reloaded, *DEFAULT_PREFS);
    }

    #[test]
    fn test_interpolation_endpoints() {
        for f in [InterpolateFn::Lerp, InterpolateFn::Cosine, InterpolateFn::Cubic] {
            assert_eq!(f.interpolate(0.0), 0.0);
            assert!((f.interpolate(1.0) - 1.0).abs() < 1e-6);
            assert!((f.interpolate(0.5) - 0.5).abs() < 1e-6);
        }
    }
}
