//! Configuration system
//!
//! Settings for the reference tick driver and its demo scene. The collision
//! and integration core takes no configuration of its own.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::simulation::fixed_timestep::{DEFAULT_MAX_STEPS, DEFAULT_STEP};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// The format is chosen by extension: `.toml` or `.ron`.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its accepted range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the fixed-step loop and the moving object it drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Length of one simulation step, in seconds
    pub fixed_step: f64,

    /// Most steps drained per frame before backlog is dropped (0 = no cap)
    pub max_steps_per_frame: u32,

    /// Time between timed friction decays, in seconds (0 = never)
    pub decay_interval: f64,

    /// Friction given to the moving object
    pub mover_friction: f32,

    /// Initial velocity of the moving object, per step
    pub mover_velocity: Vec3,

    /// Simulated time the demo runs for, in seconds
    pub total_time: f64,

    /// Frame length fed to the accumulator when not running in real time
    pub frame_time: f64,

    /// Feed measured wall-clock time instead of `frame_time`
    pub realtime: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_step: DEFAULT_STEP,
            max_steps_per_frame: DEFAULT_MAX_STEPS,
            decay_interval: 1.0,
            mover_friction: 0.94,
            mover_velocity: Vec3::new(0.016, 0.016, 0.0),
            total_time: 10.0,
            frame_time: 1.0 / 50.0,
            realtime: false,
        }
    }
}

impl Config for SimulationConfig {}

impl SimulationConfig {
    /// Reject values the tick driver cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_step.is_finite() && self.fixed_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fixed_step must be positive, got {}",
                self.fixed_step
            )));
        }
        if !(self.decay_interval.is_finite() && self.decay_interval >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "decay_interval must be zero or positive, got {}",
                self.decay_interval
            )));
        }
        if !(self.frame_time.is_finite() && self.frame_time > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_time must be positive, got {}",
                self.frame_time
            )));
        }
        if !self.total_time.is_finite() || self.total_time < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "total_time must be zero or positive, got {}",
                self.total_time
            )));
        }
        Ok(())
    }
}
