//! Configuration management for the pose semaphore demo

use crate::{
    constants::{DEFAULT_KEY_DELAY_MS, LABEL_LINE_STEP, LABEL_RIGHT_OFFSET, LABEL_START_Y},
    renderer::RendererConfig,
    tracker::TrackerConfig,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracker options
    pub tracker: TrackerConfig,

    /// Renderer options
    pub renderer: RendererConfig,

    /// Annotation options
    pub display: DisplayConfig,
}

/// Annotation layout and loop timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Distance of the angle labels from the right border
    pub label_right_offset: i32,

    /// Baseline of the first angle label
    pub label_start_y: i32,

    /// Vertical distance between labels
    pub label_line_step: i32,

    /// Key poll delay in milliseconds
    pub key_delay_ms: i32,

    /// Draw the recognized semaphore letter
    pub show_semaphore: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label_right_offset: LABEL_RIGHT_OFFSET,
            label_start_y: LABEL_START_Y,
            label_line_step: LABEL_LINE_STEP,
            key_delay_ms: DEFAULT_KEY_DELAY_MS,
            show_semaphore: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default log filter: `debug` when tracing is on, `info` otherwise
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.tracker.trace {
            "debug"
        } else {
            "info"
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.display.key_delay_ms <= 0 {
            return Err(Error::ConfigError(
                "Key delay must be at least 1 ms".to_string(),
            ));
        }
        if self.display.label_line_step <= 0 {
            return Err(Error::ConfigError(
                "Label line step must be greater than 0".to_string(),
            ));
        }
        if self.display.label_right_offset < 0 || self.display.label_start_y < 0 {
            return Err(Error::ConfigError(
                "Label position must not be negative".to_string(),
            ));
        }

        self.tracker.validate()
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Pose Semaphore Configuration

# Tracker options
tracker:
  mode: host
  input: rgb
  lm_model: full
  smoothing: true
  xyz: false
  crop: false
  internal_frame_height: 640
  force_detection: false
  stats: false
  trace: false

# Renderer options
renderer:
  show_3d: none

# Annotations
display:
  label_right_offset: 420
  label_start_y: 50
  label_line_step: 20
  key_delay_ms: 1
  show_semaphore: false
"#;
