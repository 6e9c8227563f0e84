//! Pose tracker interface and its configuration.
//!
//! The frame loop only needs two things from a tracker: the next frame with
//! the body detected on it, and a way to release the underlying source. Any
//! pose pipeline can be plugged in behind [`PoseTracker`].

/// JSON Lines landmark replay files
pub mod landmark_file;

/// Tracker that replays recorded landmarks over a video source
pub mod replay;

use crate::{body::Body, constants::DEFAULT_INTERNAL_FRAME_HEIGHT, Error, Result};
use opencv::core::Mat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub use replay::ReplayTracker;

/// A frame and the body detected on it, if any
pub struct TrackedFrame {
    pub frame: Mat,
    pub body: Option<Body>,
}

/// Source of frames and body poses
pub trait PoseTracker {
    /// Fetch the next frame, `None` once the input is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn next_frame(&mut self) -> Result<Option<TrackedFrame>>;

    /// Frame rate of the source, used for output video
    fn video_fps(&self) -> f64;

    /// Whether bodies carry a reference point `xyz`
    fn xyz_enabled(&self) -> bool;

    /// Release the source
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to close.
    fn exit(&mut self) -> Result<()>;
}

/// Where post-processing runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerMode {
    /// Post-processing on the host
    #[default]
    Host,
    /// Post-processing on the device
    Edge,
}

/// Frame input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputSource {
    /// Color camera
    #[default]
    Rgb,
    /// Color camera, frames only sent when a body is tracked
    RgbLaconic,
    /// Video or image file
    File(PathBuf),
}

impl From<&str> for InputSource {
    fn from(value: &str) -> Self {
        match value {
            "rgb" => Self::Rgb,
            "rgb_laconic" => Self::RgbLaconic,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl From<String> for InputSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<InputSource> for String {
    fn from(value: InputSource) -> Self {
        value.to_string()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => write!(f, "rgb"),
            Self::RgbLaconic => write!(f, "rgb_laconic"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Landmark model variant or model file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LandmarkModel {
    #[default]
    Full,
    Lite,
    Heavy,
    /// 0.8.3.1 full-body model
    V831,
    /// Explicit model file
    Path(PathBuf),
}

impl From<&str> for LandmarkModel {
    fn from(value: &str) -> Self {
        match value {
            "full" => Self::Full,
            "lite" => Self::Lite,
            "heavy" => Self::Heavy,
            "831" => Self::V831,
            path => Self::Path(PathBuf::from(path)),
        }
    }
}

impl From<String> for LandmarkModel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<LandmarkModel> for String {
    fn from(value: LandmarkModel) -> Self {
        value.to_string()
    }
}

impl fmt::Display for LandmarkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Lite => write!(f, "lite"),
            Self::Heavy => write!(f, "heavy"),
            Self::V831 => write!(f, "831"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Tracker options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TrackerConfig {
    /// Host or edge post-processing (default: host)
    pub mode: TrackerMode,
    /// Frame input (default: rgb camera)
    pub input: InputSource,
    /// Pose detection model file (default: bundled model)
    pub pd_model: Option<PathBuf>,
    /// Landmark model (default: full)
    pub lm_model: LandmarkModel,
    /// Landmark smoothing (default: on)
    pub smoothing: bool,
    /// Reference point xyz extraction (default: off)
    pub xyz: bool,
    /// Center-crop frames to a square (default: off)
    pub crop: bool,
    /// Internal camera fps (default: model dependent)
    pub internal_fps: Option<u32>,
    /// Internal camera frame height in pixels (default: 640)
    pub internal_frame_height: i32,
    /// Person detection on every frame (default: off)
    pub force_detection: bool,
    /// Print statistics at exit (default: off)
    pub stats: bool,
    /// Debug messages (default: off)
    pub trace: bool,
    /// Recorded landmarks to replay (default: none, no body is ever detected)
    pub landmarks: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            mode: TrackerMode::Host,
            input: InputSource::Rgb,
            pd_model: None,
            lm_model: LandmarkModel::Full,
            smoothing: true,
            xyz: false,
            crop: false,
            internal_fps: None,
            internal_frame_height: DEFAULT_INTERNAL_FRAME_HEIGHT,
            force_detection: false,
            stats: false,
            trace: false,
            landmarks: None,
        }
    }
}

impl TrackerConfig {
    /// Check option values and that referenced files exist
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for an invalid value or a missing file.
    pub fn validate(&self) -> Result<()> {
        if self.internal_frame_height <= 0 {
            return Err(Error::ConfigError(format!(
                "Internal frame height must be positive, got {}",
                self.internal_frame_height
            )));
        }
        if self.internal_fps == Some(0) {
            return Err(Error::ConfigError("Internal fps must be greater than 0".to_string()));
        }
        if let Some(path) = &self.pd_model {
            require_file(path, "Pose detection model")?;
        }
        if let LandmarkModel::Path(path) = &self.lm_model {
            require_file(path, "Landmark model")?;
        }
        if let InputSource::File(path) = &self.input {
            require_file(path, "Input file")?;
        }
        if let Some(path) = &self.landmarks {
            require_file(path, "Landmark replay file")?;
        }
        Ok(())
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::ConfigError(format!("{what} not found: {}", path.display())))
    }
}
