//! Skeleton renderer interface and its configuration.

/// `OpenCV` window renderer
pub mod skeleton;

/// Orthographic projection for the 3D view
pub mod view3d;

use crate::{body::Body, Error, Result};
use opencv::core::Mat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub use skeleton::SkeletonRenderer;

/// Draws bodies, shows frames and reads the keyboard
pub trait PoseRenderer {
    /// Draw `body` on `frame` and hand the frame back
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn draw(&mut self, frame: Mat, body: Option<&Body>) -> Result<Mat>;

    /// Show `frame`, record it if an output is open, then poll the keyboard
    /// for up to `delay_ms`. Returns `None` when no key was pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be shown or written.
    fn wait_key(&mut self, frame: &Mat, delay_ms: i32) -> Result<Option<i32>>;

    /// Close windows and flush the output
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be finalized.
    fn exit(&mut self) -> Result<()>;
}

/// 3D skeleton view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Show3d {
    /// No 3D window
    #[default]
    None,
    /// Image landmarks with their relative depth
    Image,
    /// World landmarks, hip-centred
    World,
    /// World landmarks placed at the reference point
    Mixed,
}

impl FromStr for Show3d {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "none" => Ok(Self::None),
            "image" => Ok(Self::Image),
            "world" => Ok(Self::World),
            "mixed" => Ok(Self::Mixed),
            other => Err(Error::InvalidInput(format!("Unknown 3D display mode: {other}"))),
        }
    }
}

/// Renderer options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// 3D view mode (default: none)
    pub show_3d: Show3d,
    /// Output video file (default: none)
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_3d_parsing() {
        assert_eq!("image".parse::<Show3d>().unwrap(), Show3d::Image);
        assert_eq!("world".parse::<Show3d>().unwrap(), Show3d::World);
        assert_eq!("mixed".parse::<Show3d>().unwrap(), Show3d::Mixed);
        assert!("side".parse::<Show3d>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = RendererConfig::default();
        assert_eq!(config.show_3d, Show3d::None);
        assert!(config.output.is_none());
    }
}
