//! Command-line arguments.
//!
//! Every option that also exists in the YAML configuration only overrides
//! the file value when it is given on the command line.

use crate::{
    config::Config,
    renderer::Show3d,
    tracker::{InputSource, LandmarkModel, TrackerMode},
    Result,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Use Edge mode (postprocessing runs on the device)
    #[arg(short, long)]
    pub edge: bool,

    /// Landmark model to use [default: full]
    #[arg(short, long, value_parser = ["full", "lite", "831"], help_heading = "Tracker arguments")]
    pub model: Option<String>,

    /// 'rgb' or 'rgb_laconic' or path to video/image file to use as input [default: rgb]
    #[arg(short, long, help_heading = "Tracker arguments")]
    pub input: Option<String>,

    /// Path to a pose detection model file
    #[arg(long = "pd_m", alias = "pd-m", help_heading = "Tracker arguments")]
    pub pd_m: Option<PathBuf>,

    /// Landmark model ('full' or 'lite' or 'heavy') or path to a model file
    #[arg(long = "lm_m", alias = "lm-m", help_heading = "Tracker arguments")]
    pub lm_m: Option<String>,

    /// Get (x,y,z) coords of reference body keypoint in camera coord system
    #[arg(long, help_heading = "Tracker arguments")]
    pub xyz: bool,

    /// Center crop frames to a square shape before feeding pose detection model
    #[arg(short, long, help_heading = "Tracker arguments")]
    pub crop: bool,

    /// Disable smoothing filter
    #[arg(long = "no_smoothing", alias = "no-smoothing", help_heading = "Tracker arguments")]
    pub no_smoothing: bool,

    /// Fps of internal color camera [default: depends on the model]
    #[arg(short = 'f', long = "internal_fps", alias = "internal-fps", help_heading = "Tracker arguments")]
    pub internal_fps: Option<u32>,

    /// Internal color camera frame height in pixels [default: 640]
    #[arg(long = "internal_frame_height", alias = "internal-frame-height", help_heading = "Tracker arguments")]
    pub internal_frame_height: Option<i32>,

    /// Print some statistics at exit
    #[arg(short, long, help_heading = "Tracker arguments")]
    pub stats: bool,

    /// Print some debug messages
    #[arg(short, long, help_heading = "Tracker arguments")]
    pub trace: bool,

    /// Force person detection on every frame
    #[arg(long = "force_detection", alias = "force-detection", help_heading = "Tracker arguments")]
    pub force_detection: bool,

    /// JSON Lines file with recorded landmarks to replay over the input
    #[arg(short, long, help_heading = "Tracker arguments")]
    pub landmarks: Option<PathBuf>,

    /// Display skeleton in 3d in a separate window
    #[arg(short = '3', long = "show_3d", alias = "show-3d", value_parser = ["image", "world", "mixed"], help_heading = "Renderer arguments")]
    pub show_3d: Option<String>,

    /// Path to output video file
    #[arg(short, long, help_heading = "Renderer arguments")]
    pub output: Option<PathBuf>,

    /// Draw the recognized flag-semaphore letter
    #[arg(long, help_heading = "Renderer arguments")]
    pub semaphore: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Override `config` with the options given on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if a choice value cannot be converted.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        let tracker = &mut config.tracker;
        if self.edge {
            tracker.mode = TrackerMode::Edge;
        }
        if let Some(input) = &self.input {
            tracker.input = InputSource::from(input.as_str());
        }
        if let Some(model) = &self.model {
            tracker.lm_model = LandmarkModel::from(model.as_str());
        }
        // an explicit landmark model wins over the model variant
        if let Some(lm_m) = &self.lm_m {
            tracker.lm_model = LandmarkModel::from(lm_m.as_str());
        }
        if let Some(pd_m) = &self.pd_m {
            tracker.pd_model = Some(pd_m.clone());
        }
        if self.xyz {
            tracker.xyz = true;
        }
        if self.crop {
            tracker.crop = true;
        }
        if self.no_smoothing {
            tracker.smoothing = false;
        }
        if let Some(fps) = self.internal_fps {
            tracker.internal_fps = Some(fps);
        }
        if let Some(height) = self.internal_frame_height {
            tracker.internal_frame_height = height;
        }
        if self.stats {
            tracker.stats = true;
        }
        if self.trace {
            tracker.trace = true;
        }
        if self.force_detection {
            tracker.force_detection = true;
        }
        if let Some(landmarks) = &self.landmarks {
            tracker.landmarks = Some(landmarks.clone());
        }

        if let Some(mode) = &self.show_3d {
            config.renderer.show_3d = mode.parse::<Show3d>()?;
        }
        if let Some(output) = &self.output {
            config.renderer.output = Some(output.clone());
        }
        if self.semaphore {
            config.display.show_semaphore = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_lm_m_overrides_model() {
        let args = Args::parse_from(["app", "-m", "lite", "--lm_m", "heavy"]);
        let mut config = Config::default();
        args.apply(&mut config).unwrap();
        assert_eq!(config.tracker.lm_model, LandmarkModel::Heavy);
    }

    #[test]
    fn test_no_arguments_keep_config() {
        let args = Args::parse_from(["app"]);
        let mut config = Config::default();
        config.tracker.internal_frame_height = 480;
        args.apply(&mut config).unwrap();
        assert_eq!(config.tracker.internal_frame_height, 480);
        assert!(config.tracker.smoothing);
        assert_eq!(config.renderer.show_3d, Show3d::None);
    }
}
