//! Body pose demo: skeleton overlay, joint angles and flag-semaphore letters.
//!
//! A tracker delivers one frame and at most one body per iteration. The
//! application draws the skeleton, measures a few joint angles against the
//! image vertical and optionally reads the flag-semaphore letter shown by the
//! two upper arms.
//!
//! The pipeline consists of:
//! 1. A [`tracker::PoseTracker`] producing frames and [`body::Body`] records
//! 2. A [`renderer::PoseRenderer`] drawing the skeleton and showing frames
//! 3. Angle measurement ([`gesture::angle_with_y`], [`joint_angles`])
//! 4. Letter lookup ([`gesture::recognize_gesture`])
//!
//! # Examples
//!
//! ## Reading a semaphore letter
//!
//! ```
//! use pose_semaphore::{body::Body, gesture::recognize_gesture};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut points = [[0.0_f32; 3]; 33];
//! // right arm straight down, left arm straight out to the image right
//! points[12] = [200.0, 200.0, 0.0];
//! points[14] = [200.0, 260.0, 0.0];
//! points[11] = [300.0, 200.0, 0.0];
//! points[13] = [360.0, 200.0, 0.0];
//! let body = Body::from_points(&points)?;
//!
//! let letter = recognize_gesture(&body)?;
//! println!("Letter: {letter:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the demo loop
//!
//! ```no_run
//! use pose_semaphore::{
//!     app::DemoApp,
//!     config::DisplayConfig,
//!     renderer::{RendererConfig, SkeletonRenderer},
//!     tracker::{ReplayTracker, TrackerConfig},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = ReplayTracker::new(TrackerConfig::default())?;
//! let renderer = SkeletonRenderer::new(&tracker, RendererConfig::default())?;
//! let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run()?;
//! println!("{} frames, {} bodies", summary.frames, summary.bodies);
//! # Ok(())
//! # }
//! ```

/// Main application loop
pub mod app;

/// Body pose record
pub mod body;

/// Command-line arguments
pub mod cli;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

/// Arm angles and flag-semaphore recognition
pub mod gesture;

/// Joint angles shown on screen
pub mod joint_angles;

/// Keypoint name and index tables
pub mod keypoints;

/// Text annotations
pub mod overlay;

/// Skeleton renderers
pub mod renderer;

/// Pose trackers
pub mod tracker;

/// Pixel coordinate helpers
pub mod utils;

pub use error::{Error, Result};
