//! Error types for the pose semaphore library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration could not be parsed or written
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Landmark replay record could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A body record does not carry a keypoint the caller asked for
    #[error("Missing keypoint {index}: body has {available} landmarks")]
    MissingKeypoint {
        /// Requested keypoint index
        index: usize,
        /// Number of landmarks in the body record
        available: usize,
    },

    /// Tracker failed to open its source or produce a frame
    #[error("Tracker error: {0}")]
    Tracker(String),

    /// Renderer failed to draw, display or write a frame
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
