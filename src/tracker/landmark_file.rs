//! Recorded body landmarks, one JSON object per line.
//!
//! ```text
//! {"frame": 0, "landmarks": [[320.0, 110.5, -0.2], ...], "xyz": [12.0, -40.0, 1850.0]}
//! {"frame": 1, "landmarks": [...], "world_landmarks": [...], "score": 0.93}
//! ```
//!
//! Frames without a record have no body.

use crate::{
    body::{points_to_array, Body},
    Error, Result,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BodyRecord {
    frame: u64,
    landmarks: Vec<[f32; 3]>,
    #[serde(default)]
    world_landmarks: Option<Vec<[f32; 3]>>,
    #[serde(default)]
    xyz: Option<[f32; 3]>,
    #[serde(default = "default_score")]
    score: f32,
}

fn default_score() -> f32 {
    1.0
}

/// Bodies indexed by frame number
#[derive(Debug, Default)]
pub struct LandmarkFile {
    bodies: HashMap<u64, Body>,
}

impl LandmarkFile {
    /// Load a replay file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::info!("Loading landmark replay file: {}", path.as_ref().display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse replay records from a string
    ///
    /// # Errors
    ///
    /// Returns an error naming the first malformed line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut bodies = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: BodyRecord = serde_json::from_str(line)?;
            let frame = record.frame;
            let body = record_to_body(record)
                .map_err(|e| Error::InvalidInput(format!("Line {}: {e}", line_no + 1)))?;
            if bodies.insert(frame, body).is_some() {
                log::warn!("Duplicate record for frame {frame}, keeping the last one");
            }
        }
        log::debug!("Loaded {} body records", bodies.len());
        Ok(Self { bodies })
    }

    /// Body recorded for `frame`
    #[must_use]
    pub fn body(&self, frame: u64) -> Option<&Body> {
        self.bodies.get(&frame)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the file has no record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn record_to_body(record: BodyRecord) -> Result<Body> {
    let mut body = Body::from_points(&record.landmarks)?;
    if let Some(world) = record.world_landmarks {
        if world.len() != record.landmarks.len() {
            return Err(Error::InvalidInput(format!(
                "{} world landmarks for {} image landmarks",
                world.len(),
                record.landmarks.len()
            )));
        }
        body.world_landmarks = Some(points_to_array(&world)?);
    }
    body.xyz = record.xyz;
    body.score = record.score;
    Ok(body)
}
