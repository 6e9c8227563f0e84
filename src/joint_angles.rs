//! Joint angles shown next to the skeleton.

use crate::{body::Body, gesture::angle_with_y, keypoints::keypoint_name, Result};
use std::fmt;

/// Keypoint triples whose last segment is measured against the vertical
pub const DISPLAY_TRIPLES: [[usize; 3]; 4] = [[11, 13, 15], [16, 14, 12], [11, 23, 25], [23, 25, 27]];

/// Angle of the `k2 -> k3` segment of a keypoint triple
#[derive(Debug, Clone, PartialEq)]
pub struct JointAngle {
    pub triple: [usize; 3],
    pub degrees: f64,
}

impl JointAngle {
    /// Measure the `k2 -> k3` segment of `triple` on `body`
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKeypoint` if `k2` or `k3` is missing.
    pub fn measure(body: &Body, triple: [usize; 3]) -> Result<Self> {
        let (dx, dy) = body.displacement(triple[1], triple[2])?;
        Ok(Self {
            triple,
            degrees: angle_with_y(dx, dy),
        })
    }

    /// Label such as `11-13-15 (left_shoulder-left_elbow-left_wrist)`
    #[must_use]
    pub fn label(&self) -> String {
        let [k1, k2, k3] = self.triple;
        let name = |k: usize| keypoint_name(k).unwrap_or("?");
        format!("{k1}-{k2}-{k3} ({}-{}-{})", name(k1), name(k2), name(k3))
    }
}

impl fmt::Display for JointAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Angle: {:.2}", self.label(), self.degrees)
    }
}

/// Measure every display triple on `body`
///
/// # Errors
///
/// Returns `Error::MissingKeypoint` if a required landmark is missing.
pub fn compute_joint_angles(body: &Body) -> Result<Vec<JointAngle>> {
    DISPLAY_TRIPLES
        .iter()
        .map(|&triple| JointAngle::measure(body, triple))
        .collect()
}
