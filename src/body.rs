//! Body pose record produced by a tracker for one frame.

use crate::{Error, Result};
use ndarray::{Array2, ArrayView1};

/// One detected body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Image landmarks, one row per keypoint: pixel x, pixel y, relative z
    pub landmarks: Array2<f32>,
    /// World landmarks in metres, hip-centred, same row order as `landmarks`
    pub world_landmarks: Option<Array2<f32>>,
    /// Reference point in camera coordinates (millimetres)
    pub xyz: Option<[f32; 3]>,
    /// Detection score
    pub score: f32,
}

impl Body {
    /// Create a body from image landmarks only
    ///
    /// # Errors
    ///
    /// Returns an error if `landmarks` does not have three columns.
    pub fn new(landmarks: Array2<f32>) -> Result<Self> {
        if landmarks.ncols() != 3 {
            return Err(Error::InvalidInput(format!(
                "Landmarks must have 3 columns, got {}",
                landmarks.ncols()
            )));
        }
        Ok(Self {
            landmarks,
            world_landmarks: None,
            xyz: None,
            score: 1.0,
        })
    }

    /// Create a body from `(x, y, z)` rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot form a matrix.
    pub fn from_points(points: &[[f32; 3]]) -> Result<Self> {
        Self::new(points_to_array(points)?)
    }

    /// Number of landmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.nrows()
    }

    /// True when the body carries no landmark
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.nrows() == 0
    }

    /// Full landmark row for `index`
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKeypoint` when `index` is out of range.
    pub fn landmark(&self, index: usize) -> Result<ArrayView1<'_, f32>> {
        if index >= self.len() {
            return Err(Error::MissingKeypoint {
                index,
                available: self.len(),
            });
        }
        Ok(self.landmarks.row(index))
    }

    /// Image-plane coordinates of a landmark
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKeypoint` when `index` is out of range.
    pub fn landmark_xy(&self, index: usize) -> Result<(f64, f64)> {
        let row = self.landmark(index)?;
        Ok((f64::from(row[0]), f64::from(row[1])))
    }

    /// 2D displacement `to - from` in image space
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKeypoint` when either index is out of range.
    pub fn displacement(&self, from: usize, to: usize) -> Result<(f64, f64)> {
        let (fx, fy) = self.landmark_xy(from)?;
        let (tx, ty) = self.landmark_xy(to)?;
        Ok((tx - fx, ty - fy))
    }
}

/// Stack `(x, y, z)` rows into an `(n, 3)` matrix
///
/// # Errors
///
/// Returns an error if the shape is rejected by `ndarray`.
pub fn points_to_array(points: &[[f32; 3]]) -> Result<Array2<f32>> {
    let flat: Vec<f32> = points.iter().flatten().copied().collect();
    Array2::from_shape_vec((points.len(), 3), flat)
        .map_err(|e| Error::InvalidInput(format!("Invalid landmark shape: {e}")))
}
