//! Orthographic projection of 3D landmarks onto a square canvas.
//!
//! The body is turned around the vertical axis so depth becomes visible,
//! then dropped onto the canvas plane. Image landmarks are fitted to the
//! canvas; world landmarks keep a metric scale so their size is stable.

use super::Show3d;
use crate::body::Body;
use ndarray::{Array2, ArrayView2};

/// Canvas side in pixels
pub const CANVAS_SIZE: i32 = 480;

/// Rotation around the vertical axis applied before projecting
pub const VIEW_YAW_DEG: f64 = 30.0;

const WORLD_PIXELS_PER_METRE: f64 = 180.0;
const MIXED_PIXELS_PER_METRE: f64 = 60.0;
const FIT_MARGIN: f64 = 0.8;

/// Canvas points for `body` in `mode`, `None` when the mode has no data
#[must_use]
pub fn project_body(body: &Body, mode: Show3d) -> Option<Vec<(i32, i32)>> {
    match mode {
        Show3d::None => None,
        Show3d::Image => Some(fit_to_canvas(body.landmarks.view(), VIEW_YAW_DEG)),
        Show3d::World => {
            let world = body.world_landmarks.as_ref()?;
            Some(metric(world.view(), VIEW_YAW_DEG, WORLD_PIXELS_PER_METRE, [0.0; 3]))
        }
        Show3d::Mixed => {
            let world = body.world_landmarks.as_ref()?;
            // xyz is in millimetres
            let offset = body.xyz.map_or([0.0; 3], |[x, y, z]| {
                [f64::from(x) / 1000.0, f64::from(y) / 1000.0, f64::from(z) / 1000.0]
            });
            Some(metric(world.view(), VIEW_YAW_DEG, MIXED_PIXELS_PER_METRE, offset))
        }
    }
}

fn rotate(points: ArrayView2<'_, f32>, yaw_deg: f64, offset: [f64; 3]) -> Array2<f64> {
    let (sin, cos) = yaw_deg.to_radians().sin_cos();
    let mut out = Array2::<f64>::zeros((points.nrows(), 2));
    for (i, row) in points.rows().into_iter().enumerate() {
        let x = f64::from(row[0]) + offset[0];
        let y = f64::from(row[1]) + offset[1];
        let z = f64::from(row[2]) + offset[2];
        out[[i, 0]] = x * cos + z * sin;
        out[[i, 1]] = y;
    }
    out
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixels(uv: &Array2<f64>, scale: f64, center: (f64, f64)) -> Vec<(i32, i32)> {
    let half = f64::from(CANVAS_SIZE) / 2.0;
    uv.rows()
        .into_iter()
        .map(|row| {
            let u = (row[0] - center.0) * scale + half;
            let v = (row[1] - center.1) * scale + half;
            (u.round() as i32, v.round() as i32)
        })
        .collect()
}

fn fit_to_canvas(points: ArrayView2<'_, f32>, yaw_deg: f64) -> Vec<(i32, i32)> {
    let uv = rotate(points, yaw_deg, [0.0; 3]);
    if uv.nrows() == 0 {
        return Vec::new();
    }
    let (mut min_u, mut max_u, mut min_v, mut max_v) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for row in uv.rows() {
        min_u = min_u.min(row[0]);
        max_u = max_u.max(row[0]);
        min_v = min_v.min(row[1]);
        max_v = max_v.max(row[1]);
    }
    let span = (max_u - min_u).max(max_v - min_v);
    let scale = if span > f64::EPSILON {
        FIT_MARGIN * f64::from(CANVAS_SIZE) / span
    } else {
        1.0
    };
    to_pixels(&uv, scale, ((min_u + max_u) / 2.0, (min_v + max_v) / 2.0))
}

fn metric(points: ArrayView2<'_, f32>, yaw_deg: f64, pixels_per_metre: f64, offset: [f64; 3]) -> Vec<(i32, i32)> {
    let uv = rotate(points, yaw_deg, offset);
    to_pixels(&uv, pixels_per_metre, (0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Body {
        let mut body = Body::from_points(&[[100.0, 100.0, 0.0], [100.0, 300.0, 0.0]]).unwrap();
        body.world_landmarks = Some(
            crate::body::points_to_array(&[[0.0, -0.5, 0.0], [0.0, 0.5, 0.0]]).unwrap(),
        );
        body
    }

    #[test]
    fn test_none_mode() {
        assert!(project_body(&body(), Show3d::None).is_none());
    }

    #[test]
    fn test_image_fit_stays_on_canvas() {
        let points = project_body(&body(), Show3d::Image).unwrap();
        assert_eq!(points.len(), 2);
        for (u, v) in points {
            assert!((0..CANVAS_SIZE).contains(&u));
            assert!((0..CANVAS_SIZE).contains(&v));
        }
    }

    #[test]
    fn test_world_is_metric() {
        let points = project_body(&body(), Show3d::World).unwrap();
        assert_eq!(points[1].1 - points[0].1, 180);
    }

    #[test]
    fn test_world_requires_world_landmarks() {
        let plain = Body::from_points(&[[1.0, 2.0, 3.0]]).unwrap();
        assert!(project_body(&plain, Show3d::World).is_none());
        assert!(project_body(&plain, Show3d::Mixed).is_none());
    }
}
