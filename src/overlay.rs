//! Text annotations drawn on top of the rendered frame.

use crate::{config::DisplayConfig, joint_angles::JointAngle, Result};
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc::{self, FONT_HERSHEY_PLAIN, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};

/// Label origins for `count` lines on a frame `frame_width` pixels wide
#[must_use]
pub fn label_positions(frame_width: i32, count: usize, display: &DisplayConfig) -> Vec<Point> {
    let x = frame_width - display.label_right_offset;
    (0..count)
        .scan(display.label_start_y, |y, _| {
            let point = Point::new(x, *y);
            *y += display.label_line_step;
            Some(point)
        })
        .collect()
}

/// Draw one green label per joint angle, stacked from the top right
///
/// # Errors
///
/// Returns an error if `OpenCV` fails to draw.
pub fn draw_joint_angles(frame: &mut Mat, angles: &[JointAngle], display: &DisplayConfig) -> Result<()> {
    let positions = label_positions(frame.cols(), angles.len(), display);
    for (angle, origin) in angles.iter().zip(positions) {
        imgproc::put_text(
            frame,
            &angle.to_string(),
            origin,
            FONT_HERSHEY_PLAIN,
            1.0,
            Scalar::new(0.0, 255.0, 0.0, 0.0),
            2,
            LINE_8,
            false,
        )?;
    }
    Ok(())
}

/// Draw a recognized semaphore letter in the top left corner
///
/// # Errors
///
/// Returns an error if `OpenCV` fails to draw.
pub fn draw_letter(frame: &mut Mat, letter: char) -> Result<()> {
    imgproc::put_text(
        frame,
        &letter.to_string(),
        Point::new(50, 120),
        FONT_HERSHEY_SIMPLEX,
        3.0,
        Scalar::new(0.0, 165.0, 255.0, 0.0),
        6,
        LINE_8,
        false,
    )?;
    Ok(())
}
