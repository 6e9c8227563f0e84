//! Arm angle measurement and flag-semaphore letter recognition.
//!
//! Each arm is reduced to the angle between the shoulder-to-elbow vector and
//! the image vertical axis. The angle is bucketed into one of eight 45°
//! octants and the pair of octants (right arm, left arm) is looked up in the
//! semaphore alphabet.

use crate::{
    body::Body,
    constants::{NUM_OCTANTS, OCTANT_OFFSET_DEG, OCTANT_WIDTH_DEG},
    keypoints::{LEFT_ELBOW, LEFT_SHOULDER, RIGHT_ELBOW, RIGHT_SHOULDER},
    Result,
};
use phf::phf_map;

/// Semaphore alphabet keyed by the packed octant pair, see [`flag_key`]
pub static SEMAPHORE_FLAGS: phf::Map<u8, char> = phf_map! {
    0x34_u8 => 'A',
    0x24_u8 => 'B',
    0x14_u8 => 'C',
    0x04_u8 => 'D',
    0x47_u8 => 'E',
    0x46_u8 => 'F',
    0x45_u8 => 'G',
    0x23_u8 => 'H',
    0x03_u8 => 'I',
    0x06_u8 => 'J',
    0x30_u8 => 'K',
    0x37_u8 => 'L',
    0x36_u8 => 'M',
    0x35_u8 => 'N',
    0x21_u8 => 'O',
    0x20_u8 => 'P',
    0x27_u8 => 'Q',
    0x26_u8 => 'R',
    0x25_u8 => 'S',
    0x10_u8 => 'T',
    0x17_u8 => 'U',
    0x05_u8 => 'V',
    0x76_u8 => 'W',
    0x75_u8 => 'X',
    0x16_u8 => 'Y',
    0x56_u8 => 'Z',
};

/// Pack `(right_octant, left_octant)` into one byte, right in the high nibble
#[must_use]
pub const fn flag_key(right_octant: u8, left_octant: u8) -> u8 {
    (right_octant << 4) | (left_octant & 0x0f)
}

/// Every `((right_octant, left_octant), letter)` of the alphabet
pub fn semaphore_table() -> impl Iterator<Item = ((u8, u8), char)> {
    SEMAPHORE_FLAGS
        .entries()
        .map(|(key, letter)| ((key >> 4, key & 0x0f), *letter))
}

/// Angle in degrees between `(dx, dy)` and the image y axis.
///
/// A horizontal vector (`dy == 0`) always gives 90, whatever the sign of `dx`.
#[must_use]
pub fn angle_with_y(dx: f64, dy: f64) -> f64 {
    if dy == 0.0 {
        return 90.0;
    }
    dx.atan2(dy).to_degrees()
}

/// Octant in `[0, 8)` of an angle in degrees
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn octant(angle_deg: f64) -> u8 {
    let sector = ((angle_deg + OCTANT_OFFSET_DEG) / OCTANT_WIDTH_DEG).floor();
    // rem_euclid keeps negative sectors in range; the result fits in u8
    sector.rem_euclid(f64::from(NUM_OCTANTS)) as u8
}

/// Letter for a pair of arm octants, `None` when the pair is not a letter
#[must_use]
pub fn semaphore_letter(right_octant: u8, left_octant: u8) -> Option<char> {
    if right_octant >= NUM_OCTANTS || left_octant >= NUM_OCTANTS {
        return None;
    }
    SEMAPHORE_FLAGS.get(&flag_key(right_octant, left_octant)).copied()
}

/// Arm angles and octants measured on a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    pub right_angle: f64,
    pub left_angle: f64,
    pub right_octant: u8,
    pub left_octant: u8,
}

impl ArmPose {
    /// Measure both upper arms of `body`
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKeypoint` if a shoulder or elbow is missing.
    pub fn measure(body: &Body) -> Result<Self> {
        let (rdx, rdy) = body.displacement(RIGHT_SHOULDER, RIGHT_ELBOW)?;
        let (ldx, ldy) = body.displacement(LEFT_SHOULDER, LEFT_ELBOW)?;
        let right_angle = angle_with_y(rdx, rdy);
        let left_angle = angle_with_y(ldx, ldy);
        Ok(Self {
            right_angle,
            left_angle,
            right_octant: octant(right_angle),
            left_octant: octant(left_angle),
        })
    }

    /// Letter encoded by this arm position
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        semaphore_letter(self.right_octant, self.left_octant)
    }
}

/// Recognize the semaphore letter shown by `body`
///
/// # Errors
///
/// Returns `Error::MissingKeypoint` if a shoulder or elbow is missing.
pub fn recognize_gesture(body: &Body) -> Result<Option<char>> {
    let arms = ArmPose::measure(body)?;
    log::debug!(
        "Arm angles right={:.1} left={:.1} octants=({}, {})",
        arms.right_angle,
        arms.left_angle,
        arms.right_octant,
        arms.left_octant
    );
    Ok(arms.letter())
}
