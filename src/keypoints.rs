//! Static keypoint name/index tables for the 33-point body model.
//!
//! Name to index goes through a compile-time perfect hash map; index to name
//! is a plain array lookup. Both tables live for the whole process and are
//! never mutated.

use crate::constants::NUM_BODY_LANDMARKS;
use phf::phf_map;

/// Keypoint names ordered by landmark index
pub const KEYPOINT_NAMES: [&str; NUM_BODY_LANDMARKS] = [
    "nose",
    "left_eye_inner",
    "left_eye",
    "left_eye_outer",
    "right_eye_inner",
    "right_eye",
    "right_eye_outer",
    "left_ear",
    "right_ear",
    "mouth_left",
    "mouth_right",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_pinky",
    "right_pinky",
    "left_index",
    "right_index",
    "left_thumb",
    "right_thumb",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
    "left_heel",
    "right_heel",
    "left_foot_index",
    "right_foot_index",
];

static KEYPOINT_DICT: phf::Map<&'static str, usize> = phf_map! {
    "nose" => 0,
    "left_eye_inner" => 1,
    "left_eye" => 2,
    "left_eye_outer" => 3,
    "right_eye_inner" => 4,
    "right_eye" => 5,
    "right_eye_outer" => 6,
    "left_ear" => 7,
    "right_ear" => 8,
    "mouth_left" => 9,
    "mouth_right" => 10,
    "left_shoulder" => 11,
    "right_shoulder" => 12,
    "left_elbow" => 13,
    "right_elbow" => 14,
    "left_wrist" => 15,
    "right_wrist" => 16,
    "left_pinky" => 17,
    "right_pinky" => 18,
    "left_index" => 19,
    "right_index" => 20,
    "left_thumb" => 21,
    "right_thumb" => 22,
    "left_hip" => 23,
    "right_hip" => 24,
    "left_knee" => 25,
    "right_knee" => 26,
    "left_ankle" => 27,
    "right_ankle" => 28,
    "left_heel" => 29,
    "right_heel" => 30,
    "left_foot_index" => 31,
    "right_foot_index" => 32,
};

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;

/// Landmark index of a keypoint name
#[must_use]
pub fn keypoint_index(name: &str) -> Option<usize> {
    KEYPOINT_DICT.get(name).copied()
}

/// Keypoint name of a landmark index
#[must_use]
pub fn keypoint_name(index: usize) -> Option<&'static str> {
    KEYPOINT_NAMES.get(index).copied()
}

/// Which side of the body a keypoint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySide {
    Left,
    Right,
    Center,
}

/// Side of the body for a landmark index
#[must_use]
pub fn body_side(index: usize) -> BodySide {
    match keypoint_name(index) {
        Some(name) if name.starts_with("left_") || name == "mouth_left" => BodySide::Left,
        Some(name) if name.starts_with("right_") || name == "mouth_right" => BodySide::Right,
        _ => BodySide::Center,
    }
}

/// Skeleton connections drawn between landmarks
pub const BODY_CONNECTIONS: [[usize; 2]; 35] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 7],
    [0, 4],
    [4, 5],
    [5, 6],
    [6, 8],
    [9, 10],
    [11, 12],
    [11, 13],
    [13, 15],
    [15, 17],
    [15, 19],
    [15, 21],
    [17, 19],
    [12, 14],
    [14, 16],
    [16, 18],
    [16, 20],
    [16, 22],
    [18, 20],
    [11, 23],
    [12, 24],
    [23, 24],
    [23, 25],
    [24, 26],
    [25, 27],
    [26, 28],
    [27, 29],
    [28, 30],
    [29, 31],
    [30, 32],
    [27, 31],
    [28, 32],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_index_round_trip() {
        for (index, name) in KEYPOINT_NAMES.iter().enumerate() {
            assert_eq!(keypoint_index(name), Some(index));
            assert_eq!(keypoint_name(index), Some(*name));
        }
        assert_eq!(KEYPOINT_DICT.len(), NUM_BODY_LANDMARKS);
    }

    #[test]
    fn test_unknown_keypoint() {
        assert_eq!(keypoint_index("tail"), None);
        assert_eq!(keypoint_name(NUM_BODY_LANDMARKS), None);
    }

    #[test]
    fn test_arm_constants_match_table() {
        assert_eq!(keypoint_index("left_shoulder"), Some(LEFT_SHOULDER));
        assert_eq!(keypoint_index("right_shoulder"), Some(RIGHT_SHOULDER));
        assert_eq!(keypoint_index("left_elbow"), Some(LEFT_ELBOW));
        assert_eq!(keypoint_index("right_elbow"), Some(RIGHT_ELBOW));
    }

    #[test]
    fn test_body_side() {
        assert_eq!(body_side(0), BodySide::Center);
        assert_eq!(body_side(LEFT_ELBOW), BodySide::Left);
        assert_eq!(body_side(RIGHT_ELBOW), BodySide::Right);
        assert_eq!(body_side(9), BodySide::Left);
        assert_eq!(body_side(99), BodySide::Center);
    }

    #[test]
    fn test_connections_in_range() {
        for [a, b] in BODY_CONNECTIONS {
            assert!(a < NUM_BODY_LANDMARKS && b < NUM_BODY_LANDMARKS);
            assert_ne!(a, b);
        }
    }
}
