//! Hand landmark primitives: points, joint indices, fingers and validated frames.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::LandmarkError;

/// Number of landmarks the hand detector reports for one hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One tracked joint in detector-native coordinates.
///
/// `x`/`y` are image-relative in `[0, 1]` (y grows downwards), `z` is a
/// relative depth estimate where smaller means closer to the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_point(self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_point(p: Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn to(self, other: LandmarkPoint) -> Vector3<f32> {
        other.to_point() - self.to_point()
    }

    /// Euclidean distance in all three coordinates.
    #[inline]
    pub fn distance(self, other: LandmarkPoint) -> f32 {
        self.to(other).norm()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// The five digits, thumb first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position of this finger in [`Finger::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Landmark indices `(base, middle joint, tip)` used to measure the bend.
    ///
    /// Long fingers use MCP/PIP/tip. The thumb uses CMC/IP/tip, which spans
    /// the same anatomical role.
    pub fn joints(self) -> [usize; 3] {
        match self {
            Finger::Thumb => [THUMB_CMC, THUMB_IP, THUMB_TIP],
            Finger::Index => [INDEX_MCP, INDEX_PIP, INDEX_TIP],
            Finger::Middle => [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP],
            Finger::Ring => [RING_MCP, RING_PIP, RING_TIP],
            Finger::Pinky => [PINKY_MCP, PINKY_PIP, PINKY_TIP],
        }
    }

    #[inline]
    pub fn base(self) -> usize {
        self.joints()[0]
    }

    #[inline]
    pub fn mid(self) -> usize {
        self.joints()[1]
    }

    #[inline]
    pub fn tip(self) -> usize {
        self.joints()[2]
    }
}

/// Exactly one hand worth of landmarks, checked for count and finiteness.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HandLandmarks {
    points: [LandmarkPoint; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Wrap a fixed array. Non-finite coordinates are rejected.
    pub fn new(points: [LandmarkPoint; HAND_LANDMARK_COUNT]) -> Result<Self, LandmarkError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Validate a detector slice. Any length other than 21 is rejected outright.
    pub fn from_slice(points: &[LandmarkPoint]) -> Result<Self, LandmarkError> {
        let points: [LandmarkPoint; HAND_LANDMARK_COUNT] =
            points.try_into().map_err(|_| LandmarkError::WrongCount {
                expected: HAND_LANDMARK_COUNT,
                got: points.len(),
            })?;
        Self::new(points)
    }

    #[inline]
    pub fn points(&self) -> &[LandmarkPoint; HAND_LANDMARK_COUNT] {
        &self.points
    }

    #[inline]
    pub fn point(&self, index: usize) -> LandmarkPoint {
        self.points[index]
    }

    pub fn into_vec(self) -> Vec<LandmarkPoint> {
        self.points.to_vec()
    }
}

impl TryFrom<&[LandmarkPoint]> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: &[LandmarkPoint]) -> Result<Self, Self::Error> {
        Self::from_slice(points)
    }
}
