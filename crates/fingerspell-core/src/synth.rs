//! Synthetic hand poses.
//!
//! Builds a plausible 21-landmark hand from a per-finger description instead
//! of camera data. Used to produce reference handshapes and to exercise the
//! classifier without a detector.
//!
//! The model is a right hand, palm toward the camera, wrist at the bottom of
//! the image: the thumb sits on the high-x side and the pinky on the low-x
//! side. Image y grows downwards and z shrinks towards the camera, so fingers
//! curl into negative z.

use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra::{Point3, Vector3};

use crate::{Finger, HandLandmarks, LandmarkError, LandmarkPoint, HAND_LANDMARK_COUNT};
use crate::{THUMB_TIP, WRIST};

const WRIST_POS: [f32; 3] = [0.52, 0.90, 0.0];

/// Offset applied when the thumb tip is placed against another joint.
const CONTACT_OFFSET: f32 = 0.004;

/// In-plane heading pointing straight up the image.
pub const UP: f32 = -FRAC_PI_2;

/// Posture of one finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerPose {
    /// Direction of the first segment in the image plane (radians, 0 = +x,
    /// `-π/2` = up).
    pub heading: f32,
    /// Tilt of the first segment towards the camera (radians).
    pub pitch: f32,
    /// Interior angle at the middle joint; `π` is straight.
    pub bend: f32,
}

impl FingerPose {
    pub const fn new(heading: f32, pitch: f32, bend: f32) -> Self {
        Self {
            heading,
            pitch,
            bend,
        }
    }

    pub const fn extended(heading: f32) -> Self {
        Self::new(heading, 0.0, PI)
    }

    pub const fn curved(heading: f32) -> Self {
        Self::new(heading, 0.5, 2.15)
    }

    pub const fn folded(heading: f32) -> Self {
        Self::new(heading, 1.2, 1.0)
    }

    /// Thumb held straight along the side of the index finger.
    pub const fn thumb_beside() -> Self {
        Self::new(-1.35, 0.0, 3.0)
    }

    /// Thumb stuck out away from the palm.
    pub const fn thumb_out() -> Self {
        Self::new(-0.3, 0.0, 3.0)
    }

    /// Thumb bent over the palm.
    pub const fn thumb_across() -> Self {
        Self::new(-2.5, 0.0, 1.9)
    }

    /// Unit vector of the first segment.
    fn proximal(&self) -> Vector3<f32> {
        let (sp, cp) = self.pitch.sin_cos();
        let (sh, ch) = self.heading.sin_cos();
        Vector3::new(cp * ch, cp * sh, -sp)
    }

    /// Unit vector of the segments past the middle joint.
    fn distal(&self) -> Vector3<f32> {
        let (sp, cp) = self.pitch.sin_cos();
        let (sh, ch) = self.heading.sin_cos();
        // perpendicular to `proximal`, on the palm side
        let palmward = Vector3::new(-sp * ch, -sp * sh, -cp);
        let (sf, cf) = (PI - self.bend).sin_cos();
        self.proximal() * cf + palmward * sf
    }
}

/// Resting in-plane heading of each finger in an open, slightly splayed hand.
pub fn rest_heading(finger: Finger) -> f32 {
    match finger {
        Finger::Thumb => -0.6,
        Finger::Index => UP + 0.07,
        Finger::Middle => UP,
        Finger::Ring => UP - 0.07,
        Finger::Pinky => UP - 0.14,
    }
}

/// Anchor (thumb CMC or finger MCP) and the three segment lengths.
fn skeleton(finger: Finger) -> ([f32; 3], [f32; 3]) {
    match finger {
        Finger::Thumb => ([0.60, 0.85, 0.0], [0.07, 0.05, 0.045]),
        Finger::Index => ([0.60, 0.62, 0.0], [0.10, 0.06, 0.05]),
        Finger::Middle => ([0.555, 0.61, 0.0], [0.108, 0.065, 0.054]),
        Finger::Ring => ([0.51, 0.63, 0.0], [0.10, 0.06, 0.05]),
        Finger::Pinky => ([0.465, 0.66, 0.0], [0.08, 0.048, 0.04]),
    }
}

/// Builder for synthetic [`HandLandmarks`].
#[derive(Clone, Debug, PartialEq)]
pub struct HandPoseBuilder {
    poses: [FingerPose; 5],
    thumb_contact: Option<usize>,
    rotation: f32,
}

impl Default for HandPoseBuilder {
    /// Open palm, all fingers extended.
    fn default() -> Self {
        Self {
            poses: Finger::ALL.map(|f| FingerPose::extended(rest_heading(f))),
            thumb_contact: None,
            rotation: 0.0,
        }
    }
}

impl HandPoseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finger(mut self, finger: Finger, pose: FingerPose) -> Self {
        self.poses[finger.index()] = pose;
        self
    }

    /// Extend, curve or fold a finger at its resting heading.
    pub fn extended(self, finger: Finger) -> Self {
        self.finger(finger, FingerPose::extended(rest_heading(finger)))
    }

    pub fn curved(self, finger: Finger) -> Self {
        self.finger(finger, FingerPose::curved(rest_heading(finger)))
    }

    pub fn folded(self, finger: Finger) -> Self {
        self.finger(finger, FingerPose::folded(rest_heading(finger)))
    }

    /// Move the thumb tip onto the given landmark.
    pub fn thumb_touching(mut self, joint: usize) -> Self {
        self.thumb_contact = Some(joint);
        self
    }

    /// Rotate the finished hand in the image plane about the wrist.
    pub fn rotated(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn build(&self) -> Result<HandLandmarks, LandmarkError> {
        let mut pts = [Point3::origin(); HAND_LANDMARK_COUNT];
        pts[WRIST] = Point3::from(WRIST_POS);

        for finger in Finger::ALL {
            let pose = &self.poses[finger.index()];
            let (anchor, [l1, l2, l3]) = skeleton(finger);
            let anchor = Point3::from(anchor);
            let d1 = pose.proximal();
            let d2 = pose.distal();
            let first = finger.base();
            let chain = if finger == Finger::Thumb {
                // CMC -> MCP -> IP stay on one line so the measured bend is
                // the IP bend
                let mcp = anchor + d1 * l1;
                let ip = mcp + d1 * l2;
                [anchor, mcp, ip, ip + d2 * l3]
            } else {
                let pip = anchor + d1 * l1;
                let dip = pip + d2 * l2;
                [anchor, pip, dip, dip + d2 * l3]
            };
            pts[first..first + 4].copy_from_slice(&chain);
        }

        if let Some(joint) = self.thumb_contact {
            let target = pts[joint];
            pts[THUMB_TIP] = Point3::new(
                target.x + CONTACT_OFFSET,
                target.y + CONTACT_OFFSET,
                target.z,
            );
        }

        if self.rotation != 0.0 {
            let (s, c) = self.rotation.sin_cos();
            let w = pts[WRIST];
            for p in pts.iter_mut() {
                let dx = p.x - w.x;
                let dy = p.y - w.y;
                p.x = w.x + c * dx - s * dy;
                p.y = w.y + s * dx + c * dy;
            }
        }

        HandLandmarks::new(pts.map(LandmarkPoint::from_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, normalize, FingerParams};
    use approx::assert_relative_eq;

    #[test]
    fn bend_survives_construction_without_rotation_or_scale() {
        let hand = HandPoseBuilder::new()
            .finger(Finger::Index, FingerPose::new(UP, 0.3, 2.0))
            .build()
            .unwrap();
        // measure before normalization: depth and image axes share units here
        let p = |i| hand.point(i);
        let a = p(6).to(p(5));
        let b = p(6).to(p(8));
        let angle = (a.dot(&b) / (a.norm() * b.norm())).acos();
        assert_relative_eq!(angle, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn open_palm_reads_all_extended() {
        let hand = HandPoseBuilder::new().build().unwrap();
        let m = analyze(&normalize(&hand).unwrap(), &FingerParams::default()).unwrap();
        for (finger, metric) in m.iter() {
            assert!(metric.extended, "{finger:?} angle {}", metric.angle);
        }
    }

    #[test]
    fn folded_fingertips_drop_below_knuckles() {
        let hand = HandPoseBuilder::new()
            .folded(Finger::Index)
            .folded(Finger::Middle)
            .folded(Finger::Ring)
            .folded(Finger::Pinky)
            .build()
            .unwrap();
        for finger in &Finger::ALL[1..] {
            assert!(hand.point(finger.tip()).y > hand.point(finger.base()).y);
        }
    }

    #[test]
    fn rotation_keeps_the_wrist_fixed() {
        let hand = HandPoseBuilder::new().rotated(1.0).build().unwrap();
        assert_eq!(hand.point(WRIST), LandmarkPoint::new(0.52, 0.90, 0.0));
    }
}
