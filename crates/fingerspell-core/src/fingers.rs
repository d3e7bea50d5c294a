//! Per-finger bend measurement.
//!
//! Each finger is reduced to the interior angle at its middle joint: the angle
//! between `base - mid` and `tip - mid`. A straight finger reads close to `π`
//! no matter which way it points or how long it is, which is what lets the
//! letter rules ignore hand rotation for the extended/curled decision.

use std::ops::Index;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Finger, LandmarkError, NormalizedHand};

/// Angle thresholds (radians) turning a bend angle into posture flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerParams {
    /// Strictly above this angle a finger counts as extended (~155°).
    pub extended_min_angle: f32,
    /// Lower bound (exclusive) of the curved band; at or below it the finger is folded.
    pub curved_min_angle: f32,
    /// Upper bound (exclusive) of the curved band and of "curled" in general.
    pub curved_max_angle: f32,
    /// Segments shorter than this are treated as collapsed joints.
    pub min_segment_length: f32,
}

impl Default for FingerParams {
    fn default() -> Self {
        Self {
            extended_min_angle: 2.7,
            curved_min_angle: 1.5,
            curved_max_angle: 2.5,
            min_segment_length: 1e-6,
        }
    }
}

/// Posture of one finger in one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FingerMetric {
    /// Interior angle at the middle joint, in `[0, π]`.
    pub angle: f32,
    /// `tip - base` in normalized coordinates.
    pub direction: Vector3<f32>,
    pub extended: bool,
    /// Bent part-way, as in a C or O handshape.
    pub curved: bool,
    /// Anything clearly bent: curved or folded.
    pub curled: bool,
    /// Bent past the curved band, as in a fist.
    pub folded: bool,
}

impl FingerMetric {
    /// Derive the posture flags for a measured angle.
    ///
    /// Angles in the gap between `curved_max_angle` and `extended_min_angle`
    /// are neither extended nor curled.
    pub fn from_angle(angle: f32, direction: Vector3<f32>, params: &FingerParams) -> Self {
        Self {
            angle,
            direction,
            extended: angle > params.extended_min_angle,
            curved: angle > params.curved_min_angle && angle < params.curved_max_angle,
            curled: angle < params.curved_max_angle,
            folded: angle <= params.curved_min_angle,
        }
    }
}

/// Metrics for all five fingers, indexed by [`Finger`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandMetrics {
    fingers: [FingerMetric; 5],
}

impl HandMetrics {
    /// Build from metrics ordered as [`Finger::ALL`].
    pub fn from_fingers(fingers: [FingerMetric; 5]) -> Self {
        Self { fingers }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Finger, &FingerMetric)> {
        Finger::ALL.into_iter().zip(self.fingers.iter())
    }
}

impl Index<Finger> for HandMetrics {
    type Output = FingerMetric;

    fn index(&self, finger: Finger) -> &FingerMetric {
        &self.fingers[finger.index()]
    }
}

/// Interior angle between `a` and `b`, or `None` if either is too short.
fn interior_angle(a: &Vector3<f32>, b: &Vector3<f32>, min_len: f32) -> Option<f32> {
    let la = a.norm();
    let lb = b.norm();
    if la < min_len || lb < min_len {
        return None;
    }
    let cos = (a.dot(b) / (la * lb)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Measure one finger.
pub fn analyze_finger(
    hand: &NormalizedHand,
    finger: Finger,
    params: &FingerParams,
) -> Result<FingerMetric, LandmarkError> {
    let [base, mid, tip] = finger.joints().map(|i| hand.point(i));
    let to_base = mid.to(base);
    let to_tip = mid.to(tip);
    let angle = interior_angle(&to_base, &to_tip, params.min_segment_length)
        .ok_or(LandmarkError::DegenerateFinger { finger })?;
    Ok(FingerMetric::from_angle(angle, base.to(tip), params))
}

/// Measure all five fingers. Any collapsed finger rejects the whole frame.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(hand, params)))]
pub fn analyze(hand: &NormalizedHand, params: &FingerParams) -> Result<HandMetrics, LandmarkError> {
    let mut fingers = [FingerMetric::from_angle(0.0, Vector3::zeros(), params); 5];
    for finger in Finger::ALL {
        fingers[finger.index()] = analyze_finger(hand, finger, params)?;
    }
    Ok(HandMetrics { fingers })
}
