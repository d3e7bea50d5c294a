//! Hand-size and position normalization.
//!
//! Raw detector coordinates are relative to the camera image, so a hand close
//! to the lens spans most of `[0, 1]` while a distant hand spans a small
//! corner of it. Every distance threshold downstream assumes the normalized
//! frame produced here: the bounding box center moves to `(0.5, 0.5)` and the
//! larger box side becomes `1`.
//!
//! Depth is left untouched. Orientation is deliberately *not* normalized;
//! several letters differ only by which way the hand points.

use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{HandLandmarks, LandmarkError, LandmarkPoint, HAND_LANDMARK_COUNT};

/// A hand frame in the scale- and translation-invariant coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedHand {
    points: [LandmarkPoint; HAND_LANDMARK_COUNT],
}

impl NormalizedHand {
    #[inline]
    pub fn points(&self) -> &[LandmarkPoint; HAND_LANDMARK_COUNT] {
        &self.points
    }

    #[inline]
    pub fn point(&self, index: usize) -> LandmarkPoint {
        self.points[index]
    }
}

/// Axis-aligned x/y bounds of a landmark set.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Bounds {
    fn of(points: &[LandmarkPoint]) -> Self {
        points.iter().fold(
            Bounds {
                min_x: f32::INFINITY,
                max_x: f32::NEG_INFINITY,
                min_y: f32::INFINITY,
                max_y: f32::NEG_INFINITY,
            },
            |b, p| Bounds {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        )
    }

    fn size(&self) -> f32 {
        (self.max_x - self.min_x).max(self.max_y - self.min_y)
    }

    fn center(&self) -> (f32, f32) {
        (
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }
}

/// Map a validated hand into the normalized frame.
///
/// Fails with [`LandmarkError::DegenerateBounds`] when all points share one
/// x/y location (a measurement artifact, never a real hand).
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(hand)))]
pub fn normalize(hand: &HandLandmarks) -> Result<NormalizedHand, LandmarkError> {
    let bounds = Bounds::of(hand.points());
    let size = bounds.size();
    if size <= 0.0 {
        return Err(LandmarkError::DegenerateBounds);
    }
    let (cx, cy) = bounds.center();

    let points = std::array::from_fn(|i| {
        let p = hand.point(i);
        LandmarkPoint::new((p.x - cx) / size + 0.5, (p.y - cy) / size + 0.5, p.z)
    });

    Ok(NormalizedHand { points })
}
