//! Reusable geometric tests over a normalized hand.
//!
//! All distances are in the normalized frame, where the hand's larger bounding
//! box side is `1`. One proximity threshold drives every distance test.

use serde::{Deserialize, Serialize};

use crate::{Finger, FingerMetric, HandMetrics, LandmarkPoint, NormalizedHand};
use crate::{INDEX_MCP, PINKY_MCP, THUMB_TIP, WRIST};

/// Distance threshold shared by the proximity predicates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredicateParams {
    /// `T`: points closer than this touch, tips closer than this along x are
    /// adjacent, tips farther than `2T` along x are spread.
    pub proximity: f32,
}

impl Default for PredicateParams {
    fn default() -> Self {
        Self { proximity: 0.12 }
    }
}

/// Coarse pointing direction of a finger in the image plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Up,
    Down,
    Sideways,
}

#[inline]
pub fn touching(a: LandmarkPoint, b: LandmarkPoint, proximity: f32) -> bool {
    a.distance(b) < proximity
}

#[inline]
pub fn adjacent(tip_a: LandmarkPoint, tip_b: LandmarkPoint, proximity: f32) -> bool {
    (tip_a.x - tip_b.x).abs() < proximity
}

#[inline]
pub fn spread(tip_a: LandmarkPoint, tip_b: LandmarkPoint, proximity: f32) -> bool {
    (tip_a.x - tip_b.x).abs() > 2.0 * proximity
}

/// Palm direction (wrist to the middle of the index/pinky knuckles) is
/// closer to the image y axis than to the x axis.
pub fn is_hand_vertical(hand: &NormalizedHand) -> bool {
    let wrist = hand.point(WRIST);
    let index = hand.point(INDEX_MCP);
    let pinky = hand.point(PINKY_MCP);
    let dx = 0.5 * (index.x + pinky.x) - wrist.x;
    let dy = 0.5 * (index.y + pinky.y) - wrist.y;
    dy.abs() > dx.abs()
}

/// Thumb tip lies on the palm side of the index knuckle.
pub fn thumb_across_palm(hand: &NormalizedHand) -> bool {
    hand.point(THUMB_TIP).x < hand.point(INDEX_MCP).x
}

/// Tips of `a` and `b` are ordered along x opposite to their bases.
pub fn crossed(hand: &NormalizedHand, a: Finger, b: Finger) -> bool {
    let tips = hand.point(a.tip()).x - hand.point(b.tip()).x;
    let bases = hand.point(a.base()).x - hand.point(b.base()).x;
    tips * bases < 0.0
}

/// Classify the finger's `direction` into up, down or sideways.
pub fn pointing(metric: &FingerMetric, heading: Heading) -> bool {
    let dx = metric.direction.x;
    let dy = metric.direction.y;
    match heading {
        Heading::Up => -dy > dx.abs(),
        Heading::Down => dy > dx.abs(),
        Heading::Sideways => dx.abs() >= dy.abs(),
    }
}

/// A normalized hand plus its metrics, queried by finger or joint.
#[derive(Clone, Copy, Debug)]
pub struct HandPredicates<'a> {
    hand: &'a NormalizedHand,
    metrics: &'a HandMetrics,
    params: &'a PredicateParams,
}

impl<'a> HandPredicates<'a> {
    pub fn new(
        hand: &'a NormalizedHand,
        metrics: &'a HandMetrics,
        params: &'a PredicateParams,
    ) -> Self {
        Self {
            hand,
            metrics,
            params,
        }
    }

    pub fn hand(&self) -> &'a NormalizedHand {
        self.hand
    }

    pub fn metrics(&self) -> &'a HandMetrics {
        self.metrics
    }

    /// Joints `a` and `b` (landmark indices) touch in 3-D.
    pub fn touching(&self, a: usize, b: usize) -> bool {
        touching(self.hand.point(a), self.hand.point(b), self.params.proximity)
    }

    pub fn adjacent(&self, a: Finger, b: Finger) -> bool {
        adjacent(
            self.hand.point(a.tip()),
            self.hand.point(b.tip()),
            self.params.proximity,
        )
    }

    pub fn spread(&self, a: Finger, b: Finger) -> bool {
        spread(
            self.hand.point(a.tip()),
            self.hand.point(b.tip()),
            self.params.proximity,
        )
    }

    pub fn is_hand_vertical(&self) -> bool {
        is_hand_vertical(self.hand)
    }

    pub fn thumb_across_palm(&self) -> bool {
        thumb_across_palm(self.hand)
    }

    pub fn crossed(&self, a: Finger, b: Finger) -> bool {
        crossed(self.hand, a, b)
    }

    pub fn pointing(&self, finger: Finger, heading: Heading) -> bool {
        pointing(&self.metrics[finger], heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FingerParams;
    use nalgebra::Vector3;

    fn p(x: f32, y: f32) -> LandmarkPoint {
        LandmarkPoint::new(x, y, 0.0)
    }

    #[test]
    fn distance_predicates_use_one_threshold() {
        let t = 0.12;
        assert!(touching(p(0.5, 0.5), p(0.55, 0.55), t));
        assert!(!touching(p(0.5, 0.5), p(0.5, 0.63), t));
        assert!(!touching(
            LandmarkPoint::new(0.5, 0.5, 0.0),
            LandmarkPoint::new(0.5, 0.5, 0.2),
            t
        ));

        assert!(adjacent(p(0.50, 0.1), p(0.58, 0.9), t));
        assert!(!adjacent(p(0.50, 0.5), p(0.63, 0.5), t));
        assert!(spread(p(0.30, 0.5), p(0.56, 0.5), t));
        assert!(!spread(p(0.30, 0.5), p(0.50, 0.5), t));
    }

    #[test]
    fn pointing_splits_the_plane() {
        let params = FingerParams::default();
        let up = FingerMetric::from_angle(3.1, Vector3::new(0.1, -0.9, 0.0), &params);
        let down = FingerMetric::from_angle(3.1, Vector3::new(-0.2, 0.7, 0.3), &params);
        let side = FingerMetric::from_angle(3.1, Vector3::new(-0.8, 0.3, 0.0), &params);
        assert!(pointing(&up, Heading::Up) && !pointing(&up, Heading::Sideways));
        assert!(pointing(&down, Heading::Down) && !pointing(&down, Heading::Up));
        assert!(pointing(&side, Heading::Sideways) && !pointing(&side, Heading::Down));
    }
}
