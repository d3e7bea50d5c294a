//! Canonical synthetic handshape for every letter.
//!
//! Each pose satisfies its own rule and no other, which makes them usable as
//! demo input and as fixtures for regression tests on the rule table.

use std::f32::consts::PI;

use fingerspell_core::synth::{rest_heading, FingerPose, HandPoseBuilder, UP};
use fingerspell_core::{Finger, HandLandmarks, LandmarkError};
use fingerspell_core::{INDEX_PIP, INDEX_TIP, MIDDLE_PIP};

use crate::Letter;

/// Turn that lays an upright hand on its side, index pointing along -x.
const SIDEWAYS: f32 = -1.3;

/// Thumb and four finger poses, thumb first.
fn hand(thumb: FingerPose, fingers: [FingerPose; 4]) -> HandPoseBuilder {
    let [index, middle, ring, pinky] = fingers;
    HandPoseBuilder::new()
        .finger(Finger::Thumb, thumb)
        .finger(Finger::Index, index)
        .finger(Finger::Middle, middle)
        .finger(Finger::Ring, ring)
        .finger(Finger::Pinky, pinky)
}

fn ex(f: Finger) -> FingerPose {
    FingerPose::extended(rest_heading(f))
}

fn cu(f: Finger) -> FingerPose {
    FingerPose::curved(rest_heading(f))
}

fn fo(f: Finger) -> FingerPose {
    FingerPose::folded(rest_heading(f))
}

fn up(offset: f32) -> FingerPose {
    FingerPose::extended(UP + offset)
}

/// The builder for a letter's reference pose.
pub fn reference_builder(letter: Letter) -> HandPoseBuilder {
    use Finger::{Index as I, Middle as M, Pinky as P, Ring as R};

    let across = FingerPose::thumb_across();
    let beside = FingerPose::thumb_beside();
    let out = FingerPose::thumb_out();
    let fist = [fo(I), fo(M), fo(R), fo(P)];
    let cupped = [cu(I), cu(M), cu(R), cu(P)];
    let pointer = [ex(I), fo(M), fo(R), fo(P)];
    let two_up = [up(0.0), up(0.0), fo(R), fo(P)];
    // index and middle in a V with the thumb on the middle finger
    let k_shape = [FingerPose::extended(-1.4), FingerPose::extended(-1.75), fo(R), fo(P)];

    match letter {
        Letter::A => hand(beside, fist),
        Letter::B => hand(across, [up(0.0); 4]),
        Letter::C => hand(FingerPose::new(-0.9, 0.0, 2.9), cupped),
        Letter::D => hand(across, pointer),
        Letter::E => hand(across, cupped),
        Letter::F => hand(beside, [cu(I), ex(M), ex(R), ex(P)]).thumb_touching(INDEX_TIP),
        Letter::G => hand(out, pointer).rotated(SIDEWAYS),
        Letter::H => hand(across, two_up).rotated(SIDEWAYS),
        Letter::I => hand(across, [fo(I), fo(M), fo(R), ex(P)]),
        Letter::J => hand(across, [fo(I), fo(M), fo(R), ex(P)]).rotated(1.2),
        Letter::K => hand(beside, k_shape).thumb_touching(MIDDLE_PIP),
        Letter::L => hand(out, pointer),
        Letter::M => hand(across, [cu(I), cu(M), cu(R), fo(P)]),
        Letter::N => hand(across, [cu(I), cu(M), fo(R), fo(P)]),
        Letter::O => hand(beside, cupped).thumb_touching(INDEX_TIP),
        Letter::P => hand(beside, k_shape)
            .thumb_touching(MIDDLE_PIP)
            .rotated(PI),
        Letter::Q => hand(out, pointer).rotated(PI),
        Letter::R => hand(across, [up(-0.15), up(0.15), fo(R), fo(P)]),
        Letter::S => hand(across, fist),
        Letter::T => hand(across, [cu(I), fo(M), fo(R), fo(P)]).thumb_touching(INDEX_PIP),
        Letter::U => hand(across, two_up),
        Letter::V => hand(
            across,
            [FingerPose::extended(-1.2), FingerPose::extended(-1.95), fo(R), fo(P)],
        ),
        Letter::W => hand(
            across,
            [
                FingerPose::extended(-1.2),
                up(0.0),
                FingerPose::extended(-1.95),
                fo(P),
            ],
        ),
        Letter::X => hand(beside, [cu(I), fo(M), fo(R), fo(P)]),
        Letter::Y => hand(out, [fo(I), fo(M), fo(R), up(-0.4)]),
        Letter::Z => hand(across, pointer).rotated(SIDEWAYS),
    }
}

/// Landmarks of a letter's reference pose.
pub fn reference_pose(letter: Letter) -> Result<HandLandmarks, LandmarkError> {
    reference_builder(letter).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerspell_core::{analyze, normalize, FingerParams, HAND_LANDMARK_COUNT};

    #[test]
    fn every_letter_builds_a_measurable_hand() {
        for letter in Letter::ALL {
            let landmarks = reference_pose(letter).unwrap();
            assert_eq!(landmarks.points().len(), HAND_LANDMARK_COUNT);
            let hand = normalize(&landmarks).unwrap();
            analyze(&hand, &FingerParams::default()).unwrap();
        }
    }

    #[test]
    fn turned_letters_keep_the_wrist_in_place() {
        let wrist = |l| reference_pose(l).unwrap().point(fingerspell_core::WRIST);
        for letter in [Letter::G, Letter::H, Letter::J, Letter::P, Letter::Q, Letter::Z] {
            assert_eq!(wrist(letter), wrist(Letter::A), "{letter}");
        }
    }
}
