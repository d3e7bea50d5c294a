//! The per-letter rule table.
//!
//! Every letter is a conjunction of a posture requirement for each of the five
//! fingers and a short list of geometric checks that separate it from its
//! look-alikes. Rules are data; evaluation lives in the classifier.

use fingerspell_core::{Finger, FingerMetric, HandPredicates, Heading};
use fingerspell_core::{INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, THUMB_TIP};
use serde::Serialize;

use crate::Letter;

/// Required posture of one finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerState {
    Extended,
    /// Curved or folded.
    Curled,
    Curved,
    Folded,
    Any,
}

impl FingerState {
    pub fn matches(self, metric: &FingerMetric) -> bool {
        match self {
            FingerState::Extended => metric.extended,
            FingerState::Curled => metric.curled,
            FingerState::Curved => metric.curved,
            FingerState::Folded => metric.folded,
            FingerState::Any => true,
        }
    }
}

/// One geometric condition of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Palm points along the image y axis.
    Upright,
    /// Palm points along the image x axis.
    Tilted,
    ThumbAcrossPalm,
    ThumbBesidePalm,
    /// Two landmarks (by index) touch.
    Touching(usize, usize),
    /// Two landmarks (by index) do not touch.
    Apart(usize, usize),
    Adjacent(Finger, Finger),
    /// Adjacent and not crossed.
    Together(Finger, Finger),
    Spread(Finger, Finger),
    Crossed(Finger, Finger),
    Pointing(Finger, Heading),
}

impl Check {
    pub fn holds(self, p: &HandPredicates<'_>) -> bool {
        match self {
            Check::Upright => p.is_hand_vertical(),
            Check::Tilted => !p.is_hand_vertical(),
            Check::ThumbAcrossPalm => p.thumb_across_palm(),
            Check::ThumbBesidePalm => !p.thumb_across_palm(),
            Check::Touching(a, b) => p.touching(a, b),
            Check::Apart(a, b) => !p.touching(a, b),
            Check::Adjacent(a, b) => p.adjacent(a, b),
            Check::Together(a, b) => p.adjacent(a, b) && !p.crossed(a, b),
            Check::Spread(a, b) => p.spread(a, b),
            Check::Crossed(a, b) => p.crossed(a, b),
            Check::Pointing(f, h) => p.pointing(f, h),
        }
    }
}

/// Rule for one letter: finger postures in [`Finger::ALL`] order plus checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LetterRule {
    pub letter: Letter,
    pub fingers: [FingerState; 5],
    pub checks: &'static [Check],
}

use Finger::{Index, Middle, Pinky, Ring, Thumb};
use FingerState::{Any, Curled as Cl, Curved as Cv, Extended as Ex, Folded as Fo};

const THUMB_BESIDE: Check = Check::ThumbBesidePalm;
const THUMB_ACROSS: Check = Check::ThumbAcrossPalm;
const UPRIGHT: Check = Check::Upright;

/// Rule for `letter`. J and Z are motion letters; their rules match the
/// final static handshape only.
pub fn rule_for(letter: Letter) -> LetterRule {
    let (fingers, checks): ([FingerState; 5], &'static [Check]) = match letter {
        //            thumb index middle ring pinky
        Letter::A => (
            [Ex, Fo, Fo, Fo, Fo],
            &[UPRIGHT, THUMB_BESIDE, Check::Apart(THUMB_TIP, INDEX_PIP)],
        ),
        Letter::B => (
            [Cl, Ex, Ex, Ex, Ex],
            &[UPRIGHT, Check::Adjacent(Index, Middle), THUMB_ACROSS],
        ),
        Letter::C => (
            [Any, Cv, Cv, Cv, Cv],
            &[Check::Apart(THUMB_TIP, INDEX_TIP), THUMB_BESIDE],
        ),
        Letter::D => (
            [Any, Ex, Cl, Cl, Cl],
            &[UPRIGHT, Check::Pointing(Index, Heading::Up), THUMB_ACROSS],
        ),
        Letter::E => ([Cl, Cv, Cv, Cv, Cv], &[UPRIGHT, THUMB_ACROSS]),
        Letter::F => ([Any, Cl, Ex, Ex, Ex], &[Check::Touching(THUMB_TIP, INDEX_TIP)]),
        Letter::G => ([Ex, Ex, Fo, Fo, Fo], &[Check::Pointing(Index, Heading::Sideways)]),
        Letter::H => (
            [Any, Ex, Ex, Fo, Fo],
            &[
                Check::Pointing(Index, Heading::Sideways),
                Check::Touching(INDEX_TIP, MIDDLE_TIP),
            ],
        ),
        Letter::I => ([Cl, Fo, Fo, Fo, Ex], &[UPRIGHT, THUMB_ACROSS]),
        Letter::J => ([Cl, Fo, Fo, Fo, Ex], &[Check::Tilted]),
        Letter::K => (
            [Any, Ex, Ex, Cl, Cl],
            &[
                UPRIGHT,
                Check::Pointing(Index, Heading::Up),
                Check::Touching(THUMB_TIP, MIDDLE_PIP),
            ],
        ),
        Letter::L => (
            [Ex, Ex, Fo, Fo, Fo],
            &[UPRIGHT, Check::Pointing(Index, Heading::Up), THUMB_BESIDE],
        ),
        Letter::M => ([Any, Cv, Cv, Cv, Fo], &[THUMB_ACROSS]),
        Letter::N => ([Any, Cv, Cv, Fo, Fo], &[THUMB_ACROSS]),
        Letter::O => ([Any, Cv, Cv, Cv, Cv], &[Check::Touching(THUMB_TIP, INDEX_TIP)]),
        Letter::P => (
            [Any, Ex, Ex, Cl, Cl],
            &[
                Check::Pointing(Index, Heading::Down),
                Check::Touching(THUMB_TIP, MIDDLE_PIP),
            ],
        ),
        Letter::Q => ([Ex, Ex, Fo, Fo, Fo], &[Check::Pointing(Index, Heading::Down)]),
        Letter::R => (
            [Cl, Ex, Ex, Cl, Cl],
            &[
                UPRIGHT,
                Check::Crossed(Index, Middle),
                Check::Apart(THUMB_TIP, MIDDLE_PIP),
            ],
        ),
        Letter::S => ([Any, Fo, Fo, Fo, Fo], &[UPRIGHT, THUMB_ACROSS]),
        Letter::T => ([Any, Cl, Fo, Fo, Fo], &[Check::Touching(THUMB_TIP, INDEX_PIP)]),
        Letter::U => (
            [Cl, Ex, Ex, Cl, Cl],
            &[
                UPRIGHT,
                Check::Together(Index, Middle),
                Check::Apart(THUMB_TIP, MIDDLE_PIP),
            ],
        ),
        Letter::V => (
            [Cl, Ex, Ex, Cl, Cl],
            &[
                UPRIGHT,
                Check::Spread(Index, Middle),
                Check::Apart(THUMB_TIP, MIDDLE_PIP),
            ],
        ),
        Letter::W => ([Cl, Ex, Ex, Ex, Cl], &[UPRIGHT, Check::Spread(Index, Ring)]),
        Letter::X => ([Any, Cv, Fo, Fo, Fo], &[UPRIGHT, Check::Apart(THUMB_TIP, INDEX_PIP)]),
        Letter::Y => ([Ex, Fo, Fo, Fo, Ex], &[Check::Spread(Thumb, Pinky)]),
        Letter::Z => ([Cl, Ex, Fo, Fo, Fo], &[Check::Pointing(Index, Heading::Sideways)]),
    };
    LetterRule {
        letter,
        fingers,
        checks,
    }
}
