//! Manual alphabet rules over normalized hand landmarks.
//!
//! A [`LetterRule`] pins each finger to a posture and adds a few geometric
//! checks; [`LetterClassifier`] evaluates one rule against a measured hand.
//!
//! ## Quickstart
//!
//! ```
//! use fingerspell_core::{analyze, normalize, FingerParams};
//! use fingerspell_letters::{reference_pose, ClassificationResult, Letter, LetterClassifier};
//!
//! let hand = normalize(&reference_pose(Letter::V).unwrap()).unwrap();
//! let metrics = analyze(&hand, &FingerParams::default()).unwrap();
//!
//! let classifier = LetterClassifier::default();
//! assert_eq!(
//!     classifier.classify(Letter::V, &metrics, &hand),
//!     ClassificationResult::Correct
//! );
//! assert_eq!(
//!     classifier.classify(Letter::U, &metrics, &hand),
//!     ClassificationResult::Incorrect
//! );
//! ```
//!
//! J and Z are signed with motion; only their final static handshape is
//! checked.

mod classifier;
mod letter;
mod params;
mod reference;
mod rule;

pub use classifier::{
    CheckOutcome, ClassificationResult, FingerCheck, LetterClassifier, RuleEvaluation,
};
pub use letter::{Letter, UnsupportedLetter};
pub use params::ClassifierParams;
pub use reference::{reference_builder, reference_pose};
pub use rule::{rule_for, Check, FingerState, LetterRule};
