//! Rule evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use fingerspell_core::{Finger, HandMetrics, HandPredicates, NormalizedHand};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::rule::{rule_for, Check, FingerState, LetterRule};
use crate::{ClassifierParams, Letter};

/// Outcome of one frame for the target letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationResult {
    /// No usable hand in the frame.
    Waiting,
    Correct,
    Incorrect,
}

impl ClassificationResult {
    /// Feedback text shown to the learner.
    pub fn message(self) -> &'static str {
        match self {
            ClassificationResult::Waiting => "Waiting...",
            ClassificationResult::Correct => "Correct!",
            ClassificationResult::Incorrect => "Try again",
        }
    }

    pub fn is_correct(self) -> bool {
        self == ClassificationResult::Correct
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationResult::Waiting => "waiting",
            ClassificationResult::Correct => "correct",
            ClassificationResult::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-finger outcome inside a [`RuleEvaluation`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FingerCheck {
    pub finger: Finger,
    pub required: FingerState,
    pub angle: f32,
    pub passed: bool,
}

/// Per-check outcome inside a [`RuleEvaluation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
}

/// Which parts of a letter rule held for a frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleEvaluation {
    pub letter: Letter,
    pub fingers: Vec<FingerCheck>,
    pub checks: Vec<CheckOutcome>,
    /// Other letters whose rules the same frame satisfies.
    pub rivals: Vec<Letter>,
}

impl RuleEvaluation {
    /// The letter's own rule held, rivals aside.
    pub fn passed(&self) -> bool {
        self.fingers.iter().all(|f| f.passed) && self.checks.iter().all(|c| c.passed)
    }

    pub fn result(&self) -> ClassificationResult {
        if self.passed() && self.rivals.is_empty() {
            ClassificationResult::Correct
        } else {
            ClassificationResult::Incorrect
        }
    }
}

/// Decides whether a measured hand forms a target letter.
#[derive(Clone, Debug, Default)]
pub struct LetterClassifier {
    params: ClassifierParams,
}

impl LetterClassifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// `Correct` iff every finger posture and every check of the letter's
    /// rule holds and no other letter's rule does. Never returns `Waiting`:
    /// that is decided before a hand is measured.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip_all, fields(letter = %letter))
    )]
    pub fn classify(
        &self,
        letter: Letter,
        metrics: &HandMetrics,
        hand: &NormalizedHand,
    ) -> ClassificationResult {
        let predicates = HandPredicates::new(hand, metrics, &self.params.predicates);
        if !rule_holds(&rule_for(letter), metrics, &predicates) {
            log::trace!("{letter}: rule does not hold");
            return ClassificationResult::Incorrect;
        }
        let result = match rivals(letter, metrics, &predicates).next() {
            Some(rival) => {
                log::trace!("{letter}: pose also satisfies {rival}");
                ClassificationResult::Incorrect
            }
            None => ClassificationResult::Correct,
        };
        result
    }

    /// Like [`classify`](Self::classify) but reports every sub-condition.
    pub fn explain(
        &self,
        letter: Letter,
        metrics: &HandMetrics,
        hand: &NormalizedHand,
    ) -> RuleEvaluation {
        let rule = rule_for(letter);
        let predicates = HandPredicates::new(hand, metrics, &self.params.predicates);
        let fingers = metrics
            .iter()
            .map(|(finger, metric)| {
                let required = rule.fingers[finger.index()];
                FingerCheck {
                    finger,
                    required,
                    angle: metric.angle,
                    passed: required.matches(metric),
                }
            })
            .collect();
        let checks = rule
            .checks
            .iter()
            .map(|&check| CheckOutcome {
                check,
                passed: check.holds(&predicates),
            })
            .collect();
        RuleEvaluation {
            letter,
            fingers,
            checks,
            rivals: rivals(letter, metrics, &predicates).collect(),
        }
    }

    /// Every letter whose rule the hand satisfies, in alphabet order.
    ///
    /// A frame is `Correct` for a letter only when this is exactly that letter.
    pub fn matching_letters(&self, metrics: &HandMetrics, hand: &NormalizedHand) -> Vec<Letter> {
        let predicates = HandPredicates::new(hand, metrics, &self.params.predicates);
        Letter::ALL
            .into_iter()
            .filter(|&l| rule_holds(&rule_for(l), metrics, &predicates))
            .collect()
    }
}

fn rule_holds(rule: &LetterRule, metrics: &HandMetrics, predicates: &HandPredicates<'_>) -> bool {
    metrics
        .iter()
        .all(|(finger, metric)| rule.fingers[finger.index()].matches(metric))
        && rule.checks.iter().all(|c| c.holds(predicates))
}

/// Letters other than `letter` whose rules also hold.
fn rivals<'a>(
    letter: Letter,
    metrics: &'a HandMetrics,
    predicates: &'a HandPredicates<'a>,
) -> impl Iterator<Item = Letter> + 'a {
    Letter::ALL
        .into_iter()
        .filter(move |&l| l != letter && rule_holds(&rule_for(l), metrics, predicates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reference_builder, reference_pose};
    use fingerspell_core::synth::FingerPose;
    use fingerspell_core::{
        analyze, normalize, FingerMetric, FingerParams, HandLandmarks, LandmarkPoint,
    };
    use fingerspell_core::{INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, THUMB_TIP};
    use nalgebra::Vector3;

    fn measure_landmarks(landmarks: &HandLandmarks) -> (HandMetrics, NormalizedHand) {
        let hand = normalize(landmarks).unwrap();
        let metrics = analyze(&hand, &FingerParams::default()).unwrap();
        (metrics, hand)
    }

    fn measure(letter: Letter) -> (HandMetrics, NormalizedHand) {
        measure_landmarks(&reference_pose(letter).unwrap())
    }

    #[test]
    fn messages_match_results() {
        assert_eq!(ClassificationResult::Waiting.message(), "Waiting...");
        assert_eq!(ClassificationResult::Correct.message(), "Correct!");
        assert_eq!(ClassificationResult::Incorrect.message(), "Try again");
        assert_eq!(
            serde_json::to_string(&ClassificationResult::Incorrect).unwrap(),
            "\"incorrect\""
        );
    }

    #[test]
    fn reference_poses_match_only_their_letter() {
        let classifier = LetterClassifier::default();
        for letter in Letter::ALL {
            let (metrics, hand) = measure(letter);
            assert_eq!(
                classifier.matching_letters(&metrics, &hand),
                vec![letter],
                "reference pose for {letter}"
            );
        }
    }

    #[test]
    fn look_alike_pairs_are_told_apart() {
        let classifier = LetterClassifier::default();
        for (shown, target) in [
            (Letter::M, Letter::N),
            (Letter::N, Letter::M),
            (Letter::U, Letter::V),
            (Letter::V, Letter::U),
            (Letter::U, Letter::R),
            (Letter::K, Letter::P),
            (Letter::G, Letter::Q),
            (Letter::I, Letter::J),
            (Letter::A, Letter::S),
            (Letter::C, Letter::O),
        ] {
            let (metrics, hand) = measure(shown);
            assert_eq!(
                classifier.classify(target, &metrics, &hand),
                ClassificationResult::Incorrect,
                "{shown} shown, {target} asked"
            );
        }
    }

    #[test]
    fn boundary_angles_never_affirm() {
        let params = FingerParams::default();
        let (_, hand) = measure(Letter::B);
        let edge = FingerMetric::from_angle(params.extended_min_angle, Vector3::y(), &params);
        let metrics = HandMetrics::from_fingers([edge; 5]);
        let classifier = LetterClassifier::default();
        for letter in Letter::ALL {
            assert_eq!(
                classifier.classify(letter, &metrics, &hand),
                ClassificationResult::Incorrect,
                "{letter}"
            );
        }
    }

    #[test]
    fn explain_agrees_with_classify() {
        let classifier = LetterClassifier::default();
        let (metrics, hand) = measure(Letter::D);
        for letter in Letter::ALL {
            let eval = classifier.explain(letter, &metrics, &hand);
            assert_eq!(eval.fingers.len(), 5);
            assert_eq!(eval.result(), classifier.classify(letter, &metrics, &hand));
        }
        let b = classifier.explain(Letter::B, &metrics, &hand);
        assert!(b.fingers.iter().any(|f| f.finger == Finger::Middle && !f.passed));
    }

    #[test]
    fn thumb_variations_never_match_two_letters() {
        let classifier = LetterClassifier::default();
        let headings = [-3.1, -2.5, -2.0, -1.67, -1.35, -0.9, -0.6, -0.3];
        let bends = [1.0, 1.9, 2.6, 3.0];
        let contacts = [None, Some(INDEX_PIP), Some(INDEX_TIP), Some(MIDDLE_PIP), Some(MIDDLE_TIP)];
        for letter in Letter::ALL {
            for heading in headings {
                for bend in bends {
                    for contact in contacts {
                        let mut builder = reference_builder(letter)
                            .finger(Finger::Thumb, FingerPose::new(heading, 0.0, bend));
                        if let Some(joint) = contact {
                            builder = builder.thumb_touching(joint);
                        }
                        let (metrics, hand) = measure_landmarks(&builder.build().unwrap());
                        let matches = classifier.matching_letters(&metrics, &hand);
                        assert!(
                            matches.len() <= 1,
                            "{letter} with thumb {heading}/{bend} on {contact:?}: {matches:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn k_and_t_thumb_contacts_reject_their_neighbours() {
        let classifier = LetterClassifier::default();
        for letter in [Letter::R, Letter::U, Letter::V] {
            let landmarks = reference_builder(letter)
                .thumb_touching(MIDDLE_PIP)
                .build()
                .unwrap();
            let (metrics, hand) = measure_landmarks(&landmarks);
            assert_eq!(
                classifier.classify(letter, &metrics, &hand),
                ClassificationResult::Incorrect,
                "{letter}"
            );
        }

        let t_on_fist = reference_builder(Letter::A)
            .thumb_touching(INDEX_PIP)
            .build()
            .unwrap();
        let (metrics, hand) = measure_landmarks(&t_on_fist);
        assert_eq!(
            classifier.classify(Letter::A, &metrics, &hand),
            ClassificationResult::Incorrect
        );
    }

    #[test]
    fn ambiguous_frames_are_incorrect_for_every_candidate() {
        // E with the thumb tip tucked onto the curled index tip also reads as O
        let mut pts = reference_pose(Letter::E).unwrap().into_vec();
        let knuckle = pts[INDEX_MCP];
        let tip = pts[INDEX_TIP];
        pts[THUMB_TIP] = LandmarkPoint::new(knuckle.x - 0.02, tip.y, tip.z);
        let (metrics, hand) = measure_landmarks(&HandLandmarks::from_slice(&pts).unwrap());

        let classifier = LetterClassifier::default();
        assert_eq!(
            classifier.matching_letters(&metrics, &hand),
            vec![Letter::E, Letter::O]
        );
        for letter in [Letter::E, Letter::O] {
            assert_eq!(
                classifier.classify(letter, &metrics, &hand),
                ClassificationResult::Incorrect,
                "{letter}"
            );
            let eval = classifier.explain(letter, &metrics, &hand);
            assert!(eval.passed());
            assert_eq!(eval.result(), ClassificationResult::Incorrect);
            assert_eq!(eval.rivals.len(), 1);
        }
    }
}
