//! Per-frame processing: raw detector output in, feedback out.
//!
//! The pipeline is stateless. Frames that cannot be measured (no hand, wrong
//! landmark count, collapsed geometry) become [`ClassificationResult::Waiting`]
//! rather than errors, since detector noise is expected on every frame.

use log::{debug, trace};
use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::instrument;

use fingerspell_core::{
    analyze, normalize, HandLandmarks, HandMetrics, LandmarkError, LandmarkPoint, NormalizedHand,
};
use fingerspell_letters::{
    ClassificationResult, ClassifierParams, Letter, LetterClassifier, RuleEvaluation,
};

use crate::Session;

/// Everything measured about one frame, for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameEvaluation {
    pub hand: NormalizedHand,
    pub metrics: HandMetrics,
    pub rule: RuleEvaluation,
    pub result: ClassificationResult,
}

/// Normalize, measure and classify single frames.
#[derive(Clone, Debug, Default)]
pub struct FramePipeline {
    classifier: LetterClassifier,
}

impl FramePipeline {
    pub fn new(params: ClassifierParams) -> Self {
        Self {
            classifier: LetterClassifier::new(params),
        }
    }

    pub fn params(&self) -> &ClassifierParams {
        self.classifier.params()
    }

    pub fn classifier(&self) -> &LetterClassifier {
        &self.classifier
    }

    /// Validate, normalize and measure a raw frame.
    pub fn measure(
        &self,
        raw: &[LandmarkPoint],
    ) -> Result<(NormalizedHand, HandMetrics), LandmarkError> {
        let landmarks = HandLandmarks::from_slice(raw)?;
        let hand = normalize(&landmarks)?;
        let metrics = analyze(&hand, &self.params().fingers)?;
        Ok((hand, metrics))
    }

    /// Classify one frame against `target`.
    ///
    /// `None` and an empty slice both mean no hand was detected.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip_all, fields(target = %target))
    )]
    pub fn process_frame(
        &self,
        raw: Option<&[LandmarkPoint]>,
        target: Letter,
    ) -> ClassificationResult {
        let Some(raw) = raw.filter(|points| !points.is_empty()) else {
            trace!("no hand in frame");
            return ClassificationResult::Waiting;
        };
        let (hand, metrics) = match self.measure(raw) {
            Ok(measured) => measured,
            Err(err) => {
                debug!("frame downgraded to waiting: {err}");
                return ClassificationResult::Waiting;
            }
        };
        let result = self.classifier.classify(target, &metrics, &hand);
        trace!("{target}: {result:?}");
        result
    }

    /// Full breakdown of a frame that contains a hand.
    pub fn evaluate(
        &self,
        raw: &[LandmarkPoint],
        target: Letter,
    ) -> Result<FrameEvaluation, LandmarkError> {
        let (hand, metrics) = self.measure(raw)?;
        let rule = self.classifier.explain(target, &metrics, &hand);
        let result = rule.result();
        Ok(FrameEvaluation {
            hand,
            metrics,
            rule,
            result,
        })
    }

    /// Classify against the session's current letter and record the result.
    pub fn process_for_session(
        &self,
        session: &mut Session,
        raw: Option<&[LandmarkPoint]>,
    ) -> ClassificationResult {
        let result = self.process_frame(raw, session.current_letter());
        session.record_result(result);
        result
    }

    /// Classify a sequence of frames against one letter.
    pub fn process_frames<'a, I>(&self, frames: I, target: Letter) -> Vec<ClassificationResult>
    where
        I: IntoIterator<Item = Option<&'a [LandmarkPoint]>>,
    {
        frames
            .into_iter()
            .map(|frame| self.process_frame(frame, target))
            .collect()
    }
}
