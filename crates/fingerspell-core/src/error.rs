use crate::landmarks::Finger;

/// Reasons a landmark frame cannot be turned into finger metrics.
///
/// Every variant describes transient detector noise. Callers in the frame
/// pipeline downgrade all of them to "no usable hand".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} hand landmarks, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("hand bounding box has zero extent")]
    DegenerateBounds,
    #[error("{finger:?} joints collapse onto each other")]
    DegenerateFinger { finger: Finger },
}
