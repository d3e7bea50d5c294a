use fingerspell_core::{FingerParams, PredicateParams};
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the letter classifier.
///
/// These are the accuracy levers: rule logic stays fixed while the angles and
/// the proximity threshold are adjusted against real detector output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierParams {
    #[serde(default)]
    pub fingers: FingerParams,
    #[serde(default)]
    pub predicates: PredicateParams,
}
