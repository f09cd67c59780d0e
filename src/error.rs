use crate::core::label::Label;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// No observations were supplied, so the feature count is unknown.
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("observations have no features")]
    NoFeatures,

    #[error("got {observations} observations but {labels} labels")]
    LengthMismatch { observations: usize, labels: usize },

    #[error("observation {index} has {found} features, expected {expected}")]
    FeatureCountMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The observation passed to `predict` does not match the trained width.
    #[error("observation has {found} features, expected {expected}")]
    ObservationLength { expected: usize, found: usize },

    /// `predict` was called before a successful `train`.
    #[error("classifier has not been trained")]
    NotTrained,

    #[error("not a valid classification: index {0} is not left, keep or right")]
    InvalidClassification(usize),

    #[error("class `{0}` has no training observations")]
    DegenerateClass(Label),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
