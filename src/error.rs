use crate::types::TrainingKind;
use thiserror::Error;

/// Errors raised while turning a raw sensor package into a workout.
#[derive(Debug, Error, PartialEq)]
pub enum PackageError {
    /// The type code is not one of `SWM`, `RUN`, `WLK`.
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    /// The parameter list does not match the variant's positional layout.
    #[error("{kind} expects {expected} parameters, got {actual}")]
    ParameterCount {
        kind: TrainingKind,
        expected: usize,
        actual: usize,
    },
}
