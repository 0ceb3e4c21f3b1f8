//! Typed failures for a single form submission.
//!
//! Startup failures are not listed here: they are fatal and travel as
//! `anyhow::Error` straight out of `main`.

use thiserror::Error;

/// A categorical value with no entry in its encoding table
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown {column} value: {value:?}")]
    UnknownCategory { column: &'static str, value: String },
}

/// A submitted field that the form controls would never have produced
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing field: {0}")]
    Missing(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} = {value} is not a step of {step} from {min}")]
    OffStep {
        field: &'static str,
        value: i64,
        min: i64,
        step: i64,
    },
}

/// The predictor refused the assembled feature record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictError {
    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature {name} is not a finite number")]
    NonFiniteInput { name: String },

    #[error("model produced a non-finite price")]
    NonFiniteOutput,
}

/// Everything that can stop a submission from producing a price
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("invalid input: {0}")]
    Form(#[from] FormError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
}

impl SubmitError {
    /// True when the submission itself was bad, as opposed to the model
    pub fn is_input_error(&self) -> bool {
        matches!(self, SubmitError::Form(_) | SubmitError::Encode(_))
    }
}
