use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::display::Prediction;
use crate::encoding::encode;
use crate::error::SubmitError;
use crate::form::{validate_input, CarInput};
use crate::predictor::{load_predictor, predict_price, Predictor};
use crate::reference::{load_reference_data, ReferenceData};

/// Everything loaded at startup; read-only afterwards
pub struct AppState {
    pub reference: ReferenceData,
    pub predictor: Box<dyn Predictor>,
}

impl AppState {
    pub fn new(reference: ReferenceData, predictor: Box<dyn Predictor>) -> Self {
        Self {
            reference,
            predictor,
        }
    }

    /// Load both artifacts. Any failure here means nothing can be served.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let reference =
            load_reference_data(&config.dataset_path).context("failed to load reference data")?;
        let predictor = load_predictor(&config.model_path).context("failed to load predictor")?;
        Ok(Self::new(reference, predictor))
    }
}

/// Validate, encode and predict for one submission.
///
/// Either the whole sequence succeeds and a price comes back, or nothing
/// does.
pub fn submit(state: &AppState, input: &CarInput) -> Result<Prediction, SubmitError> {
    validate_input(input)?;
    let record = encode(input)?;
    log::debug!("Encoded submission: {:?}", record);

    let price = predict_price(state.predictor.as_ref(), &record)?;
    Ok(Prediction::new(price, record))
}
