//! The model seam.
//!
//! Everything above this module sees a predictor only as "ordered numbers
//! in, one price out". The concrete artifact format is picked from the file
//! extension at startup.

pub mod linear;

use std::path::Path;

use anyhow::{bail, Result};

use crate::encoding::FeatureRecord;
use crate::error::PredictError;

pub use linear::LinearModel;

/// A loaded, immutable price model
pub trait Predictor: Send + Sync {
    /// Column names the model was trained on, in input order
    fn feature_names(&self) -> &[String];

    /// Predict a price from features laid out as `feature_names`
    fn predict(&self, features: &[f64]) -> Result<f64, PredictError>;
}

/// Run one encoded record through the predictor
pub fn predict_price(predictor: &dyn Predictor, record: &FeatureRecord) -> Result<f64, PredictError> {
    predictor.predict(&record.to_features())
}

/// Load a predictor artifact, choosing the format by extension
pub fn load_predictor(path: &Path) -> Result<Box<dyn Predictor>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let model = LinearModel::load(path)?;
            log::info!(
                "Loaded linear model from {} ({} features)",
                path.display(),
                model.feature_names().len()
            );
            Ok(Box::new(model))
        }
        _ => bail!("unsupported model format: {}", path.display()),
    }
}

/// Check that a model expects exactly the columns the encoder produces
pub(crate) fn check_feature_order(names: &[String]) -> Result<()> {
    let expected = FeatureRecord::COLUMNS;
    if names.len() != expected.len() || names.iter().zip(expected).any(|(a, b)| a != b) {
        bail!(
            "model feature order {:?} does not match encoder columns {:?}",
            names,
            expected
        );
    }
    Ok(())
}
