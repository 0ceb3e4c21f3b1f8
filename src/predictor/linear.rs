use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::{check_feature_order, Predictor};
use crate::error::PredictError;

/// Ordinary linear regression exported as JSON
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn from_json(content: &str) -> Result<Self> {
        let model: LinearModel =
            serde_json::from_str(content).context("failed to parse linear model")?;
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid model artifact {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.len() != self.feature_names.len() {
            bail!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.feature_names.len()
            );
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            bail!("model has non-finite parameters");
        }
        check_feature_order(&self.feature_names)
    }
}

impl Predictor for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        if let Some(i) = features.iter().position(|x| !x.is_finite()) {
            return Err(PredictError::NonFiniteInput {
                name: self.feature_names[i].clone(),
            });
        }

        let price = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>();

        if !price.is_finite() {
            return Err(PredictError::NonFiniteOutput);
        }
        Ok(price)
    }
}
