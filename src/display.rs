use serde::Serialize;

use crate::encoding::FeatureRecord;

const CURRENCY: &str = "₹";

/// A successful submission: the price and the exact record behind it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub price: f64,
    pub formatted: String,
    pub record: FeatureRecord,
}

impl Prediction {
    pub fn new(price: f64, record: FeatureRecord) -> Self {
        Self {
            price,
            formatted: format_currency(price),
            record,
        }
    }
}

/// What the result area of the page shows
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Panel {
    /// No submission yet
    Idle,
    ResultShown { prediction: Prediction },
    Failed { message: String },
}

/// Rupee amount with thousands separators and two decimals, e.g. `₹ 1,234.50`
pub fn format_currency(value: f64) -> String {
    let digits = format!("{:.2}", value.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{} {}{}.{}", CURRENCY, sign, grouped, frac)
}
