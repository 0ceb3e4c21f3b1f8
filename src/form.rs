//! Form controls and submission parsing.
//!
//! The page renders one choice control per categorical attribute and one
//! bounded slider per numeric attribute. The browser keeps slider values on
//! their grid, but anything can be POSTed, so submissions are checked again
//! against the same bounds here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::reference::ReferenceData;

/// A bounded numeric control with a fixed step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub field: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Slider {
    /// Whether `value` is a position the slider can actually take
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step == 0
    }

    pub fn check(&self, value: i64) -> Result<i64, FormError> {
        if value < self.min || value > self.max {
            return Err(FormError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if (value - self.min) % self.step != 0 {
            return Err(FormError::OffStep {
                field: self.field,
                value,
                min: self.min,
                step: self.step,
            });
        }
        Ok(value)
    }

    /// Every value the slider can emit, lowest first
    pub fn values(&self) -> impl Iterator<Item = i64> {
        (self.min..=self.max).step_by(self.step as usize)
    }
}

pub const YEAR: Slider = Slider {
    field: "year",
    label: "Car Manufacture Year",
    min: 1994,
    max: 2025,
    step: 1,
};

pub const KM_DRIVEN: Slider = Slider {
    field: "km_driven",
    label: "Kilometers Driven",
    min: 1,
    max: 200_000,
    step: 1000,
};

pub const MILEAGE: Slider = Slider {
    field: "mileage",
    label: "Mileage (kmpl)",
    min: 10,
    max: 40,
    step: 1,
};

pub const ENGINE: Slider = Slider {
    field: "engine",
    label: "Engine CC",
    min: 700,
    max: 5000,
    step: 100,
};

pub const MAX_POWER: Slider = Slider {
    field: "max_power",
    label: "Max Power (bhp)",
    min: 0,
    max: 200,
    step: 1,
};

pub const SEATS: Slider = Slider {
    field: "seats",
    label: "No. of Seats",
    min: 5,
    max: 10,
    step: 1,
};

pub const SLIDERS: [Slider; 6] = [YEAR, KM_DRIVEN, MILEAGE, ENGINE, MAX_POWER, SEATS];

/// A selection control whose options come from the reference dataset
#[derive(Clone, Copy)]
pub struct Choice {
    pub field: &'static str,
    pub label: &'static str,
    pub options: fn(&ReferenceData) -> &[String],
}

pub const CHOICES: [Choice; 5] = [
    Choice {
        field: "brand",
        label: "Select the Car Brand",
        options: ReferenceData::brands,
    },
    Choice {
        field: "fuel",
        label: "Fuel Type",
        options: ReferenceData::fuels,
    },
    Choice {
        field: "seller_type",
        label: "Seller Type",
        options: ReferenceData::seller_types,
    },
    Choice {
        field: "transmission",
        label: "Transmission",
        options: ReferenceData::transmissions,
    },
    Choice {
        field: "owner",
        label: "Owner Type",
        options: ReferenceData::owners,
    },
];

/// Raw widget values for one submission, before encoding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInput {
    pub brand: String,
    pub year: i64,
    pub km_driven: i64,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub mileage: i64,
    pub engine: i64,
    pub max_power: i64,
    pub seats: i64,
}

impl CarInput {
    /// Numeric fields paired with the slider that bounds them
    pub fn numeric_fields(&self) -> [(&'static Slider, i64); 6] {
        [
            (&YEAR, self.year),
            (&KM_DRIVEN, self.km_driven),
            (&MILEAGE, self.mileage),
            (&ENGINE, self.engine),
            (&MAX_POWER, self.max_power),
            (&SEATS, self.seats),
        ]
    }
}

/// Check every numeric field against its slider
pub fn validate_input(input: &CarInput) -> Result<(), FormError> {
    for (slider, value) in input.numeric_fields() {
        slider.check(value)?;
    }
    Ok(())
}

/// Turn url-encoded form fields into a validated `CarInput`
pub fn parse_submission(fields: &HashMap<String, String>) -> Result<CarInput, FormError> {
    let text = |field: &'static str| -> Result<String, FormError> {
        fields
            .get(field)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or(FormError::Missing(field))
    };
    let number = |slider: &Slider| -> Result<i64, FormError> {
        let raw = text(slider.field)?;
        raw.trim().parse::<i64>().map_err(|_| FormError::NotANumber {
            field: slider.field,
            value: raw.clone(),
        })
    };

    let input = CarInput {
        brand: text("brand")?,
        year: number(&YEAR)?,
        km_driven: number(&KM_DRIVEN)?,
        fuel: text("fuel")?,
        seller_type: text("seller_type")?,
        transmission: text("transmission")?,
        owner: text("owner")?,
        mileage: number(&MILEAGE)?,
        engine: number(&ENGINE)?,
        max_power: number(&MAX_POWER)?,
        seats: number(&SEATS)?,
    };

    validate_input(&input)?;
    Ok(input)
}
