use serde::Serialize;

use super::types::{Brand, Fuel, Owner, SellerType, Transmission};
use crate::error::EncodeError;
use crate::form::CarInput;

/// One row of model input, in the column order the model was trained on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub name: u8,
    pub year: i64,
    pub km_driven: i64,
    pub fuel: u8,
    pub seller_type: u8,
    pub transmission: u8,
    pub owner: u8,
    pub mileage: i64,
    pub engine: i64,
    pub max_power: i64,
    pub seats: i64,
}

impl FeatureRecord {
    pub const COLUMNS: [&'static str; 11] = [
        "name",
        "year",
        "km_driven",
        "fuel",
        "seller_type",
        "transmission",
        "owner",
        "mileage",
        "engine",
        "max_power",
        "seats",
    ];

    /// Values in `COLUMNS` order
    pub fn cells(&self) -> [i64; 11] {
        [
            self.name.into(),
            self.year,
            self.km_driven,
            self.fuel.into(),
            self.seller_type.into(),
            self.transmission.into(),
            self.owner.into(),
            self.mileage,
            self.engine,
            self.max_power,
            self.seats,
        ]
    }

    pub fn to_features(&self) -> Vec<f64> {
        self.cells().iter().map(|&v| v as f64).collect()
    }
}

/// Map categorical values to their trained codes; numbers pass through.
///
/// There is no fallback: a value missing from its table is an error.
pub fn encode(input: &CarInput) -> Result<FeatureRecord, EncodeError> {
    Ok(FeatureRecord {
        name: input.brand.parse::<Brand>()?.code(),
        year: input.year,
        km_driven: input.km_driven,
        fuel: input.fuel.parse::<Fuel>()?.code(),
        seller_type: input.seller_type.parse::<SellerType>()?.code(),
        transmission: input.transmission.parse::<Transmission>()?.code(),
        owner: input.owner.parse::<Owner>()?.code(),
        mileage: input.mileage,
        engine: input.engine,
        max_power: input.max_power,
        seats: input.seats,
    })
}
