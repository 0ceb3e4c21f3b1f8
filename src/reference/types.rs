use std::str::FromStr;

use crate::encoding::{Brand, Fuel, Owner, SellerType, Transmission};
use crate::error::EncodeError;

/// Distinct values per categorical column of the reference dataset.
///
/// Each list keeps the order in which values first appear in the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub(crate) brands: Vec<String>,
    pub(crate) fuels: Vec<String>,
    pub(crate) seller_types: Vec<String>,
    pub(crate) transmissions: Vec<String>,
    pub(crate) owners: Vec<String>,
    /// Number of listings read
    pub(crate) rows: usize,
}

impl ReferenceData {
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn fuels(&self) -> &[String] {
        &self.fuels
    }

    pub fn seller_types(&self) -> &[String] {
        &self.seller_types
    }

    pub fn transmissions(&self) -> &[String] {
        &self.transmissions
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check that every option the form can offer has an encoding.
    ///
    /// The form draws its options from this data and the encoder has no
    /// fallback, so a value that fails here would fail on every submission
    /// that picks it.
    pub fn verify_encodable(&self) -> Result<(), EncodeError> {
        all_parse::<Brand>(&self.brands)?;
        all_parse::<Fuel>(&self.fuels)?;
        all_parse::<SellerType>(&self.seller_types)?;
        all_parse::<Transmission>(&self.transmissions)?;
        all_parse::<Owner>(&self.owners)?;
        Ok(())
    }
}

fn all_parse<T: FromStr<Err = EncodeError>>(values: &[String]) -> Result<(), EncodeError> {
    for value in values {
        value.parse::<T>()?;
    }
    Ok(())
}

/// Append `value` unless it is already present
pub(crate) fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_distinct_keeps_first_seen_order() {
        let mut values = vec![];
        for v in ["Diesel", "Petrol", "Diesel", "CNG", "Petrol"] {
            push_distinct(&mut values, v);
        }
        assert_eq!(values, vec!["Diesel", "Petrol", "CNG"]);
    }

    #[test]
    fn test_verify_encodable_names_the_bad_value() {
        let data = ReferenceData {
            brands: vec!["Maruti".to_string(), "Tesla".to_string()],
            ..Default::default()
        };
        assert_eq!(
            data.verify_encodable(),
            Err(EncodeError::UnknownCategory {
                column: "name",
                value: "Tesla".to_string(),
            })
        );
    }
}
