use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::types::{push_distinct, ReferenceData};

/// The columns the form needs; anything else in the file is ignored
#[derive(Debug, Deserialize)]
struct Listing {
    name: String,
    fuel: String,
    seller_type: String,
    transmission: String,
    owner: String,
}

/// Reduce a listing name to its brand: the first whitespace-delimited word.
///
/// "Maruti Swift Dzire VDI" becomes "Maruti". Applying it twice changes
/// nothing.
pub fn extract_brand(name: &str) -> String {
    name.split_whitespace().next().unwrap_or_default().to_string()
}

/// Load the reference dataset from a CSV file with a header row
pub fn load_reference_data(path: &Path) -> Result<ReferenceData> {
    let file = File::open(path)
        .with_context(|| format!("failed to open reference dataset {}", path.display()))?;
    let data = read_reference_data(file)
        .with_context(|| format!("failed to load reference dataset {}", path.display()))?;

    log::info!(
        "Loaded {} listings from {} ({} brands, {} fuels, {} seller types, {} transmissions, {} owner types)",
        data.rows,
        path.display(),
        data.brands.len(),
        data.fuels.len(),
        data.seller_types.len(),
        data.transmissions.len(),
        data.owners.len()
    );

    Ok(data)
}

/// Parse listings and collect distinct values, then check they all encode
pub fn read_reference_data<R: Read>(reader: R) -> Result<ReferenceData> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut data = ReferenceData::default();

    for (i, row) in rdr.deserialize::<Listing>().enumerate() {
        // Header is line 1
        let line = i + 2;
        let listing = row.with_context(|| format!("malformed listing on line {}", line))?;

        let brand = extract_brand(&listing.name);
        if brand.is_empty() {
            bail!("blank car name on line {}", line);
        }

        push_distinct(&mut data.brands, &brand);
        push_distinct(&mut data.fuels, &listing.fuel);
        push_distinct(&mut data.seller_types, &listing.seller_type);
        push_distinct(&mut data.transmissions, &listing.transmission);
        push_distinct(&mut data.owners, &listing.owner);
        data.rows += 1;
    }

    if data.rows == 0 {
        bail!("reference dataset has no listings");
    }

    data.verify_encodable()
        .context("reference dataset offers a value with no encoding")?;

    Ok(data)
}
