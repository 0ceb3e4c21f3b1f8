pub mod loader;
pub mod types;

pub use loader::{extract_brand, load_reference_data, read_reference_data};
pub use types::ReferenceData;
